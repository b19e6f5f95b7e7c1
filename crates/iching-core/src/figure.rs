//! Six-line figures and shapes.
//!
//! Index 0 is the bottom line and index 5 the top line throughout. A
//! [`Figure`] holds cast outcomes and may contain changing lines; a
//! [`Shape`] is the static form used for table lookup.

use std::str::FromStr;

use rand::Rng;

use crate::cast::{CastMethod, cast_line};
use crate::error::{HexError, HexResult};
use crate::line::{Line, LineOutcome};
use crate::resolve::{Resolution, resolve};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// A static six-line shape, bottom line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape([Line; LINE_COUNT]);

impl Shape {
    /// Create a shape from its lines, bottom line first.
    pub const fn new(lines: [Line; LINE_COUNT]) -> Self {
        Self(lines)
    }

    /// The lines of this shape, bottom line first.
    pub fn lines(&self) -> &[Line; LINE_COUNT] {
        &self.0
    }

    /// Decode a shape from six `x` (solid) / `y` (broken) characters,
    /// leftmost character is the bottom line.
    pub fn decode(code: &str) -> HexResult<Self> {
        let invalid = || HexError::InvalidEncoding(code.to_string());
        if code.chars().count() != LINE_COUNT {
            return Err(invalid());
        }
        let mut lines = [Line::Solid; LINE_COUNT];
        for (slot, c) in lines.iter_mut().zip(code.chars()) {
            *slot = Line::from_code(c).ok_or_else(invalid)?;
        }
        Ok(Self(lines))
    }

    /// Encode this shape as six `x`/`y` characters, bottom line first.
    pub fn encode(&self) -> String {
        self.0.iter().map(|line| line.code()).collect()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for Shape {
    type Err = HexError;

    fn from_str(s: &str) -> HexResult<Self> {
        Self::decode(s)
    }
}

/// A cast figure of six line outcomes, bottom line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure([LineOutcome; LINE_COUNT]);

impl Figure {
    /// Create a figure from its outcomes, bottom line first.
    pub const fn new(lines: [LineOutcome; LINE_COUNT]) -> Self {
        Self(lines)
    }

    /// Cast six lines, bottom to top.
    pub fn generate<R: Rng + ?Sized>(method: CastMethod, rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| cast_line(method, &mut *rng)))
    }

    /// Decode a figure from an x/y string. Decoded lines are always static.
    pub fn decode(code: &str) -> HexResult<Self> {
        Shape::decode(code).map(Self::from)
    }

    /// The outcomes of this figure, bottom line first.
    pub fn lines(&self) -> &[LineOutcome; LINE_COUNT] {
        &self.0
    }

    /// Returns true if no line is changing.
    pub fn is_pure(&self) -> bool {
        !self.0.iter().any(|line| line.is_changing())
    }

    /// Split this figure into its primary and relating shapes.
    pub fn resolve(&self) -> Resolution {
        resolve(self)
    }
}

impl From<Shape> for Figure {
    fn from(shape: Shape) -> Self {
        Self(shape.0.map(LineOutcome::from))
    }
}
