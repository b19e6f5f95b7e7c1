//! Line values.
//!
//! A [`Line`] is a resolved stroke of a shape. A [`LineOutcome`] is what a
//! cast produces: a static line, or a changing line that reads one way in
//! the primary figure and the other way in the relating figure.

use serde::{Deserialize, Serialize};

/// A static line of a resolved shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Line {
    /// Unbroken (yang) line.
    #[default]
    Solid,
    /// Broken (yin) line.
    Broken,
}

impl Line {
    /// Parse a line from its one-character code: `x` solid, `y` broken.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::Solid),
            'y' => Some(Self::Broken),
            _ => None,
        }
    }

    /// The one-character code for this line.
    pub fn code(self) -> char {
        match self {
            Self::Solid => 'x',
            Self::Broken => 'y',
        }
    }

    /// Nine-column glyph for terminal display.
    pub fn glyph(self) -> &'static str {
        LineOutcome::from(self).glyph()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The outcome of casting a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineOutcome {
    /// Static solid line (young yang).
    StaticSolid,
    /// Static broken line (young yin).
    StaticBroken,
    /// Changing line marked `X`: broken in the primary figure, solid in
    /// the relating figure.
    ChangingSolidToBroken,
    /// Changing line marked `O`: solid in the primary figure, broken in
    /// the relating figure.
    ChangingBrokenToSolid,
}

impl LineOutcome {
    /// Every outcome, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::StaticSolid,
        Self::StaticBroken,
        Self::ChangingSolidToBroken,
        Self::ChangingBrokenToSolid,
    ];

    /// Returns true for the two changing outcomes.
    pub fn is_changing(self) -> bool {
        matches!(
            self,
            Self::ChangingSolidToBroken | Self::ChangingBrokenToSolid
        )
    }

    /// The line as it reads in the primary figure.
    pub fn primary(self) -> Line {
        match self {
            Self::StaticSolid | Self::ChangingBrokenToSolid => Line::Solid,
            Self::StaticBroken | Self::ChangingSolidToBroken => Line::Broken,
        }
    }

    /// The line as it reads in the relating figure.
    pub fn relating(self) -> Line {
        match self {
            Self::StaticSolid | Self::ChangingSolidToBroken => Line::Solid,
            Self::StaticBroken | Self::ChangingBrokenToSolid => Line::Broken,
        }
    }

    /// Nine-column glyph for terminal display, with change markers.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::StaticSolid => "---------",
            Self::StaticBroken => "---   ---",
            Self::ChangingSolidToBroken => "--- X ---",
            Self::ChangingBrokenToSolid => "----O----",
        }
    }
}

impl From<Line> for LineOutcome {
    fn from(line: Line) -> Self {
        match line {
            Line::Solid => Self::StaticSolid,
            Line::Broken => Self::StaticBroken,
        }
    }
}

impl std::fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
