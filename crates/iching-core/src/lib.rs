//! Hexagram casting, resolution, and reference lookup for the I Ching oracle.
//!
//! A reading starts from a six-line [`Figure`], either cast at random with
//! one of the [`CastMethod`]s or decoded from an x/y string. Resolving the
//! figure yields the primary [`Shape`] and, when any line is changing, the
//! relating shape. Both are matched against the embedded
//! [`ReferenceTable`] of 64 hexagrams to build a [`Reading`].

pub mod cast;
pub mod config;
pub mod error;
pub mod figure;
pub mod line;
pub mod reading;
pub mod resolve;
pub mod table;

pub use cast::{CastMethod, MARBLE_POOL, cast_line};
pub use config::ReadingConfig;
pub use error::{HexError, HexResult};
pub use figure::{Figure, LINE_COUNT, Shape};
pub use line::{Line, LineOutcome};
pub use reading::Reading;
pub use resolve::{Resolution, resolve};
pub use table::{RECORD_COUNT, ReferenceRecord, ReferenceTable};
