//! Assembling a reading from a figure and the reference table.

use crate::config::ReadingConfig;
use crate::error::HexResult;
use crate::figure::Figure;
use crate::table::{ReferenceRecord, ReferenceTable};

/// A resolved reading: the primary record and, if any line changed, the
/// relating record.
#[derive(Debug, Clone)]
pub struct Reading<'t> {
    primary: &'t ReferenceRecord,
    primary_figure: Figure,
    relating: Option<&'t ReferenceRecord>,
}

impl<'t> Reading<'t> {
    /// Cast a random figure per `config` and resolve it.
    pub fn cast(table: &'t ReferenceTable, config: &ReadingConfig) -> HexResult<Self> {
        let mut rng = config.rng();
        let figure = Figure::generate(config.method, &mut rng);
        Self::from_figure(table, &figure)
    }

    /// Resolve `figure` and look up its primary and relating records.
    ///
    /// When the figure has changing lines the primary figure keeps them, so
    /// the change markers are displayed; otherwise it is the record's
    /// canonical shape.
    pub fn from_figure(table: &'t ReferenceTable, figure: &Figure) -> HexResult<Self> {
        let resolution = figure.resolve();
        let primary = table.lookup(&resolution.primary)?;
        let relating = resolution
            .relating
            .map(|shape| table.lookup(&shape))
            .transpose()?;
        let primary_figure = if relating.is_some() {
            *figure
        } else {
            Figure::from(primary.shape)
        };

        Ok(Self {
            primary,
            primary_figure,
            relating,
        })
    }

    /// A reading of a single record, with no relating figure.
    pub fn single(record: &'t ReferenceRecord) -> Self {
        Self {
            primary: record,
            primary_figure: Figure::from(record.shape),
            relating: None,
        }
    }

    /// The primary record.
    pub fn primary(&self) -> &'t ReferenceRecord {
        self.primary
    }

    /// The lines to display for the primary record.
    pub fn primary_figure(&self) -> &Figure {
        &self.primary_figure
    }

    /// The relating record, if any line changed.
    pub fn relating(&self) -> Option<&'t ReferenceRecord> {
        self.relating
    }
}
