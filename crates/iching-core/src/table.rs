//! The reference table of the 64 hexagrams.
//!
//! The table ships inside the binary as JSON and is deserialized once at
//! startup. Shapes are stored in the same x/y encoding accepted on the
//! command line.

use serde::Deserialize;

use crate::error::{HexError, HexResult};
use crate::figure::Shape;

/// Number of records in a complete table.
pub const RECORD_COUNT: usize = 64;

const EMBEDDED: &str = include_str!("../data/hexagrams.json");

#[derive(Deserialize)]
struct RawTable {
    hexagrams: Vec<RawRecord>,
}

#[derive(Deserialize)]
struct RawRecord {
    id: u8,
    name: String,
    shape: String,
    desc: String,
}

/// One hexagram of the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    /// Traditional sequence number, 1-64.
    pub identity: u8,
    /// Canonical shape, bottom line first.
    pub shape: Shape,
    /// Display name.
    pub name: String,
    /// Prose description.
    pub description: String,
}

impl TryFrom<RawRecord> for ReferenceRecord {
    type Error = HexError;

    fn try_from(raw: RawRecord) -> HexResult<Self> {
        if !(1..=RECORD_COUNT).contains(&usize::from(raw.id)) {
            return Err(HexError::MalformedRecord {
                id: raw.id,
                reason: "identity outside 1-64".into(),
            });
        }
        let shape = Shape::decode(&raw.shape).map_err(|e| HexError::MalformedRecord {
            id: raw.id,
            reason: e.to_string(),
        })?;
        Ok(Self {
            identity: raw.id,
            shape,
            name: raw.name.trim().to_string(),
            description: raw.desc,
        })
    }
}

/// The read-only table of reference records, in identity order.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    records: Vec<ReferenceRecord>,
}

impl ReferenceTable {
    /// Load the table embedded in the binary.
    pub fn embedded() -> HexResult<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Load a table from JSON of the form `{"hexagrams": [{"id", "name", "shape", "desc"}]}`.
    pub fn from_json(json: &str) -> HexResult<Self> {
        let raw: RawTable = serde_json::from_str(json)?;
        let mut records = raw
            .hexagrams
            .into_iter()
            .map(ReferenceRecord::try_from)
            .collect::<HexResult<Vec<_>>>()?;
        records.sort_by_key(|r| r.identity);
        Ok(Self { records })
    }

    /// All records, in identity order.
    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the record whose canonical shape equals `shape`.
    pub fn lookup(&self, shape: &Shape) -> HexResult<&ReferenceRecord> {
        self.records
            .iter()
            .find(|r| r.shape == *shape)
            .ok_or(HexError::UnknownShape(*shape))
    }

    /// Find the record with the given identity (1-64).
    pub fn lookup_by_identity(&self, id: i64) -> HexResult<&ReferenceRecord> {
        let in_range = usize::try_from(id).is_ok_and(|n| (1..=RECORD_COUNT).contains(&n));
        if !in_range {
            return Err(HexError::IdentityOutOfRange(id));
        }
        self.records
            .iter()
            .find(|r| i64::from(r.identity) == id)
            .ok_or(HexError::IdentityOutOfRange(id))
    }
}
