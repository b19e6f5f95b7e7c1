use iching_core::{HexResult, Reading, ReferenceTable};

use crate::render;

pub fn run(table: &ReferenceTable, id: i64, quiet: bool) -> HexResult<String> {
    let record = table.lookup_by_identity(id)?;
    Ok(render::reading(&Reading::single(record), false, quiet))
}
