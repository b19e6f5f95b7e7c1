use iching_core::{HexResult, Reading, ReadingConfig, ReferenceTable};

use crate::render;

pub fn run(table: &ReferenceTable, config: &ReadingConfig, quiet: bool) -> HexResult<String> {
    let reading = Reading::cast(table, config)?;
    Ok(render::reading(&reading, true, quiet))
}
