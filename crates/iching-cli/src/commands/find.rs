use iching_core::{Figure, HexResult, Reading, ReferenceTable};

use crate::render;

/// Look up the hexagram drawn by an x/y line string.
pub fn run(table: &ReferenceTable, code: &str, quiet: bool) -> HexResult<String> {
    let figure = Figure::decode(code)?;
    let reading = Reading::from_figure(table, &figure)?;
    Ok(render::reading(&reading, false, quiet))
}
