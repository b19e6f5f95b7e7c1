//! Plain-text layout of readings.

use iching_core::{Figure, Reading, ReferenceRecord};

/// Column budget for wrapped descriptions.
pub const WRAP_WIDTH: usize = 35;

/// Title above the primary figure of a cast reading.
pub const PRIMARY_TITLE: &str = "  Primary Figure";

/// Title above the relating figure.
pub const RELATING_TITLE: &str = "  Relating Figure";

/// Render a whole reading. Untitled readings omit the primary title line.
pub fn reading(reading: &Reading<'_>, titled: bool, quiet: bool) -> String {
    let primary_title = if titled { PRIMARY_TITLE } else { "" };
    let mut out = figure_block(
        primary_title,
        reading.primary_figure(),
        reading.primary(),
        quiet,
    );
    if let Some(relating) = reading.relating() {
        out.push_str(&figure_block(
            RELATING_TITLE,
            &Figure::from(relating.shape),
            relating,
            quiet,
        ));
    }
    out
}

/// Render one figure block: title, lines top to bottom, identity, name and
/// (unless quiet) the wrapped description.
pub fn figure_block(title: &str, figure: &Figure, record: &ReferenceRecord, quiet: bool) -> String {
    let mut out = String::new();
    if !title.is_empty() {
        out.push_str(title);
        out.push('\n');
    }
    for line in figure.lines().iter().rev() {
        out.push_str(&format!("    {}\n", line.glyph()));
    }
    out.push_str(&format!("        {}\n", record.identity));
    out.push_str(&format!("    {}\n\n", record.name));
    if !quiet {
        out.push_str(&word_wrap(&record.description, WRAP_WIDTH));
        out.push_str("\n\n");
    }
    out
}

/// Greedy word wrap. Breaks only between words; a word wider than `width`
/// sits on its own line.
pub fn word_wrap(text: &str, width: usize) -> String {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return text.to_string();
    };

    let mut wrapped = String::from(first);
    let mut line_len = first.chars().count();
    for word in words {
        let len = word.chars().count();
        if line_len + 1 + len > width {
            wrapped.push('\n');
            line_len = len;
        } else {
            wrapped.push(' ');
            line_len += 1 + len;
        }
        wrapped.push_str(word);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use iching_core::{LINE_COUNT, LineOutcome, ReferenceTable};

    #[test]
    fn wrap_breaks_before_overflowing_word() {
        assert_eq!(word_wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
        assert_eq!(word_wrap("aaa bbb ccc", 6), "aaa\nbbb\nccc");
    }

    #[test]
    fn wrap_never_splits_words() {
        assert_eq!(word_wrap("tiny enormousword end", 5), "tiny\nenormousword\nend");
    }

    #[test]
    fn wrap_collapses_whitespace() {
        assert_eq!(word_wrap("  one\ntwo   three ", 35), "one two three");
    }

    #[test]
    fn wrap_blank_input_unchanged() {
        assert_eq!(word_wrap("", 35), "");
        assert_eq!(word_wrap("   ", 35), "   ");
    }

    #[test]
    fn wrap_respects_width() {
        let table = ReferenceTable::embedded().unwrap();
        for record in table.records() {
            for line in word_wrap(&record.description, WRAP_WIDTH).lines() {
                assert!(
                    line.chars().count() <= WRAP_WIDTH || !line.contains(' '),
                    "{}: {line:?}",
                    record.identity
                );
            }
        }
    }

    #[test]
    fn quiet_block_layout() {
        let table = ReferenceTable::embedded().unwrap();
        let record = table.lookup_by_identity(3).unwrap();
        let block = figure_block("", &Figure::from(record.shape), record, true);
        assert_eq!(
            block,
            "    ---   ---\n\
             \x20   ---------\n\
             \x20   ---   ---\n\
             \x20   ---   ---\n\
             \x20   ---   ---\n\
             \x20   ---------\n\
             \x20       3\n\
             \x20   Sprouting\n\n"
        );
    }

    #[test]
    fn block_includes_title_and_description() {
        let table = ReferenceTable::embedded().unwrap();
        let record = table.lookup_by_identity(1).unwrap();
        let block = figure_block(PRIMARY_TITLE, &Figure::from(record.shape), record, false);
        assert!(block.starts_with("  Primary Figure\n    ---------\n"));
        assert!(block.contains("Strength, creative energy, action;"));
        assert!(block.ends_with("enduring.\n\n"));
    }

    #[test]
    fn changing_reading_shows_markers_then_relating() {
        let table = ReferenceTable::embedded().unwrap();
        let mut lines = [LineOutcome::StaticSolid; LINE_COUNT];
        lines[5] = LineOutcome::ChangingBrokenToSolid;
        let figure = Figure::new(lines);
        let reading = Reading::from_figure(&table, &figure).unwrap();

        let out = super::reading(&reading, true, true);
        let primary_at = out.find(PRIMARY_TITLE).unwrap();
        let relating_at = out.find(RELATING_TITLE).unwrap();
        assert!(primary_at < relating_at);
        assert!(out[..relating_at].contains("    ----O----\n"));
        assert!(!out[relating_at..].contains('O'));
        assert!(out.contains("        1\n    Force\n"));
    }

    #[test]
    fn untitled_pure_reading() {
        let table = ReferenceTable::embedded().unwrap();
        let figure = Figure::decode("yyyyyy").unwrap();
        let reading = Reading::from_figure(&table, &figure).unwrap();
        let out = super::reading(&reading, false, true);
        assert_eq!(out, format!("{}        2\n    Field\n\n", "    ---   ---\n".repeat(6)));
    }
}
