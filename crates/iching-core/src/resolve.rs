//! Splitting a cast figure into primary and relating shapes.

use crate::figure::{Figure, LINE_COUNT, Shape};
use crate::line::Line;

/// The shapes a figure resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Changing lines read as their current value.
    pub primary: Shape,
    /// Changing lines read as their transformed value; present only when
    /// the figure has at least one changing line.
    pub relating: Option<Shape>,
}

impl Resolution {
    /// Returns true if a relating figure exists.
    pub fn has_relating(&self) -> bool {
        self.relating.is_some()
    }
}

/// Resolve a figure into its primary and (if any line changes) relating shape.
pub fn resolve(figure: &Figure) -> Resolution {
    let mut primary = [Line::Solid; LINE_COUNT];
    let mut relating = [Line::Solid; LINE_COUNT];
    for (i, outcome) in figure.lines().iter().enumerate() {
        primary[i] = outcome.primary();
        relating[i] = outcome.relating();
    }

    Resolution {
        primary: Shape::new(primary),
        relating: (!figure.is_pure()).then_some(Shape::new(relating)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::LineOutcome;
    use proptest::prelude::*;

    #[test]
    fn pure_figure_has_no_relating() {
        let figure = Figure::decode("xyyxyx").unwrap();
        let resolution = resolve(&figure);
        assert!(!resolution.has_relating());
        assert_eq!(resolution.primary, Shape::decode("xyyxyx").unwrap());
    }

    #[test]
    fn single_changing_line() {
        let mut lines = [LineOutcome::StaticSolid; LINE_COUNT];
        lines[2] = LineOutcome::ChangingSolidToBroken;
        let resolution = Figure::new(lines).resolve();

        assert!(resolution.has_relating());
        let relating = resolution.relating.unwrap();
        assert_eq!(resolution.primary.lines()[2], Line::Broken);
        assert_eq!(relating.lines()[2], Line::Solid);
        for i in (0..LINE_COUNT).filter(|&i| i != 2) {
            assert_eq!(resolution.primary.lines()[i], relating.lines()[i]);
        }
    }

    #[test]
    fn all_changing_lines_invert() {
        let figure = Figure::new([LineOutcome::ChangingBrokenToSolid; LINE_COUNT]);
        let resolution = figure.resolve();
        assert_eq!(resolution.primary, Shape::decode("xxxxxx").unwrap());
        assert_eq!(resolution.relating, Some(Shape::decode("yyyyyy").unwrap()));
    }

    proptest! {
        #[test]
        fn relating_differs_exactly_at_changing_lines(
            lines in prop::array::uniform6(prop::sample::select(LineOutcome::ALL.to_vec()))
        ) {
            let figure = Figure::new(lines);
            let resolution = figure.resolve();
            prop_assert_eq!(resolution.has_relating(), !figure.is_pure());
            if let Some(relating) = resolution.relating {
                for (i, outcome) in lines.iter().enumerate() {
                    let differs = resolution.primary.lines()[i] != relating.lines()[i];
                    prop_assert_eq!(differs, outcome.is_changing());
                }
            }
        }
    }
}
