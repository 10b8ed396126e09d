//! Continuation-table merging.
//!
//! A table that runs over a page break comes out of linearization as two
//! tables separated by a page marker, and a blank line the layout
//! collaborator mis-detected as a text region can split a table the same
//! way. The merge pass fuses such tables back together while keeping
//! tables that are separated by real prose apart.

use crate::model::Element;

/// Outcome counters of one merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Tables whose rows were absorbed into a preceding table
    pub tables_merged: usize,
    /// Page markers and empty text blocks dropped from between merged tables
    pub separators_dropped: usize,
}

/// Fuse continuation tables in a whole-document element sequence.
///
/// See [`merge_with_report`].
pub fn merge(elements: Vec<Element>) -> Vec<Element> {
    merge_with_report(elements).0
}

/// Fuse continuation tables and report what was merged.
///
/// Each incoming table looks backward over the output built so far. Page
/// markers and whitespace-only text are skipped; visible text ends the
/// search and the table is kept separate. If a table is reached first, the
/// output is cut right after it and the incoming rows are appended to it.
pub fn merge_with_report(elements: Vec<Element>) -> (Vec<Element>, MergeReport) {
    let mut output: Vec<Element> = Vec::with_capacity(elements.len());
    let mut report = MergeReport::default();

    for element in elements {
        let incoming = match element {
            Element::Table(grid) if !output.is_empty() => grid,
            other => {
                output.push(other);
                continue;
            }
        };

        match merge_target(&output) {
            Some(target) => {
                report.tables_merged += 1;
                report.separators_dropped += output.len() - target - 1;
                output.truncate(target + 1);
                if let Some(Element::Table(grid)) = output.last_mut() {
                    grid.append(incoming);
                }
            }
            None => output.push(Element::Table(incoming)),
        }
    }

    if report.tables_merged > 0 {
        log::info!(
            "Merged {} continuation tables ({} separators dropped)",
            report.tables_merged,
            report.separators_dropped
        );
    }

    (output, report)
}

/// Index of the table an incoming table may continue, if any.
fn merge_target(output: &[Element]) -> Option<usize> {
    for (i, element) in output.iter().enumerate().rev() {
        match element {
            Element::Table(_) => return Some(i),
            Element::Text(s) if !s.trim().is_empty() => return None,
            Element::Text(_) | Element::PageMarker(_) => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellGrid;

    fn table(rows: &[&str]) -> Element {
        Element::Table(CellGrid::from_strings(rows.iter().map(|r| [*r])))
    }

    #[test]
    fn test_merge_across_page_marker() {
        let input = vec![table(&["a1", "a2"]), Element::PageMarker(2), table(&["b1"])];
        let (output, report) = merge_with_report(input);

        assert_eq!(output, vec![table(&["a1", "a2", "b1"])]);
        assert_eq!(report.tables_merged, 1);
        assert_eq!(report.separators_dropped, 1);
    }

    #[test]
    fn test_no_merge_across_prose() {
        let input = vec![
            table(&["a"]),
            Element::text("Note: see above"),
            table(&["b"]),
        ];
        let output = merge(input.clone());
        assert_eq!(output, input);
    }

    #[test]
    fn test_merge_across_empty_text() {
        let input = vec![table(&["a"]), Element::text(""), table(&["b"])];
        assert_eq!(merge(input), vec![table(&["a", "b"])]);
    }

    #[test]
    fn test_merge_across_many_separators() {
        let input = vec![
            Element::PageMarker(1),
            table(&["a"]),
            Element::text("  "),
            Element::PageMarker(2),
            Element::text("\n"),
            Element::PageMarker(3),
            table(&["b"]),
        ];
        let (output, report) = merge_with_report(input);

        assert_eq!(output, vec![Element::PageMarker(1), table(&["a", "b"])]);
        assert_eq!(report.separators_dropped, 4);
    }

    #[test]
    fn test_first_element_table_kept() {
        let input = vec![table(&["a"])];
        assert_eq!(merge(input.clone()), input);
    }

    #[test]
    fn test_table_after_marker_only() {
        let input = vec![Element::PageMarker(1), table(&["a"])];
        assert_eq!(merge(input.clone()), input);
    }

    #[test]
    fn test_chain_of_continuations() {
        let input = vec![
            table(&["1"]),
            Element::PageMarker(2),
            table(&["2"]),
            Element::PageMarker(3),
            table(&["3"]),
            Element::text("End of report"),
        ];
        assert_eq!(
            merge(input),
            vec![table(&["1", "2", "3"]), Element::text("End of report")]
        );
    }

    #[test]
    fn test_text_and_markers_pass_through() {
        let input = vec![
            Element::PageMarker(1),
            Element::text("Intro"),
            Element::PageMarker(2),
            Element::text(""),
        ];
        assert_eq!(merge(input.clone()), input);
    }

    #[test]
    fn test_empty_input() {
        let (output, report) = merge_with_report(Vec::new());
        assert!(output.is_empty());
        assert_eq!(report, MergeReport::default());
    }
}
