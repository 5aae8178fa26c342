//! Shared table scanning for percentage datapoints
//!
//! Tables carry no header metadata, so the header row is discovered by
//! content: the first cell equal (trimmed, case-folded) to a class variant
//! fixes both the header row and the class column.

use once_cell::sync::Lazy;
use prospectus_domain::Table;
use regex::Regex;

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.?\d*)%").unwrap());

/// Find the header row and class column for any of the given variants.
/// First qualifying row/column pair wins.
pub(crate) fn class_column(table: &Table, variants: &[String]) -> Option<(usize, usize)> {
    for (row_idx, row) in table.rows().iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let cell = cell.trim();
            for variant in variants {
                if variant.eq_ignore_ascii_case(cell)
                    || variant.replace("Class ", "").eq_ignore_ascii_case(cell)
                {
                    return Some((row_idx, col_idx));
                }
            }
        }
    }
    None
}

/// From the header row downward, find the first row whose first cell
/// contains any of the label substrings and extract the percent token at
/// the fixed column.
pub(crate) fn percent_at_column(
    table: &Table,
    header_row: usize,
    column: usize,
    labels: &[&str],
) -> Option<String> {
    for row in table.rows().iter().skip(header_row) {
        let Some(first_cell) = row.first() else {
            continue;
        };
        let first_lower = first_cell.to_lowercase();
        if !labels.iter().any(|label| first_lower.contains(label)) {
            continue;
        }
        if let Some(cell) = row.get(column) {
            if let Some(caps) = PERCENT_RE.captures(cell.trim()) {
                return Some(format!("{}%", &caps[1]));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expenses_table() -> Table {
        Table(vec![
            vec![
                "".to_string(),
                "Class A".to_string(),
                "Class C".to_string(),
                "Class I".to_string(),
                "Class F".to_string(),
            ],
            vec![
                "Management Fees".to_string(),
                "0.70%".to_string(),
                "0.70%".to_string(),
                "0.70%".to_string(),
                "0.70%".to_string(),
            ],
            vec![
                "Total Annual Fund Operating".to_string(),
                "1.19%".to_string(),
                "1.94%".to_string(),
                "0.92%".to_string(),
                "0.83%".to_string(),
            ],
        ])
    }

    #[test]
    fn test_class_column_exact_match() {
        let table = expenses_table();
        assert_eq!(class_column(&table, &["Class C".to_string()]), Some((0, 2)));
    }

    #[test]
    fn test_class_column_bare_letter_matches_header() {
        // A header cell holding just "C" matches the "Class C" variant
        let table = Table(vec![vec!["".to_string(), "C".to_string()]]);
        assert_eq!(class_column(&table, &["Class C".to_string()]), Some((0, 1)));
    }

    #[test]
    fn test_class_column_absent() {
        let table = expenses_table();
        assert_eq!(class_column(&table, &["Class Z".to_string()]), None);
    }

    #[test]
    fn test_percent_at_column() {
        let table = expenses_table();
        let value = percent_at_column(&table, 0, 2, &["total annual fund operating"]);
        assert_eq!(value.as_deref(), Some("1.94%"));
    }

    #[test]
    fn test_percent_missing_when_label_absent() {
        let table = expenses_table();
        assert_eq!(percent_at_column(&table, 0, 2, &["net expense"]), None);
    }
}
