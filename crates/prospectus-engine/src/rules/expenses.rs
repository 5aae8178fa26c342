//! Expense-percentage extractors
//!
//! Two-phase strategy: tables first (class header column, then a label row
//! below it), then a windowed text search around any line carrying the
//! label phrase. Absence in one table never aborts, later tables are still
//! tried.

use crate::rules::table::{class_column, percent_at_column};
use prospectus_domain::{Extraction, Table};
use regex::Regex;

/// Extract total annual fund operating expenses for a class.
pub fn extract_annual_expenses(
    text: &str,
    tables: &[Table],
    variants: &[String],
) -> Option<Extraction> {
    extract_percentage(
        text,
        tables,
        variants,
        &["total annual fund operating"],
        |line| line.contains("total annual fund operating") && line.contains("expenses"),
        "expenses table",
        "expenses section",
    )
}

/// Extract net expenses after fee waiver/expense reimbursement.
pub fn extract_net_expenses(
    text: &str,
    tables: &[Table],
    variants: &[String],
) -> Option<Extraction> {
    extract_percentage(
        text,
        tables,
        variants,
        &["net expense", "net annual"],
        |line| {
            (line.contains("net expense") || line.contains("after fee waiver"))
                && line.contains("expense")
        },
        "net expenses table",
        "net expenses section",
    )
}

fn extract_percentage(
    text: &str,
    tables: &[Table],
    variants: &[String],
    table_labels: &[&str],
    line_matches: impl Fn(&str) -> bool,
    table_location: &str,
    text_location: &str,
) -> Option<Extraction> {
    // Phase 1: tables, in document order
    for table in tables {
        let Some((header_row, column)) = class_column(table, variants) else {
            continue;
        };
        if let Some(value) = percent_at_column(table, header_row, column, table_labels) {
            return Some(Extraction::new(value, table_location));
        }
    }

    // Phase 2: label line plus a two-line window either side
    let lines: Vec<&str> = text.split('\n').collect();
    for (i, line) in lines.iter().enumerate() {
        if !line_matches(&line.to_lowercase()) {
            continue;
        }
        let window = lines[i.saturating_sub(2)..lines.len().min(i + 3)].join("\n");
        for variant in variants {
            let pattern = format!(r"(?i){}.*?(\d+\.?\d+)%", regex::escape(variant));
            let re = Regex::new(&pattern).expect("escaped variant pattern");
            if let Some(caps) = re.captures(&window) {
                return Some(Extraction::new(format!("{}%", &caps[1]), text_location));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus_domain::ShareClass;

    fn sample_table() -> Table {
        Table(vec![
            vec![
                "".to_string(),
                "Class A".to_string(),
                "Class C".to_string(),
                "Class I".to_string(),
                "Class F".to_string(),
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
    fn test_annual_expenses_from_table_class_a() {
        let variants = ShareClass::new("Class A").variants();
        let result = extract_annual_expenses("", &[sample_table()], &variants).unwrap();
        assert_eq!(result.value, "1.19%");
        assert_eq!(result.location.as_deref(), Some("expenses table"));
    }

    #[test]
    fn test_annual_expenses_from_table_class_f() {
        let variants = ShareClass::new("Class F").variants();
        let result = extract_annual_expenses("", &[sample_table()], &variants).unwrap();
        assert_eq!(result.value, "0.83%");
        assert_eq!(result.location.as_deref(), Some("expenses table"));
    }

    #[test]
    fn test_later_tables_still_tried() {
        let unrelated = Table(vec![vec!["Shareholder Fees".to_string()]]);
        let variants = ShareClass::new("Class C").variants();
        let result =
            extract_annual_expenses("", &[unrelated, sample_table()], &variants).unwrap();
        assert_eq!(result.value, "1.94%");
    }

    #[test]
    fn test_annual_expenses_from_text_window() {
        let text = "Fee table\nTotal Annual Fund Operating Expenses\nClass A 1.19% Class C 1.94%\n";
        let variants = ShareClass::new("Class C").variants();
        let result = extract_annual_expenses(text, &[], &variants).unwrap();
        assert_eq!(result.value, "1.94%");
        assert_eq!(result.location.as_deref(), Some("expenses section"));
    }

    #[test]
    fn test_net_expenses_from_table() {
        let table = Table(vec![
            vec!["".to_string(), "Class I".to_string()],
            vec!["Net Expenses".to_string(), "0.74%".to_string()],
        ]);
        let variants = ShareClass::new("Class I").variants();
        let result = extract_net_expenses("", &[table], &variants).unwrap();
        assert_eq!(result.value, "0.74%");
        assert_eq!(result.location.as_deref(), Some("net expenses table"));
    }

    #[test]
    fn test_net_expenses_from_text() {
        let text = "Expenses after fee waiver and expense reimbursement\nClass I 0.74%";
        let variants = ShareClass::new("Class I").variants();
        let result = extract_net_expenses(text, &[], &variants).unwrap();
        assert_eq!(result.value, "0.74%");
    }

    #[test]
    fn test_not_found_is_none() {
        let variants = ShareClass::new("Class Z").variants();
        assert_eq!(extract_annual_expenses("no fees here", &[], &variants), None);
        assert_eq!(extract_net_expenses("no fees here", &[], &variants), None);
    }
}
