//! Prompt engineering for the extraction and query-parse contracts

use prospectus_domain::{DatapointId, OutputRule, Table};

/// Builds the single extraction prompt for one document.
pub struct PromptBuilder<'a> {
    datapoint: DatapointId,
    class: &'a str,
    text: &'a str,
    tables: &'a [Table],
    output_rule: OutputRule,
    text_budget: usize,
    max_tables: usize,
    max_table_rows: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder.
    pub fn new(
        datapoint: DatapointId,
        class: &'a str,
        text: &'a str,
        tables: &'a [Table],
        output_rule: OutputRule,
    ) -> Self {
        Self {
            datapoint,
            class,
            text,
            tables,
            output_rule,
            text_budget: 8_000,
            max_tables: 5,
            max_table_rows: 10,
        }
    }

    /// Bound the document excerpt and table rendering.
    pub fn with_limits(mut self, text_budget: usize, max_tables: usize, max_table_rows: usize) -> Self {
        self.text_budget = text_budget;
        self.max_tables = max_tables;
        self.max_table_rows = max_table_rows;
        self
    }

    /// Build the complete extraction prompt.
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(
            "You are a financial document data extraction assistant. Your task is to \
             extract specific data points from fund prospectus documents.\n\n",
        );
        prompt.push_str(&format!(
            "TASK: Extract the {} for {}.\n\n",
            self.datapoint, self.class
        ));

        prompt.push_str("DOCUMENT TEXT:\n");
        prompt.push_str(&self.truncated_text());
        prompt.push('\n');
        prompt.push_str(&self.rendered_tables());
        prompt.push('\n');

        prompt.push_str("INSTRUCTIONS:\n");
        prompt.push_str(&format!(
            "1. Find the {} value for {} in the document\n",
            self.datapoint, self.class
        ));
        prompt.push_str(&format!(
            "2. Return ONLY the value in the format specified by the output rule: {}\n",
            self.output_rule
        ));
        prompt.push_str("3. Also identify the specific location/section where this value was found\n");
        prompt.push_str("4. Include relevant context words or phrases that appear near the value\n\n");

        prompt.push_str(OUTPUT_FORMAT);
        prompt.push_str(DATAPOINT_DESCRIPTIONS);
        prompt.push_str(OUTPUT_RULES);
        prompt.push_str(
            "\nRemember: Return \"0\" if the value is not found. Be precise and extract \
             only the requested information.",
        );

        prompt
    }

    /// Document text truncated to the character budget.
    fn truncated_text(&self) -> String {
        self.text.chars().take(self.text_budget).collect()
    }

    /// Up to `max_tables` tables, `max_table_rows` rows each, pipe-delimited.
    fn rendered_tables(&self) -> String {
        if self.tables.is_empty() {
            return String::new();
        }
        let mut out = String::from("\nTABLES IN DOCUMENT:\n");
        for (i, table) in self.tables.iter().take(self.max_tables).enumerate() {
            out.push_str(&format!("\nTable {}:\n", i + 1));
            for row in table.rows().iter().take(self.max_table_rows) {
                out.push_str("| ");
                out.push_str(&row.join(" | "));
                out.push_str(" |\n");
            }
        }
        out
    }
}

/// Build the query-parse prompt resolving a user question into
/// `{datapoint, class}`.
pub fn query_prompt(query: &str, datapoints: &[DatapointId]) -> String {
    let available: Vec<&str> = datapoints.iter().map(|id| id.as_str()).collect();
    let mut prompt = String::new();

    prompt.push_str(
        "You are a financial document query parser. Analyze the user's question and identify:\n\
         1. Which datapoint they are asking about\n\
         2. Which share class they are interested in\n\n",
    );
    prompt.push_str(&format!("USER QUERY: {}\n\n", query));
    prompt.push_str(&format!("AVAILABLE DATAPOINTS:\n{}\n\n", available.join(", ")));
    prompt.push_str(
        "COMMON SHARE CLASSES:\nClass A, Class B, Class C, Class F, Class I, Class R, Class Z\n\n",
    );
    prompt.push_str(QUERY_OUTPUT_FORMAT);

    prompt
}

const OUTPUT_FORMAT: &str = r#"OUTPUT FORMAT (respond in exactly this JSON format):
{
    "value": "the extracted value (or '0' if not found)",
    "location": "specific section/context where found",
    "context": "2-3 words or phrases that appear near the value in the document"
}

"#;

const DATAPOINT_DESCRIPTIONS: &str = r#"DATAPOINT DESCRIPTIONS:
- TOTAL_ANNUAL_FUND_OPERATING_EXPENSES: The total annual operating expenses percentage
- NET_EXPENSES: Net expenses after fee waivers/reimbursements
- MINIMUM_SUBSEQUENT_INVESTMENT_AIP: Minimum subsequent investment for Automatic Investment Plans
- INITIAL_INVESTMENT: Initial investment amount required
- CDSC: Contingent Deferred Sales Charge information
- REDEMPTION_FEE: Redemption fee details

"#;

const OUTPUT_RULES: &str = r#"OUTPUT RULES:
- percentage: Return as "X.XX%" (e.g., "1.19%")
- currency: Return as "$X" or "$X,XXX" (e.g., "$50", "$2,500")
- currency_or_text: Return dollar amount or text like "No minimum"
- text: Return as descriptive text
- cdsc_special: Return in format "X year, Y% then Z%"
"#;

const QUERY_OUTPUT_FORMAT: &str = r#"OUTPUT FORMAT (respond in exactly this JSON format):
{
    "datapoint": "the exact datapoint name from the available list (or null if unclear)",
    "class": "the share class in format 'Class X' (or null if not specified)"
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_datapoint_and_class() {
        let prompt = PromptBuilder::new(
            DatapointId::NetExpenses,
            "Class A",
            "Some document text",
            &[],
            OutputRule::Percentage,
        )
        .build();

        assert!(prompt.contains("NET_EXPENSES"));
        assert!(prompt.contains("Class A"));
        assert!(prompt.contains("output rule: percentage"));
        assert!(prompt.contains("Some document text"));
    }

    #[test]
    fn test_text_truncated_to_budget() {
        let text = "a".repeat(100);
        let prompt = PromptBuilder::new(
            DatapointId::Cdsc,
            "Class C",
            &text,
            &[],
            OutputRule::CdscSpecial,
        )
        .with_limits(10, 5, 10)
        .build();

        assert!(prompt.contains(&"a".repeat(10)));
        assert!(!prompt.contains(&"a".repeat(11)));
    }

    #[test]
    fn test_table_limits() {
        let row = vec!["x".to_string()];
        let tables: Vec<Table> = (0..7).map(|_| Table(vec![row.clone(); 15])).collect();
        let prompt = PromptBuilder::new(
            DatapointId::NetExpenses,
            "Class A",
            "",
            &tables,
            OutputRule::Percentage,
        )
        .build();

        assert!(prompt.contains("Table 5:"));
        assert!(!prompt.contains("Table 6:"));
        // 5 tables x 10 rows of "| x |"
        assert_eq!(prompt.matches("| x |").count(), 50);
    }

    #[test]
    fn test_no_tables_section_without_tables() {
        let prompt = PromptBuilder::new(
            DatapointId::NetExpenses,
            "Class A",
            "text",
            &[],
            OutputRule::Percentage,
        )
        .build();
        assert!(!prompt.contains("TABLES IN DOCUMENT"));
    }

    #[test]
    fn test_query_prompt_lists_datapoints() {
        let prompt = query_prompt("CDSC Class I", &DatapointId::ALL);
        assert!(prompt.contains("USER QUERY: CDSC Class I"));
        assert!(prompt.contains("TOTAL_ANNUAL_FUND_OPERATING_EXPENSES"));
        assert!(prompt.contains("\"datapoint\""));
    }
}
