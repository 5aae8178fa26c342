//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use prospectus_domain::{DatapointId, DocumentAnswer};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a set of per-document answers.
    pub fn format_answers(&self, answers: &[DocumentAnswer]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_answers_json(answers),
            OutputFormat::Table => Ok(self.format_answers_table(answers)),
            OutputFormat::Quiet => Ok(self.format_answers_quiet(answers)),
        }
    }

    fn format_answers_json(&self, answers: &[DocumentAnswer]) -> Result<String> {
        let json_answers: Vec<serde_json::Value> = answers
            .iter()
            .map(|a| {
                serde_json::json!({
                    "document": a.document,
                    "value": a.value,
                    "citation": a.citation.to_string(),
                    "location": a.location,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_answers)?)
    }

    fn format_answers_table(&self, answers: &[DocumentAnswer]) -> String {
        if answers.is_empty() {
            return self.colorize("Not found in any loaded document.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Value", "Where"]);

        for answer in answers {
            let location = answer.location.as_deref().unwrap_or("");
            let place = if location.is_empty() {
                answer.citation.to_string()
            } else {
                format!("{} ({})", answer.citation, location)
            };
            builder.push_record([&answer.document, &answer.value, &place]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_answers_quiet(&self, answers: &[DocumentAnswer]) -> String {
        answers
            .iter()
            .map(|a| a.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Guidance when no datapoint could be recognized in a question.
    pub fn guidance_unknown_datapoint(&self, available: &[DatapointId]) -> String {
        let names: Vec<&str> = available.iter().map(|id| id.as_str()).collect();
        self.colorize(
            &format!(
                "Could not tell which datapoint you are asking about.\n\
                 Try naming one of: {}",
                names.join(", ")
            ),
            "yellow",
        )
    }

    /// Guidance when no share class was named and no default applies.
    pub fn guidance_missing_class(&self) -> String {
        self.colorize(
            "Could not tell which share class you mean. \
             Name one explicitly, e.g. \"... for Class A shares\".",
            "yellow",
        )
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectus_domain::Citation;

    fn answers() -> Vec<DocumentAnswer> {
        vec![DocumentAnswer {
            document: "fund.pdf".to_string(),
            value: "1.19%".to_string(),
            citation: Citation::Page(3),
            location: Some("expenses table".to_string()),
        }]
    }

    #[test]
    fn test_table_output_carries_citation() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_answers(&answers()).unwrap();
        assert!(output.contains("fund.pdf"));
        assert!(output.contains("1.19%"));
        assert!(output.contains("page 3 (expenses table)"));
    }

    #[test]
    fn test_empty_answers_message() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_answers(&[]).unwrap();
        assert!(output.contains("Not found"));
    }

    #[test]
    fn test_json_output() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_answers(&answers()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["citation"], "page 3");
    }

    #[test]
    fn test_quiet_output_is_values_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_answers(&answers()).unwrap();
        assert_eq!(output, "1.19%");
    }

    #[test]
    fn test_no_color_passthrough() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_guidance_lists_datapoints() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let guidance = formatter.guidance_unknown_datapoint(&DatapointId::ALL);
        assert!(guidance.contains("NET_EXPENSES"));
        assert!(guidance.contains("CDSC"));
    }
}
