//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use policybook_domain::{DisplayStyle, Person};
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

    /// Format people output.
    pub fn format_people(&self, people: &[Person]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_people_json(people),
            OutputFormat::Table => self.format_people_table(people),
            OutputFormat::Quiet => self.format_people_quiet(people),
        }
    }

    /// Format people as JSON.
    fn format_people_json(&self, people: &[Person]) -> Result<String> {
        let json_people: Vec<serde_json::Value> = people
            .iter()
            .map(|p| {
                let policy = p.policy().map(|policy| {
                    serde_json::json!({
                        "company": policy.company().as_str(),
                        "policy_number": policy.policy_number().as_str(),
                        "issue_date": policy.issue_date().to_string(),
                        "expiry_date": policy.expiry_date().to_string(),
                    })
                });
                serde_json::json!({
                    "id": p.id().to_string(),
                    "name": p.name(),
                    "policy": policy,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_people)?)
    }

    /// Format people as a table.
    fn format_people_table(&self, people: &[Person]) -> Result<String> {
        if people.is_empty() {
            return Ok(self.colorize("No people found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Policy"]);

        for person in people {
            let id = person.id().to_string();
            builder.push_record([
                id[..8].to_string(), // Truncate ID for readability
                person.name().to_string(),
                person.policy_display(DisplayStyle::Inline),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format people in quiet mode (IDs only).
    fn format_people_quiet(&self, people: &[Person]) -> Result<String> {
        let ids: Vec<String> = people.iter().map(|p| p.id().to_string()).collect();
        Ok(ids.join("\n"))
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

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} person(s)", operation, count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policybook_domain::{Company, Policy, PolicyDate, PolicyNumber};

    fn create_test_person() -> Person {
        let policy = Policy::new(
            Company::parse("Allianz").unwrap(),
            PolicyNumber::parse("AZ-1").unwrap(),
            PolicyDate::parse("01-01-2022").unwrap(),
            PolicyDate::parse("15-11-2022").unwrap(),
        );
        Person::new("Alex Yeoh", Some(policy)).unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_people(&[create_test_person()]).unwrap();
        assert!(output.contains("\"expiry_date\": \"15-11-2022\""));
        assert!(output.contains("Alex Yeoh"));
    }

    #[test]
    fn test_json_without_policy() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let person = Person::new("Bernice", None).unwrap();
        let output = formatter.format_people(&[person]).unwrap();
        assert!(output.contains("\"policy\": null"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let person = create_test_person();
        let output = formatter.format_people(&[person.clone()]).unwrap();
        assert_eq!(output, person.id().to_string());
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_people(&[create_test_person(), Person::new("Bernice", None).unwrap()])
            .unwrap();
        assert!(output.contains("Allianz, AZ-1, 01-01-2022, 15-11-2022"));
        assert!(output.contains("No Policy Found"));
    }

    #[test]
    fn test_empty_people() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_people(&[]).unwrap();
        assert!(output.contains("No people found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.bulk_result("Deleted", 2), "✓ Deleted 2 person(s)");
    }
}
