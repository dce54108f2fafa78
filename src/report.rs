use crate::issue::Issue;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub checked: usize,
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn new(checked: usize, issues: Vec<Issue>) -> Self {
        Self { checked, issues }
    }

    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn render_text(&self, colored: bool) -> String {
        if self.passed() {
            return "All skills pass conformance checks.\n".to_string();
        }
        let mut out = String::from("Skill conformance issues detected:\n\n");
        for issue in &self.issues {
            let code = if colored {
                issue.code.as_str().bold().red().to_string()
            } else {
                issue.code.as_str().to_string()
            };
            out.push_str(&format!("- {}: {} ({})\n", code, issue.path, issue.detail));
        }
        out
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueCode;

    #[test]
    fn passing_report_text() {
        let report = Report::new(3, vec![]);
        assert!(report.passed());
        assert_eq!(
            report.render_text(false),
            "All skills pass conformance checks.\n"
        );
    }

    #[test]
    fn failing_report_lists_each_issue() {
        let report = Report::new(
            2,
            vec![
                Issue::new("a/SKILL.md", IssueCode::TypeMissing, "Frontmatter type is required"),
                Issue::new("b/SKILL.md", IssueCode::SectionMissing, "Examples"),
            ],
        );
        assert_eq!(
            report.render_text(false),
            "Skill conformance issues detected:\n\n\
             - type_missing: a/SKILL.md (Frontmatter type is required)\n\
             - section_missing: b/SKILL.md (Examples)\n"
        );
    }

    #[test]
    fn colored_text_keeps_code() {
        let report = Report::new(1, vec![Issue::new("p", IssueCode::NameMissing, "x")]);
        let text = report.render_text(true);
        assert!(text.contains("name_missing"));
        assert!(text.contains("\u{1b}["));
    }

    #[test]
    fn json_shape() {
        let report = Report::new(1, vec![Issue::new("p", IssueCode::NameTooLong, "65 chars")]);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(value["checked"], 1);
        assert_eq!(value["issues"][0]["code"], "name_too_long");
        assert_eq!(value["issues"][0]["detail"], "65 chars");
    }
}
