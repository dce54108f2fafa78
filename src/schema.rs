use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;

pub const SKILL_FILE_NAME: &str = "SKILL.md";

const VALID_TYPES: [&str; 3] = ["component", "interactive", "workflow"];

const REQUIRED_SECTIONS: [&str; 6] = [
    "Purpose",
    "Key Concepts",
    "Application",
    "Examples",
    "Common Pitfalls",
    "References",
];

const NAME_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";

// Level-two markdown headings; `###` and deeper never match.
const HEADING_PATTERN: &str = r"(?m)^##\s+(.+?)\s*$";

/// The fixed set of constraints a skill file is checked against.
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Schema {
    pub valid_types: BTreeSet<&'static str>,
    pub required_sections: &'static [&'static str],
    pub name_pattern: Regex,
    pub heading_pattern: Regex,
    pub max_name_len: usize,
    pub max_description_len: usize,
    pub skill_file_name: &'static str,
}

impl Schema {
    pub fn standard() -> Result<Self> {
        let name_pattern = Regex::new(NAME_PATTERN).context("compile skill name pattern")?;
        let heading_pattern = Regex::new(HEADING_PATTERN).context("compile heading pattern")?;
        Ok(Self {
            valid_types: VALID_TYPES.into_iter().collect(),
            required_sections: &REQUIRED_SECTIONS,
            name_pattern,
            heading_pattern,
            max_name_len: 64,
            max_description_len: 200,
            skill_file_name: SKILL_FILE_NAME,
        })
    }

    /// Allowed types, sorted and comma-joined.
    pub fn valid_types_list(&self) -> String {
        // BTreeSet iterates in sorted order
        self.valid_types.iter().copied().collect::<Vec<_>>().join(", ")
    }

    pub fn expected_section_order(&self) -> String {
        self.required_sections.join(" > ")
    }
}
