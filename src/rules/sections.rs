use crate::issue::{Issue, IssueCode};
use crate::schema::Schema;

/// Level-two heading texts in document order, duplicates included.
pub fn extract_headings<'a>(body: &'a str, schema: &Schema) -> Vec<&'a str> {
    schema
        .heading_pattern
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Report every required section that is absent; when none are absent, check
/// that their first occurrences appear in canonical order.
pub fn check_sections(path: &str, body: &str, schema: &Schema) -> Vec<Issue> {
    let headings = extract_headings(body, schema);
    let mut issues = vec![];
    let mut positions = Vec::with_capacity(schema.required_sections.len());

    for section in schema.required_sections {
        match headings.iter().position(|h| h == section) {
            Some(idx) => positions.push(idx),
            None => issues.push(Issue::new(path, IssueCode::SectionMissing, *section)),
        }
    }

    if issues.is_empty() && !positions.windows(2).all(|w| w[0] <= w[1]) {
        issues.push(Issue::new(
            path,
            IssueCode::SectionOrderInvalid,
            format!("Expected order: {}", schema.expected_section_order()),
        ));
    }
    issues
}
