use crate::frontmatter;
use crate::issue::{Issue, IssueCode};
use crate::rules::{check_fields, check_sections};
use crate::schema::Schema;

/// Check one skill document's text against `schema`.
///
/// Field issues come first, then section issues. A document without a
/// front-matter block yields a single `frontmatter_missing` issue.
pub fn validate_document(
    path: &str,
    text: &str,
    folder_name: &str,
    schema: &Schema,
) -> Vec<Issue> {
    let (header, body) = frontmatter::extract(text);
    let Some(header) = header else {
        return vec![Issue::new(
            path,
            IssueCode::FrontmatterMissing,
            "Missing or malformed frontmatter",
        )];
    };
    let mut issues = check_fields(path, &header, folder_name, schema);
    issues.extend(check_sections(path, body, schema));
    issues
}
