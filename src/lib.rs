pub mod check;
pub mod cli;
pub mod completions;
pub mod config;
pub mod discover;
pub mod frontmatter;
pub mod issue;
pub mod logging;
pub mod report;
pub mod rules;
pub mod schema;
pub mod validate;

pub use issue::{Issue, IssueCode};
pub use schema::Schema;
pub use validate::validate_document;
