use crate::issue::{Issue, IssueCode};
use crate::schema::Schema;
use crate::validate::validate_document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Check a single skill file on disk.
///
/// Missing files, misnamed files and read failures become issues for that path
/// instead of errors, so one bad path never stops the rest of a run.
pub fn check_skill_file(path: &Path, schema: &Schema) -> Vec<Issue> {
    let label = path.display().to_string();
    if !path.is_file() {
        return vec![Issue::new(
            &label,
            IssueCode::FileMissing,
            "Skill file not found",
        )];
    }
    if path.file_name().and_then(|s| s.to_str()) != Some(schema.skill_file_name) {
        return vec![Issue::new(
            &label,
            IssueCode::FileNameInvalid,
            format!("Skill file must be named {}", schema.skill_file_name),
        )];
    }
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %label, error = %err, "unable to read skill file");
            return vec![Issue::new(&label, IssueCode::FileUnreadable, err.to_string())];
        }
    };
    let issues = validate_document(&label, &text, &folder_name(path), schema);
    debug!(path = %label, issues = issues.len(), "checked skill file");
    issues
}

/// Name of the directory holding `path`, or `""` for a bare file name.
pub fn folder_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check every file and concatenate the issues in input order.
#[cfg(not(feature = "parallel"))]
pub fn check_all(files: &[PathBuf], schema: &Schema) -> Vec<Issue> {
    files
        .iter()
        .flat_map(|path| check_skill_file(path, schema))
        .collect()
}

/// Check every file on the rayon pool and concatenate the issues in input order.
#[cfg(feature = "parallel")]
pub fn check_all(files: &[PathBuf], schema: &Schema) -> Vec<Issue> {
    use rayon::prelude::*;

    let per_file: Vec<Vec<Issue>> = files
        .par_iter()
        .map(|path| check_skill_file(path, schema))
        .collect();
    per_file.into_iter().flatten().collect()
}
