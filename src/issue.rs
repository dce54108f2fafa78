use serde::Serialize;
use std::fmt;

/// Every conformance violation the checker can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    FileMissing,
    FileNameInvalid,
    FileUnreadable,
    FrontmatterMissing,
    NameMissing,
    NameTooLong,
    NameInvalidFormat,
    DescriptionMissing,
    DescriptionTooLong,
    TypeMissing,
    TypeInvalid,
    FolderNameMismatch,
    SectionMissing,
    SectionOrderInvalid,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::FileMissing => "file_missing",
            IssueCode::FileNameInvalid => "file_name_invalid",
            IssueCode::FileUnreadable => "file_unreadable",
            IssueCode::FrontmatterMissing => "frontmatter_missing",
            IssueCode::NameMissing => "name_missing",
            IssueCode::NameTooLong => "name_too_long",
            IssueCode::NameInvalidFormat => "name_invalid_format",
            IssueCode::DescriptionMissing => "description_missing",
            IssueCode::DescriptionTooLong => "description_too_long",
            IssueCode::TypeMissing => "type_missing",
            IssueCode::TypeInvalid => "type_invalid",
            IssueCode::FolderNameMismatch => "folder_name_mismatch",
            IssueCode::SectionMissing => "section_missing",
            IssueCode::SectionOrderInvalid => "section_order_invalid",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: String,
    pub code: IssueCode,
    pub detail: String,
}

impl Issue {
    pub fn new(path: &str, code: IssueCode, detail: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            code,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {} ({})", self.code, self.path, self.detail)
    }
}
