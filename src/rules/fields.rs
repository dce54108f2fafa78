use crate::frontmatter::Header;
use crate::issue::{Issue, IssueCode};
use crate::schema::Schema;

/// One link in a field's priority chain: a code and the predicate that emits
/// its detail when the value violates it.
pub struct FieldRule {
    pub code: IssueCode,
    violation: fn(&str, &Schema) -> Option<String>,
}

impl FieldRule {
    pub fn violation(&self, value: &str, schema: &Schema) -> Option<String> {
        (self.violation)(value, schema)
    }
}

pub const NAME_RULES: &[FieldRule] = &[
    FieldRule {
        code: IssueCode::NameMissing,
        violation: name_missing,
    },
    FieldRule {
        code: IssueCode::NameTooLong,
        violation: name_too_long,
    },
    FieldRule {
        code: IssueCode::NameInvalidFormat,
        violation: name_invalid_format,
    },
];

pub const DESCRIPTION_RULES: &[FieldRule] = &[
    FieldRule {
        code: IssueCode::DescriptionMissing,
        violation: description_missing,
    },
    FieldRule {
        code: IssueCode::DescriptionTooLong,
        violation: description_too_long,
    },
];

pub const TYPE_RULES: &[FieldRule] = &[
    FieldRule {
        code: IssueCode::TypeMissing,
        violation: type_missing,
    },
    FieldRule {
        code: IssueCode::TypeInvalid,
        violation: type_invalid,
    },
];

fn name_missing(value: &str, _: &Schema) -> Option<String> {
    required(value, "Frontmatter name is required")
}

fn name_too_long(value: &str, schema: &Schema) -> Option<String> {
    too_long(value, schema.max_name_len)
}

fn name_invalid_format(value: &str, schema: &Schema) -> Option<String> {
    (!schema.name_pattern.is_match(value)).then(|| "Expected lowercase kebab-case".to_string())
}

fn description_missing(value: &str, _: &Schema) -> Option<String> {
    required(value, "Frontmatter description is required")
}

fn description_too_long(value: &str, schema: &Schema) -> Option<String> {
    too_long(value, schema.max_description_len)
}

fn type_missing(value: &str, _: &Schema) -> Option<String> {
    required(value, "Frontmatter type is required")
}

fn type_invalid(value: &str, schema: &Schema) -> Option<String> {
    (!schema.valid_types.contains(value))
        .then(|| format!("Expected one of: {}", schema.valid_types_list()))
}

fn required(value: &str, detail: &str) -> Option<String> {
    value.is_empty().then(|| detail.to_string())
}

fn too_long(value: &str, max: usize) -> Option<String> {
    let len = value.chars().count();
    (len > max).then(|| format!("{len} chars"))
}

/// Walk a chain top to bottom and stop at the first violated rule.
pub fn first_violation(
    rules: &[FieldRule],
    value: &str,
    schema: &Schema,
) -> Option<(IssueCode, String)> {
    rules
        .iter()
        .find_map(|rule| rule.violation(value, schema).map(|detail| (rule.code, detail)))
}

pub fn check_fields(
    path: &str,
    header: &Header,
    folder_name: &str,
    schema: &Schema,
) -> Vec<Issue> {
    let name = header.get("name").trim();
    let description = header.get("description").trim();
    let skill_type = header.get("type").trim();

    let mut issues: Vec<Issue> = [
        (NAME_RULES, name),
        (DESCRIPTION_RULES, description),
        (TYPE_RULES, skill_type),
    ]
    .into_iter()
    .filter_map(|(rules, value)| first_violation(rules, value, schema))
    .map(|(code, detail)| Issue::new(path, code, detail))
    .collect();

    if !name.is_empty() && folder_name != name {
        issues.push(Issue::new(
            path,
            IssueCode::FolderNameMismatch,
            format!("folder={folder_name} name={name}"),
        ));
    }
    issues
}
