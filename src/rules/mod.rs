mod fields;
mod sections;

pub use fields::{
    check_fields, first_violation, FieldRule, DESCRIPTION_RULES, NAME_RULES, TYPE_RULES,
};
pub use sections::{check_sections, extract_headings};
