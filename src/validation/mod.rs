mod error_map;
mod suffix;

pub use error_map::{ErrorKey, ErrorMap, Rule};
pub use suffix::ImageSuffixRule;

use crate::{
    app::{FormOptions, OptionsError},
    domain::FieldId,
    form::FieldSet,
};

const PREVIEW_REQUIRED: &str = "Preview image is required";

/// Maps a [`FieldSet`] to the rules it currently violates.
///
/// Every rule is evaluated on every call; the result is a fresh map, never a
/// patch of a previous one.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    min_description_chars: usize,
    suffix_rule: ImageSuffixRule,
}

impl ValidationEngine {
    pub fn new(options: &FormOptions) -> Result<Self, OptionsError> {
        options.check()?;
        Ok(Self {
            min_description_chars: options.min_description_chars,
            suffix_rule: ImageSuffixRule::new(
                options.image_suffixes.as_slice(),
                options.case_insensitive_suffixes,
            )?,
        })
    }

    pub fn validate(&self, fields: &FieldSet) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for field in FieldId::all() {
            let value = fields.get(field);
            match field {
                FieldId::Description => {
                    if value.chars().count() < self.min_description_chars {
                        errors.insert(
                            field,
                            Rule::MinLength,
                            format!(
                                "Description needs a minimum of {} characters",
                                self.min_description_chars
                            ),
                        );
                    }
                }
                FieldId::Image(slot) if slot.is_preview() => {
                    if value.is_empty() {
                        errors.insert(field, Rule::Required, PREVIEW_REQUIRED);
                    }
                    // Runs on an empty preview too, so a blank preview reports both rules.
                    if !self.suffix_rule.accepts(value) {
                        errors.insert(field, Rule::ImageSuffix, self.suffix_rule.message());
                    }
                }
                FieldId::Image(_) => {
                    if !value.is_empty() && !self.suffix_rule.accepts(value) {
                        errors.insert(field, Rule::ImageSuffix, self.suffix_rule.message());
                    }
                }
                required => {
                    if value.is_empty() {
                        errors.insert(
                            required,
                            Rule::Required,
                            format!("{} is required", required_label(required)),
                        );
                    }
                }
            }
        }
        errors
    }
}

fn required_label(field: FieldId) -> &'static str {
    match field {
        FieldId::Address => "Address",
        other => other.label(),
    }
}
