use serde_json::Value;
use thiserror::Error;

use crate::{
    domain::{FieldId, UnknownField},
    form::FormCommand,
};

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft must be an object of field values")]
    NotAnObject,
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("field `{field}` must be text or a number")]
    UnsupportedValue { field: FieldId },
    #[error("override `{0}` must look like key=value")]
    MalformedOverride(String),
}

/// Turns a draft document (`{"city": "Austin", "price": 120, ...}`) into edit
/// commands, in document order.
pub fn draft_commands(document: &Value) -> Result<Vec<FormCommand>, DraftError> {
    let Some(entries) = document.as_object() else {
        return Err(DraftError::NotAnObject);
    };
    entries
        .iter()
        .map(|(key, value)| -> Result<FormCommand, DraftError> {
            let field = key.parse::<FieldId>()?;
            Ok(FormCommand::edit(field, text_value(field, value)?))
        })
        .collect()
}

pub fn parse_override(raw: &str) -> Result<FormCommand, DraftError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(DraftError::MalformedOverride(raw.to_string()));
    };
    Ok(FormCommand::edit(key.parse::<FieldId>()?, value))
}

fn text_value(field: FieldId, value: &Value) -> Result<String, DraftError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(DraftError::UnsupportedValue { field }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn numbers_become_text() {
        let commands = draft_commands(&json!({"price": 125, "lat": 37.5, "city": "Oakland"})).unwrap();
        assert_eq!(
            commands,
            vec![
                FormCommand::edit(FieldId::Price, "125"),
                FormCommand::edit(FieldId::Latitude, "37.5"),
                FormCommand::edit(FieldId::City, "Oakland"),
            ]
        );
    }

    #[test]
    fn rejects_unknown_fields_and_nested_values() {
        assert!(matches!(
            draft_commands(&json!({"zip": "94110"})),
            Err(DraftError::UnknownField(_))
        ));
        assert!(matches!(
            draft_commands(&json!({"name": ["a"]})),
            Err(DraftError::UnsupportedValue { field: FieldId::Name })
        ));
        assert!(matches!(draft_commands(&json!("city")), Err(DraftError::NotAnObject)));
    }

    #[test]
    fn overrides_split_on_first_equals() {
        assert_eq!(
            parse_override("previewUrl=https://x.test/a.png?v=2").unwrap(),
            FormCommand::edit(FieldId::PREVIEW_IMAGE, "https://x.test/a.png?v=2")
        );
        assert!(matches!(
            parse_override("city"),
            Err(DraftError::MalformedOverride(_))
        ));
    }
}
