use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|table| {
                serde_json::to_value(table).context("failed to convert TOML to JSON")
            }),
    }
}

/// Try the preferred format first, then every other format this build knows.
/// Fallback candidates only count when they yield an object; plain text is a
/// valid YAML scalar and would otherwise always win.
pub fn parse_document_any(contents: &str, preferred: DocumentFormat) -> Result<Value> {
    let primary = match parse_document_str(contents, preferred) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    for candidate in DocumentFormat::available_formats() {
        if candidate == preferred {
            continue;
        }
        if let Ok(value) = parse_document_str(contents, candidate)
            && value.is_object()
        {
            return Ok(value);
        }
    }
    let tried = DocumentFormat::available_formats()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(anyhow!("tried {tried} (first error: {primary:#})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_documents() {
        let raw = "{\"city\":\"Austin\"}";
        let parsed = parse_document_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(parsed["city"], Value::String("Austin".into()));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_yaml_documents() {
        let raw = "city: Austin\nprice: 120";
        let parsed = parse_document_str(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(parsed["city"], Value::String("Austin".into()));
        assert_eq!(parsed["price"], serde_json::json!(120));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_documents() {
        let raw = "city = \"Austin\"\nprice = 120\n\n[extra]\nparking = true\n";
        let parsed = parse_document_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(parsed["city"], Value::String("Austin".into()));
        assert_eq!(parsed["price"], serde_json::json!(120));
        assert_eq!(parsed["extra"]["parking"], Value::Bool(true));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn falls_back_to_other_formats() {
        let raw = "city = \"Austin\"";
        let parsed = parse_document_any(raw, DocumentFormat::Json).unwrap();
        assert_eq!(parsed["city"], Value::String("Austin".into()));
    }

    #[test]
    fn reports_every_attempted_format() {
        let err = parse_document_any("{not valid", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("tried json"));
    }
}
