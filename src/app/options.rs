use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::io::{DocumentFormat, parse_document_any};

pub const DEFAULT_MIN_DESCRIPTION_CHARS: usize = 30;
pub const DEFAULT_IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("at least one image suffix must be configured")]
    NoImageSuffixes,
    #[error("image suffix must not be blank")]
    BlankImageSuffix,
    #[error("invalid image suffix pattern: {0}")]
    SuffixPattern(#[from] regex::Error),
}

/// Tunables for the spot form's validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FormOptions {
    pub min_description_chars: usize,
    pub image_suffixes: Vec<String>,
    /// Off by default: `photo.JPG` fails unless this is set.
    pub case_insensitive_suffixes: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            min_description_chars: DEFAULT_MIN_DESCRIPTION_CHARS,
            image_suffixes: DEFAULT_IMAGE_SUFFIXES
                .iter()
                .map(|suffix| suffix.to_string())
                .collect(),
            case_insensitive_suffixes: false,
        }
    }
}

impl FormOptions {
    /// Reads options from `contents`, trying `preferred` before the other
    /// formats this build supports. Missing keys keep their defaults.
    pub fn from_document(contents: &str, preferred: DocumentFormat) -> Result<Self> {
        let value = parse_document_any(contents, preferred)?;
        serde_json::from_value(value).context("failed to read form options")
    }

    pub fn with_min_description_chars(mut self, chars: usize) -> Self {
        self.min_description_chars = chars;
        self
    }

    pub fn with_image_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_case_insensitive_suffixes(mut self, enabled: bool) -> Self {
        self.case_insensitive_suffixes = enabled;
        self
    }

    pub(crate) fn check(&self) -> Result<(), OptionsError> {
        if self.image_suffixes.is_empty() {
            return Err(OptionsError::NoImageSuffixes);
        }
        if self
            .image_suffixes
            .iter()
            .any(|suffix| suffix.trim().is_empty())
        {
            return Err(OptionsError::BlankImageSuffix);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_keep_defaults() {
        let options =
            FormOptions::from_document("{\"min_description_chars\": 50}", DocumentFormat::Json)
                .unwrap();
        assert_eq!(options.min_description_chars, 50);
        assert_eq!(options.image_suffixes, vec![".png", ".jpg", ".jpeg"]);
        assert!(!options.case_insensitive_suffixes);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn reads_toml_documents() {
        let raw = "image_suffixes = [\".webp\"]\ncase_insensitive_suffixes = true";
        let options = FormOptions::from_document(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(options.image_suffixes, vec![".webp"]);
        assert!(options.case_insensitive_suffixes);
    }

    #[test]
    fn rejects_empty_suffix_lists() {
        let options = FormOptions::default().with_image_suffixes(Vec::<String>::new());
        assert!(matches!(options.check(), Err(OptionsError::NoImageSuffixes)));
        let options = FormOptions::default().with_image_suffixes([".png", " "]);
        assert!(matches!(options.check(), Err(OptionsError::BlankImageSuffix)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_options_load_even_when_json_is_preferred() {
        let raw = "min_description_chars = 5\n";
        let options = FormOptions::from_document(raw, DocumentFormat::Json).unwrap();
        assert_eq!(options, FormOptions::default().with_min_description_chars(5));
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(FormOptions::from_document("true", DocumentFormat::Json).is_err());
    }
}
