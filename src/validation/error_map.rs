use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    MinLength,
    ImageSuffix,
}

/// A violated rule on one field. The preview image can carry two at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorKey {
    pub field: FieldId,
    pub rule: Rule,
}

impl ErrorKey {
    pub fn new(field: FieldId, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub fn as_str(&self) -> &'static str {
        match (self.field, self.rule) {
            (FieldId::Image(slot), Rule::ImageSuffix) if slot.is_preview() => "previewUrlEnd",
            (field, _) => field.key(),
        }
    }
}

/// Field-level validation failures, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: IndexMap<ErrorKey, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, rule: Rule, message: impl Into<String>) {
        self.entries
            .insert(ErrorKey::new(field, rule), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: FieldId, rule: Rule) -> Option<&str> {
        self.entries
            .get(&ErrorKey::new(field, rule))
            .map(String::as_str)
    }

    pub fn contains_field(&self, field: FieldId) -> bool {
        self.entries.keys().any(|key| key.field == field)
    }

    pub fn messages_for(&self, field: FieldId) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(key, _)| key.field == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &str)> {
        self.entries
            .iter()
            .map(|(key, message)| (key, message.as_str()))
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, message) in &self.entries {
            map.serialize_entry(key.as_str(), message)?;
        }
        map.end()
    }
}
