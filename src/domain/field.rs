use std::{fmt, str::FromStr};

use thiserror::Error;

pub const IMAGE_SLOTS: usize = 5;

/// 1-based position of an image input. Slot 1 holds the preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageSlot(u8);

impl ImageSlot {
    pub const PREVIEW: ImageSlot = ImageSlot(1);

    pub fn new(position: u8) -> Option<Self> {
        (1..=IMAGE_SLOTS as u8)
            .contains(&position)
            .then_some(Self(position))
    }

    pub fn position(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    pub fn is_preview(self) -> bool {
        self == Self::PREVIEW
    }

    pub fn all() -> impl Iterator<Item = ImageSlot> {
        (1..=IMAGE_SLOTS as u8).map(ImageSlot)
    }

    pub fn optional() -> impl Iterator<Item = ImageSlot> {
        Self::all().filter(|slot| !slot.is_preview())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Country,
    Address,
    City,
    State,
    Latitude,
    Longitude,
    Description,
    Name,
    Price,
    Image(ImageSlot),
}

const TEXT_FIELDS: [FieldId; 9] = [
    FieldId::Country,
    FieldId::Address,
    FieldId::City,
    FieldId::State,
    FieldId::Latitude,
    FieldId::Longitude,
    FieldId::Description,
    FieldId::Name,
    FieldId::Price,
];

impl FieldId {
    pub const PREVIEW_IMAGE: FieldId = FieldId::Image(ImageSlot::PREVIEW);

    /// Every input in form order.
    pub fn all() -> impl Iterator<Item = FieldId> {
        TEXT_FIELDS
            .into_iter()
            .chain(ImageSlot::all().map(FieldId::Image))
    }

    /// Stable identifier used in documents, error maps and `key=value` overrides.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Country => "country",
            FieldId::Address => "address",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::Latitude => "lat",
            FieldId::Longitude => "lng",
            FieldId::Description => "description",
            FieldId::Name => "name",
            FieldId::Price => "price",
            FieldId::Image(slot) => match slot.position() {
                1 => "previewUrl",
                2 => "image2Url",
                3 => "image3Url",
                4 => "image4Url",
                _ => "image5Url",
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Country => "Country",
            FieldId::Address => "Street Address",
            FieldId::City => "City",
            FieldId::State => "State",
            FieldId::Latitude => "Latitude",
            FieldId::Longitude => "Longitude",
            FieldId::Description => "Description",
            FieldId::Name => "Name",
            FieldId::Price => "Price",
            FieldId::Image(slot) if slot.is_preview() => "Preview Image URL",
            FieldId::Image(_) => "Image URL",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::Description => "Please write at least 30 characters",
            FieldId::Name => "Name of your spot",
            FieldId::Price => "Price per night (USD)",
            other => other.label(),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        FieldId::all()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownField(trimmed.to_string()))
    }
}
