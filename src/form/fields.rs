use crate::domain::{FieldId, IMAGE_SLOTS, ImageSlot};

/// Raw text of every input on the spot form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    country: String,
    address: String,
    city: String,
    state: String,
    latitude: String,
    longitude: String,
    description: String,
    name: String,
    price: String,
    images: [String; IMAGE_SLOTS],
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Country => &self.country,
            FieldId::Address => &self.address,
            FieldId::City => &self.city,
            FieldId::State => &self.state,
            FieldId::Latitude => &self.latitude,
            FieldId::Longitude => &self.longitude,
            FieldId::Description => &self.description,
            FieldId::Name => &self.name,
            FieldId::Price => &self.price,
            FieldId::Image(slot) => &self.images[slot.index()],
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn clear(&mut self, field: FieldId) {
        self.slot_mut(field).clear();
    }

    pub fn is_empty(&self) -> bool {
        FieldId::all().all(|field| self.get(field).is_empty())
    }

    /// Image URLs paired with their slot, including empty slots.
    pub fn image_urls(&self) -> impl Iterator<Item = (ImageSlot, &str)> {
        ImageSlot::all().map(move |slot| (slot, self.images[slot.index()].as_str()))
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Country => &mut self.country,
            FieldId::Address => &mut self.address,
            FieldId::City => &mut self.city,
            FieldId::State => &mut self.state,
            FieldId::Latitude => &mut self.latitude,
            FieldId::Longitude => &mut self.longitude,
            FieldId::Description => &mut self.description,
            FieldId::Name => &mut self.name,
            FieldId::Price => &mut self.price,
            FieldId::Image(slot) => &mut self.images[slot.index()],
        }
    }
}
