use crate::domain::{CreationPayload, FieldId, Owner, SessionUser, SpotImage};

use super::fields::FieldSet;

/// Everything handed to the creation service for one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    pub payload: CreationPayload,
    pub images: Vec<SpotImage>,
}

impl SubmissionPlan {
    pub fn build(fields: &FieldSet, user: &SessionUser) -> Self {
        Self {
            payload: build_payload(fields, user),
            images: build_images(fields),
        }
    }
}

pub fn build_payload(fields: &FieldSet, user: &SessionUser) -> CreationPayload {
    let text = |field| fields.get(field).to_string();
    CreationPayload {
        country: text(FieldId::Country),
        address: text(FieldId::Address),
        city: text(FieldId::City),
        state: text(FieldId::State),
        lat: text(FieldId::Latitude),
        lng: text(FieldId::Longitude),
        description: text(FieldId::Description),
        name: text(FieldId::Name),
        price: text(FieldId::Price),
        owner: Owner::from(user),
    }
}

/// Preview first, then every non-empty optional slot in order.
pub fn build_images(fields: &FieldSet) -> Vec<SpotImage> {
    fields
        .image_urls()
        .filter_map(|(slot, url)| {
            if slot.is_preview() {
                Some(SpotImage::preview(url))
            } else if url.is_empty() {
                None
            } else {
                Some(SpotImage::extra(url))
            }
        })
        .collect()
}
