#![allow(dead_code)]

use spotform::{FieldId, FieldSet, FormCommand, ImageSlot, SessionUser};

pub const DESCRIPTION: &str = "Quiet loft two blocks from the park, with fast wifi.";

pub fn slot(position: u8) -> FieldId {
    FieldId::Image(ImageSlot::new(position).expect("slot in range"))
}

pub fn valid_fields() -> FieldSet {
    FieldSet::new()
        .with(FieldId::Country, "United States")
        .with(FieldId::Address, "123 Disney Lane")
        .with(FieldId::City, "San Francisco")
        .with(FieldId::State, "California")
        .with(FieldId::Latitude, "37.7645358")
        .with(FieldId::Longitude, "-122.4730327")
        .with(FieldId::Description, DESCRIPTION)
        .with(FieldId::Name, "Sunset Loft")
        .with(FieldId::Price, "123")
        .with(FieldId::PREVIEW_IMAGE, "https://images.example.com/front.jpg")
}

pub fn edits(fields: &FieldSet) -> Vec<FormCommand> {
    FieldId::all()
        .filter(|field| !fields.get(*field).is_empty())
        .map(|field| FormCommand::edit(field, fields.get(field)))
        .collect()
}

pub fn demo_user() -> SessionUser {
    SessionUser::new(1, "Demo", "Lition")
}
