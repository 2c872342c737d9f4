mod field;
mod spot;

pub use field::{FieldId, IMAGE_SLOTS, ImageSlot, UnknownField};
pub use spot::{CreatedSpot, CreationPayload, Owner, SessionUser, SpotId, SpotImage};
