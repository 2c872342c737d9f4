use crate::domain::{FieldId, ImageSlot};

/// One logical step of the spot form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Location,
    Description,
    Name,
    Price,
    Images,
}

impl FormSection {
    pub const ALL: [FormSection; 5] = [
        FormSection::Location,
        FormSection::Description,
        FormSection::Name,
        FormSection::Price,
        FormSection::Images,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FormSection::Location => "location",
            FormSection::Description => "description",
            FormSection::Name => "name",
            FormSection::Price => "price",
            FormSection::Images => "images",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormSection::Location => "Where's your place located?",
            FormSection::Description => "Describe your place to guests",
            FormSection::Name => "Create a name for your spot",
            FormSection::Price => "Set a base price for your spot",
            FormSection::Images => "Liven up your spot with photos",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            FormSection::Location => {
                "Guests will only get your exact address once they booked a reservation."
            }
            FormSection::Description => {
                "Mention the best features of your space, any special amenities like fast wifi or parking, and what you love about the neighborhood."
            }
            FormSection::Name => {
                "Catch guests' attention with a spot name that highlights what makes your place special."
            }
            FormSection::Price => {
                "Competitive pricing can help your listing stand out and rank higher in search results."
            }
            FormSection::Images => "Submit a link to at least one photo to publish your spot.",
        }
    }

    pub fn fields(self) -> Vec<FieldId> {
        match self {
            FormSection::Location => vec![
                FieldId::Country,
                FieldId::Address,
                FieldId::City,
                FieldId::State,
                FieldId::Latitude,
                FieldId::Longitude,
            ],
            FormSection::Description => vec![FieldId::Description],
            FormSection::Name => vec![FieldId::Name],
            FormSection::Price => vec![FieldId::Price],
            FormSection::Images => ImageSlot::all().map(FieldId::Image).collect(),
        }
    }

    pub fn of(field: FieldId) -> FormSection {
        match field {
            FieldId::Country
            | FieldId::Address
            | FieldId::City
            | FieldId::State
            | FieldId::Latitude
            | FieldId::Longitude => FormSection::Location,
            FieldId::Description => FormSection::Description,
            FieldId::Name => FormSection::Name,
            FieldId::Price => FormSection::Price,
            FieldId::Image(_) => FormSection::Images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_belongs_to_exactly_one_section() {
        for field in FieldId::all() {
            let owners: Vec<_> = FormSection::ALL
                .iter()
                .filter(|section| section.fields().contains(&field))
                .collect();
            assert_eq!(owners, vec![&FormSection::of(field)]);
        }
    }
}
