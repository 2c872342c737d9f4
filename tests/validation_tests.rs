mod common;

use common::{slot, valid_fields};
use spotform::{FieldId, FieldSet, FormOptions, ImageSlot, Rule, ValidationEngine};

fn engine() -> ValidationEngine {
    ValidationEngine::new(&FormOptions::default()).unwrap()
}

#[test]
fn empty_form_reports_every_required_rule() {
    let errors = engine().validate(&FieldSet::new());
    let keys: Vec<_> = errors.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "country",
            "address",
            "city",
            "state",
            "lat",
            "lng",
            "description",
            "name",
            "price",
            "previewUrl",
            "previewUrlEnd",
        ]
    );
    assert_eq!(
        errors.get(FieldId::Description, Rule::MinLength),
        Some("Description needs a minimum of 30 characters")
    );
}

#[test]
fn valid_form_has_no_errors() {
    assert!(engine().validate(&valid_fields()).is_empty());
}

#[test]
fn description_boundary_is_thirty_characters() {
    let engine = engine();
    let short = valid_fields().with(FieldId::Description, "a".repeat(29));
    let exact = valid_fields().with(FieldId::Description, "a".repeat(30));
    assert!(engine.validate(&short).contains_field(FieldId::Description));
    assert!(!engine.validate(&exact).contains_field(FieldId::Description));
}

#[test]
fn description_counts_characters_not_bytes() {
    let engine = engine();
    let accented = valid_fields().with(FieldId::Description, "é".repeat(30));
    assert!(engine.validate(&accented).is_empty());
    let accented = valid_fields().with(FieldId::Description, "é".repeat(29));
    assert!(engine.validate(&accented).contains_field(FieldId::Description));
}

#[test]
fn preview_suffix_is_case_sensitive_by_default() {
    let fields = valid_fields().with(FieldId::PREVIEW_IMAGE, "photo.JPG");
    let errors = engine().validate(&fields);
    assert_eq!(
        errors.get(FieldId::PREVIEW_IMAGE, Rule::ImageSuffix),
        Some("Image URL must end in .png, .jpg, or .jpeg")
    );
    assert!(errors.get(FieldId::PREVIEW_IMAGE, Rule::Required).is_none());

    let relaxed = FormOptions::default().with_case_insensitive_suffixes(true);
    let errors = ValidationEngine::new(&relaxed).unwrap().validate(&fields);
    assert!(errors.is_empty());
}

#[test]
fn empty_preview_fires_both_rules() {
    let fields = valid_fields().with(FieldId::PREVIEW_IMAGE, "");
    let errors = engine().validate(&fields);
    let messages: Vec<_> = errors.messages_for(FieldId::PREVIEW_IMAGE).collect();
    assert_eq!(
        messages,
        vec![
            "Preview image is required",
            "Image URL must end in .png, .jpg, or .jpeg"
        ]
    );
}

#[test]
fn optional_images_are_checked_only_when_filled() {
    let engine = engine();
    assert!(engine.validate(&valid_fields()).is_empty());

    let fields = valid_fields()
        .with(slot(2), "https://images.example.com/pool.png")
        .with(slot(3), "https://images.example.com/anim.gif");
    let errors = engine.validate(&fields);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(slot(3), Rule::ImageSuffix),
        Some("Image URL must end in .png, .jpg, or .jpeg")
    );
}

#[test]
fn whitespace_is_not_empty() {
    let fields = valid_fields().with(FieldId::City, " ");
    assert!(engine().validate(&fields).is_empty());
}

#[test]
fn custom_options_change_rules_and_messages() {
    let options = FormOptions::default()
        .with_min_description_chars(10)
        .with_image_suffixes([".webp"]);
    let engine = ValidationEngine::new(&options).unwrap();
    let fields = valid_fields()
        .with(FieldId::Description, "Cozy loft")
        .with(FieldId::PREVIEW_IMAGE, "front.webp");
    let errors = engine.validate(&fields);
    assert_eq!(
        errors.get(FieldId::Description, Rule::MinLength),
        Some("Description needs a minimum of 10 characters")
    );
    assert_eq!(errors.len(), 1);
}

/// Independent restatement of the rules, used to check the engine both ways.
fn violates(field: FieldId, value: &str) -> bool {
    let suffix_ok = [".png", ".jpg", ".jpeg"]
        .iter()
        .any(|suffix| value.ends_with(suffix));
    match field {
        FieldId::Description => value.chars().count() < 30,
        FieldId::Image(slot) if slot.is_preview() => value.is_empty() || !suffix_ok,
        FieldId::Image(_) => !value.is_empty() && !suffix_ok,
        _ => value.is_empty(),
    }
}

#[test]
fn absent_from_error_map_iff_rule_holds() {
    let candidates = [
        "",
        " ",
        "x",
        "front.png",
        "front.JPEG",
        "front.gif",
        "a description that is long enough to pass",
    ];
    let engine = engine();
    // Rotate candidates across fields so every field sees every value.
    for offset in 0..candidates.len() {
        let mut fields = FieldSet::new();
        for (idx, field) in FieldId::all().enumerate() {
            fields.set(field, candidates[(idx + offset) % candidates.len()]);
        }
        let errors = engine.validate(&fields);
        for field in FieldId::all() {
            assert_eq!(
                errors.contains_field(field),
                violates(field, fields.get(field)),
                "field {field} with value {:?}",
                fields.get(field)
            );
        }
    }
    assert!(ImageSlot::optional().all(|slot| !engine
        .validate(&FieldSet::new())
        .contains_field(FieldId::Image(slot))));
}
