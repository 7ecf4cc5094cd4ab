use serde_json::{Value, json};

use crate::domain::ProductRecord;
use crate::form::{ProductDraft, TextField};

fn sample_record() -> ProductRecord {
    ProductRecord {
        id: "prod-1".to_string(),
        title: "Oolong tea".to_string(),
        category: "tea".to_string(),
        unit: "bag".to_string(),
        description: "High mountain".to_string(),
        content: "200g per bag".to_string(),
        origin_price: 100.0,
        price: 80.0,
        is_enabled: true,
        image_url: "https://img/main.png".to_string(),
        images_url: vec!["https://img/a.png".to_string(), "https://img/b.png".to_string()],
    }
}

#[test]
fn blank_template_has_every_field_empty() {
    let draft = ProductDraft::new();
    assert_eq!(draft.id, "");
    assert_eq!(draft.text(TextField::Title), "");
    assert_eq!(draft.text(TextField::OriginPrice), "");
    assert!(!draft.is_enabled);
    assert!(draft.gallery().is_empty());
}

#[test]
fn overlay_copies_every_record_field() {
    let draft = ProductDraft::from_record(&sample_record());
    assert_eq!(draft.id, "prod-1");
    assert_eq!(draft.text(TextField::Title), "Oolong tea");
    assert_eq!(draft.text(TextField::Category), "tea");
    assert_eq!(draft.text(TextField::Unit), "bag");
    assert_eq!(draft.text(TextField::Description), "High mountain");
    assert_eq!(draft.text(TextField::Content), "200g per bag");
    assert_eq!(draft.text(TextField::ImageUrl), "https://img/main.png");
    assert!(draft.is_enabled);
    assert_eq!(draft.gallery().slots(), ["https://img/a.png", "https://img/b.png"]);
}

#[test]
fn integral_prices_render_without_a_decimal_tail() {
    let draft = ProductDraft::from_record(&sample_record());
    assert_eq!(draft.text(TextField::OriginPrice), "100");
    assert_eq!(draft.text(TextField::Price), "80");
}

#[test]
fn fractional_prices_keep_their_fraction() {
    let mut record = sample_record();
    record.price = 79.5;
    let draft = ProductDraft::from_record(&record);
    assert_eq!(draft.text(TextField::Price), "79.5");
}

#[test]
fn payload_coerces_numbers_flag_and_gallery() {
    let mut draft = ProductDraft::new();
    draft.set_text(TextField::Title, "New thing");
    draft.set_text(TextField::OriginPrice, "100");
    draft.set_text(TextField::Price, "80");
    draft.set_enabled(true);

    let payload = draft.to_payload();
    assert_eq!(payload.origin_price, Some(100.0));
    assert_eq!(payload.price, Some(80.0));
    assert_eq!(payload.is_enabled, 1);
}

#[test]
fn payload_drops_blank_gallery_slots_in_order() {
    let mut record = sample_record();
    record.images_url = vec![
        "a".to_string(),
        String::new(),
        "b".to_string(),
        String::new(),
    ];
    let draft = ProductDraft::from_record(&record);
    assert_eq!(draft.to_payload().images_url, ["a", "b"]);
}

#[test]
fn malformed_price_text_serializes_as_null() {
    let mut draft = ProductDraft::new();
    draft.set_text(TextField::OriginPrice, "not-a-price");
    draft.set_text(TextField::Price, "80.");
    let value = serde_json::to_value(draft.to_payload()).expect("payload encodes");
    assert_eq!(value["origin_price"], Value::Null);
    assert_eq!(value["price"], json!(80.0), "trailing dot still parses");
    assert_eq!(value["is_enabled"], json!(0));
}

#[test]
fn payload_uses_the_wire_field_names() {
    let mut draft = ProductDraft::new();
    draft.set_text(TextField::ImageUrl, "https://img/main.png");
    let value = serde_json::to_value(draft.to_payload()).expect("payload encodes");
    assert_eq!(value["imageUrl"], json!("https://img/main.png"));
    assert!(value.get("imagesUrl").is_some());
    assert!(value.get("id").is_none(), "the id travels in the URL, not the body");
}

#[test]
fn record_without_images_deserializes_with_an_empty_gallery() {
    let record: ProductRecord = serde_json::from_value(json!({
        "id": "p9",
        "title": "Bare",
        "origin_price": 10,
        "price": 5,
        "is_enabled": 1,
        "imageUrl": "x"
    }))
    .expect("record decodes");
    assert!(record.images_url.is_empty());
    assert!(record.is_enabled);
    let draft = ProductDraft::from_record(&record);
    assert!(draft.gallery().is_empty());
}
