use crate::domain::{ProductPayload, ProductRecord};

use super::gallery::Gallery;

/// The scalar text fields of the product form, in display order.
///
/// Prices are text while being edited so the input shows exactly what the
/// user typed, transient states included; coercion happens at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ImageUrl,
    Title,
    Category,
    Unit,
    OriginPrice,
    Price,
    Description,
    Content,
}

/// The isolated working copy edited inside one modal session.
///
/// A draft is built fresh on every open and never aliases the store's
/// canonical list; edits stay invisible until commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: String,
    pub title: String,
    pub category: String,
    pub unit: String,
    pub description: String,
    pub content: String,
    pub origin_price: String,
    pub price: String,
    pub is_enabled: bool,
    pub image_url: String,
    gallery: Gallery,
}

impl ProductDraft {
    /// The blank template: every field present, every buffer empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays a record onto the blank template, field by field.
    ///
    /// Every field exists afterwards even when the source record omitted it,
    /// and nothing from any earlier draft survives.
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            unit: record.unit.clone(),
            description: record.description.clone(),
            content: record.content.clone(),
            origin_price: number_text(record.origin_price),
            price: number_text(record.price),
            is_enabled: record.is_enabled,
            image_url: record.image_url.clone(),
            gallery: Gallery::from_urls(&record.images_url),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::ImageUrl => &self.image_url,
            TextField::Title => &self.title,
            TextField::Category => &self.category,
            TextField::Unit => &self.unit,
            TextField::OriginPrice => &self.origin_price,
            TextField::Price => &self.price,
            TextField::Description => &self.description,
            TextField::Content => &self.content,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::ImageUrl => self.image_url = value,
            TextField::Title => self.title = value,
            TextField::Category => self.category = value,
            TextField::Unit => self.unit = value,
            TextField::OriginPrice => self.origin_price = value,
            TextField::Price => self.price = value,
            TextField::Description => self.description = value,
            TextField::Content => self.content = value,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    pub fn toggle_enabled(&mut self) {
        self.is_enabled = !self.is_enabled;
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    /// Commit-time coercion: prices parse or fall to `None`, the enabled flag
    /// becomes 1/0, empty gallery slots drop out.
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            title: self.title.clone(),
            category: self.category.clone(),
            unit: self.unit.clone(),
            description: self.description.clone(),
            content: self.content.clone(),
            origin_price: self.origin_price.trim().parse().ok(),
            price: self.price.trim().parse().ok(),
            is_enabled: if self.is_enabled { 1 } else { 0 },
            image_url: self.image_url.clone(),
            images_url: self.gallery.filled(),
        }
    }
}

fn number_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
