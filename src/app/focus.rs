use crate::form::{ProductDraft, TextField};

/// One focusable element of the editable modal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalField {
    Text(TextField),
    GallerySlot(usize),
    Enabled,
}

impl ModalField {
    pub fn label(self) -> String {
        match self {
            ModalField::Text(field) => field_label(field).to_string(),
            ModalField::GallerySlot(index) => format!("Image URL {}", index + 1),
            ModalField::Enabled => "Enabled".to_string(),
        }
    }
}

pub fn field_label(field: TextField) -> &'static str {
    match field {
        TextField::ImageUrl => "Primary image URL",
        TextField::Title => "Title",
        TextField::Category => "Category",
        TextField::Unit => "Unit",
        TextField::OriginPrice => "Original price",
        TextField::Price => "Price",
        TextField::Description => "Description",
        TextField::Content => "Content",
    }
}

/// Focus order of the form body, recomputed from the draft because the
/// gallery grows and shrinks under the cursor.
pub fn focus_targets(draft: &ProductDraft) -> Vec<ModalField> {
    let mut targets = vec![ModalField::Text(TextField::ImageUrl)];
    targets.extend((0..draft.gallery().len()).map(ModalField::GallerySlot));
    targets.extend(
        [
            TextField::Title,
            TextField::Category,
            TextField::Unit,
            TextField::OriginPrice,
            TextField::Price,
            TextField::Description,
            TextField::Content,
        ]
        .into_iter()
        .map(ModalField::Text),
    );
    targets.push(ModalField::Enabled);
    targets
}

/// Cursor into the focus order. Indices are clamped on every read since the
/// target list can shrink between frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalFocus {
    index: usize,
}

impl ModalFocus {
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn current(&self, draft: &ProductDraft) -> ModalField {
        let targets = focus_targets(draft);
        targets[self.index.min(targets.len() - 1)]
    }

    pub fn index(&self, draft: &ProductDraft) -> usize {
        self.index.min(focus_targets(draft).len() - 1)
    }

    pub fn step(&mut self, draft: &ProductDraft, delta: i32) {
        let len = focus_targets(draft).len() as i32;
        let current = self.index.min((len - 1) as usize) as i32;
        self.index = (((current + delta) % len + len) % len) as usize;
    }
}
