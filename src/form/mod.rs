mod draft;
mod gallery;

pub use draft::{ProductDraft, TextField};
pub use gallery::{Gallery, MAX_SLOTS};
