mod product;

pub use product::{ProductPayload, ProductRecord};
