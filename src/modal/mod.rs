mod controller;
mod mode;

pub use controller::{ModalController, SessionId};
pub use mode::ModalMode;
