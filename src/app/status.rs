#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn checking_session(&mut self) {
        self.message = "Checking stored session…".to_string();
    }

    pub fn signing_in(&mut self) {
        self.message = "Signing in…".to_string();
    }

    pub fn signed_in(&mut self) {
        self.message = "Signed in.".to_string();
    }

    pub fn refreshing(&mut self) {
        self.message = "Loading products…".to_string();
    }

    pub fn list_loaded(&mut self, count: usize) {
        self.message = format!("{count} product(s) loaded");
    }

    pub fn saving(&mut self) {
        self.message = "Saving product…".to_string();
    }

    pub fn saved(&mut self) {
        self.message = "Product saved.".to_string();
    }

    pub fn deleting(&mut self) {
        self.message = "Deleting product…".to_string();
    }

    pub fn deleted(&mut self) {
        self.message = "Product deleted.".to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn request_outstanding(&mut self) {
        self.message = "A request is still in flight…".to_string();
    }

    pub fn sign_in_required(&mut self) {
        self.message = "Please sign in.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
