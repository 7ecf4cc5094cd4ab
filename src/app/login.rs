#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// The sign-in form buffers. Lives outside the store; credentials being
/// typed are not session state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    focus: Option<LoginField>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            focus: Some(LoginField::Username),
            ..Self::default()
        }
    }

    pub fn focus(&self) -> LoginField {
        self.focus.unwrap_or(LoginField::Username)
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(match self.focus() {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        });
    }

    pub fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus() {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}
