use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which surface currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Login,
    Table,
    Modal,
}

#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Quit,
    Refresh,
    OpenCreate,
    OpenView,
    OpenEdit,
    OpenDelete,
    RowStep(i32),
    NextField,
    PrevField,
    Confirm,
    Cancel,
    GalleryAdd,
    GalleryRemove,
    Activate,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent, context: InputContext) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') | KeyCode::Char('C') => {
                KeyCommand::Quit
            }
            KeyCode::Char('r') | KeyCode::Char('R') if context == InputContext::Table => {
                KeyCommand::Refresh
            }
            KeyCode::Char('n') | KeyCode::Char('N') if context == InputContext::Table => {
                KeyCommand::OpenCreate
            }
            KeyCode::Char('s') | KeyCode::Char('S') if context == InputContext::Modal => {
                KeyCommand::Confirm
            }
            KeyCode::Char('a') | KeyCode::Char('A') if context == InputContext::Modal => {
                KeyCommand::GalleryAdd
            }
            KeyCode::Char('x') | KeyCode::Char('X') if context == InputContext::Modal => {
                KeyCommand::GalleryRemove
            }
            _ => KeyCommand::None,
        };
    }

    match context {
        InputContext::Login => match key.code {
            KeyCode::Enter => KeyCommand::Confirm,
            KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
            KeyCode::Esc => KeyCommand::Cancel,
            _ => KeyCommand::Edit(*key),
        },
        InputContext::Table => match key.code {
            KeyCode::Down | KeyCode::Char('j') => KeyCommand::RowStep(1),
            KeyCode::Up | KeyCode::Char('k') => KeyCommand::RowStep(-1),
            KeyCode::Enter | KeyCode::Char('v') => KeyCommand::OpenView,
            KeyCode::Char('e') => KeyCommand::OpenEdit,
            KeyCode::Char('d') => KeyCommand::OpenDelete,
            KeyCode::Char('c') => KeyCommand::OpenCreate,
            KeyCode::Char('r') => KeyCommand::Refresh,
            KeyCode::Char('q') => KeyCommand::Quit,
            KeyCode::Esc => KeyCommand::Cancel,
            _ => KeyCommand::None,
        },
        InputContext::Modal => match key.code {
            KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
            KeyCode::Esc => KeyCommand::Cancel,
            KeyCode::Enter => KeyCommand::Activate,
            _ => KeyCommand::Edit(*key),
        },
    }
}

/// Text-buffer editing shared by the login form, the scalar fields and the
/// gallery slots: printable characters append, Backspace pops, Delete clears.
pub fn edit_text(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            if buffer.is_empty() {
                return false;
            }
            buffer.clear();
            true
        }
        _ => false,
    }
}
