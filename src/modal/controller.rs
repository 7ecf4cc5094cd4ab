use crate::domain::ProductRecord;
use crate::form::ProductDraft;

use super::mode::ModalMode;

/// Identifies one open-to-close lifetime of the modal.
///
/// Network requests issued from a session carry its id; a response whose id
/// no longer matches the controller's current session is discarded instead of
/// landing on a buffer it was never issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Owns the modal lifecycle and the draft it buffers.
///
/// The draft is rebuilt wholesale on every `open`; no field from a prior
/// session survives into the next one, secondary images included.
#[derive(Debug, Clone)]
pub struct ModalController {
    mode: Option<ModalMode>,
    visible: bool,
    draft: ProductDraft,
    session: u64,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController {
    pub fn new() -> Self {
        Self {
            mode: None,
            visible: false,
            draft: ProductDraft::new(),
            session: 0,
        }
    }

    /// Opens the modal in `mode`, seeding a fresh draft from `record` when
    /// one is given (defaults first, record fields overlaid), and returns the
    /// new session id.
    pub fn open(&mut self, mode: ModalMode, record: Option<&ProductRecord>) -> SessionId {
        self.draft = match record {
            Some(record) => ProductDraft::from_record(record),
            None => ProductDraft::new(),
        };
        self.mode = Some(mode);
        self.visible = true;
        self.session += 1;
        SessionId(self.session)
    }

    /// Closing is always explicit. The draft stays behind; the next `open`
    /// replaces it before anything can observe it.
    pub fn close(&mut self) {
        self.visible = false;
        self.mode = None;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> Option<ModalMode> {
        self.mode
    }

    pub fn session(&self) -> SessionId {
        SessionId(self.session)
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn title(&self) -> &'static str {
        self.mode.map(ModalMode::title).unwrap_or_default()
    }
}
