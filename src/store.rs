use tracing::{debug, info, warn};

use crate::api::{ApiError, Credentials};
use crate::domain::ProductRecord;
use crate::modal::SessionId;

/// The one request a user action may have in flight.
///
/// `begin` hands out the slot; a second trigger while it is taken is simply
/// not issued, which is what keeps a double-press on confirm from submitting
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    CheckSession,
    SignIn,
    Refresh,
    Save(SessionId),
    Delete(SessionId),
}

/// A completed network call, fed back into the store by the runtime.
///
/// `Saved` and `Deleted` carry the modal session they were issued under so
/// that a response arriving after the modal moved on can be discarded.
#[derive(Debug)]
pub enum NetEvent {
    SessionChecked(Result<(), ApiError>),
    SignedIn(Result<Credentials, ApiError>),
    ListLoaded(Result<Vec<ProductRecord>, ApiError>),
    Saved {
        session: SessionId,
        result: Result<(), ApiError>,
    },
    Deleted {
        session: SessionId,
        result: Result<(), ApiError>,
    },
}

/// What the runtime should do after a transition. The store never touches
/// the network, the modal, or the disk itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RefreshList,
    CloseModal,
    PersistCredentials(Credentials),
    ClearCredentials,
    Notify(String),
}

/// Authoritative session flag and product list.
///
/// The list is replaced wholesale on every refresh; nothing here diffs or
/// paginates. All mutation goes through `apply`, which makes every policy in
/// the transition table testable without a server.
#[derive(Debug, Default)]
pub struct Store {
    authenticated: bool,
    products: Vec<ProductRecord>,
    busy: Option<Pending>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn busy(&self) -> Option<Pending> {
        self.busy
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    /// Claims the in-flight slot. Returns false while another request is
    /// outstanding, in which case the caller must not issue the request.
    pub fn begin(&mut self, pending: Pending) -> bool {
        if self.busy.is_some() {
            return false;
        }
        self.busy = Some(pending);
        true
    }

    /// Applies one completed call and returns the follow-up work.
    ///
    /// `current_session` is the modal session that is live right now; save
    /// and delete results from any other session are dropped on the floor.
    pub fn apply(&mut self, event: NetEvent, current_session: SessionId) -> Vec<Effect> {
        match event {
            NetEvent::SessionChecked(result) => {
                self.finish(Pending::CheckSession);
                match result {
                    Ok(()) => {
                        info!("session restored");
                        self.authenticated = true;
                        vec![Effect::RefreshList]
                    }
                    Err(err) => {
                        debug!(error = %err.message(), "session check failed");
                        self.authenticated = false;
                        vec![Effect::ClearCredentials]
                    }
                }
            }
            NetEvent::SignedIn(result) => {
                self.finish(Pending::SignIn);
                match result {
                    Ok(credentials) => {
                        info!("signed in");
                        self.authenticated = true;
                        vec![
                            Effect::PersistCredentials(credentials),
                            Effect::RefreshList,
                        ]
                    }
                    Err(err) => {
                        warn!(error = %err.message(), "sign-in failed");
                        self.authenticated = false;
                        vec![Effect::Notify(format!("Sign-in failed: {}", err.message()))]
                    }
                }
            }
            NetEvent::ListLoaded(result) => {
                self.finish(Pending::Refresh);
                match result {
                    Ok(products) => {
                        debug!(count = products.len(), "product list replaced");
                        self.products = products;
                        Vec::new()
                    }
                    Err(err) => vec![Effect::Notify(format!(
                        "Could not load products: {}",
                        err.message()
                    ))],
                }
            }
            NetEvent::Saved { session, result } => {
                self.finish_matching(|pending| matches!(pending, Pending::Save(_)));
                if session != current_session {
                    warn!("dropping save result from a closed modal session");
                    return Vec::new();
                }
                match result {
                    Ok(()) => vec![Effect::CloseModal, Effect::RefreshList],
                    Err(err) => vec![Effect::Notify(format!("Save failed: {}", err.message()))],
                }
            }
            NetEvent::Deleted { session, result } => {
                self.finish_matching(|pending| matches!(pending, Pending::Delete(_)));
                if session != current_session {
                    warn!("dropping delete result from a closed modal session");
                    return Vec::new();
                }
                match result {
                    Ok(()) => vec![Effect::CloseModal, Effect::RefreshList],
                    Err(err) => vec![Effect::Notify(format!(
                        "Delete failed: {}",
                        err.message()
                    ))],
                }
            }
        }
    }

    fn finish(&mut self, pending: Pending) {
        if self.busy == Some(pending) {
            self.busy = None;
        }
    }

    fn finish_matching(&mut self, matches: impl Fn(Pending) -> bool) {
        if self.busy.is_some_and(matches) {
            self.busy = None;
        }
    }
}
