use reqwest::StatusCode;

use crate::api::{ApiError, Credentials};
use crate::domain::ProductRecord;
use crate::modal::{ModalController, ModalMode, SessionId};
use crate::store::{Effect, NetEvent, Pending, Store};

fn live_session() -> SessionId {
    ModalController::new().open(ModalMode::Create, None)
}

fn rejection(message: &str) -> ApiError {
    ApiError::Rejected {
        status: StatusCode::BAD_REQUEST,
        message: Some(message.to_string()),
    }
}

fn credentials() -> Credentials {
    Credentials::from_millis("token-1", 32_503_680_000_000)
}

fn record(id: &str) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        ..ProductRecord::default()
    }
}

#[test]
fn sign_in_success_authenticates_and_refreshes_exactly_once() {
    let mut store = Store::new();
    assert!(!store.is_authenticated());
    store.begin(Pending::SignIn);

    let effects = store.apply(NetEvent::SignedIn(Ok(credentials())), live_session());
    assert!(store.is_authenticated());
    let refreshes = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::RefreshList))
        .count();
    assert_eq!(refreshes, 1);
    assert!(
        effects
            .iter()
            .any(|effect| matches!(effect, Effect::PersistCredentials(_)))
    );
    assert!(!store.is_busy(), "sign-in completion frees the slot");
}

#[test]
fn sign_in_failure_keeps_the_login_view() {
    let mut store = Store::new();
    store.begin(Pending::SignIn);
    let effects = store.apply(NetEvent::SignedIn(Err(rejection("bad password"))), live_session());
    assert!(!store.is_authenticated());
    assert!(matches!(&effects[..], [Effect::Notify(message)] if message.contains("bad password")));
}

#[test]
fn session_check_success_triggers_a_refresh() {
    let mut store = Store::new();
    store.begin(Pending::CheckSession);
    let effects = store.apply(NetEvent::SessionChecked(Ok(())), live_session());
    assert!(store.is_authenticated());
    assert_eq!(effects, [Effect::RefreshList]);
}

#[test]
fn session_check_failure_clears_the_stored_credential() {
    let mut store = Store::new();
    store.begin(Pending::CheckSession);
    let effects = store.apply(
        NetEvent::SessionChecked(Err(rejection("expired"))),
        live_session(),
    );
    assert!(!store.is_authenticated());
    assert_eq!(effects, [Effect::ClearCredentials]);
}

#[test]
fn list_load_replaces_the_products_wholesale() {
    let mut store = Store::new();
    store.begin(Pending::Refresh);
    store.apply(
        NetEvent::ListLoaded(Ok(vec![record("a"), record("b")])),
        live_session(),
    );
    assert_eq!(store.products().len(), 2);

    store.begin(Pending::Refresh);
    store.apply(NetEvent::ListLoaded(Ok(vec![record("c")])), live_session());
    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].id, "c");
}

#[test]
fn save_success_closes_the_modal_and_refreshes() {
    let mut modal = ModalController::new();
    let session = modal.open(ModalMode::Create, None);
    let mut store = Store::new();
    store.begin(Pending::Save(session));

    let effects = store.apply(
        NetEvent::Saved {
            session,
            result: Ok(()),
        },
        modal.session(),
    );
    assert_eq!(effects, [Effect::CloseModal, Effect::RefreshList]);
}

#[test]
fn save_failure_keeps_the_modal_open() {
    let mut modal = ModalController::new();
    let session = modal.open(ModalMode::Edit, None);
    let mut store = Store::new();
    store.begin(Pending::Save(session));

    let effects = store.apply(
        NetEvent::Saved {
            session,
            result: Err(rejection("title required")),
        },
        modal.session(),
    );
    assert!(matches!(&effects[..], [Effect::Notify(message)] if message.contains("title required")));
}

#[test]
fn stale_save_results_are_dropped() {
    let mut modal = ModalController::new();
    let stale = modal.open(ModalMode::Create, None);
    let current = modal.open(ModalMode::Edit, None);
    let mut store = Store::new();
    store.begin(Pending::Save(stale));

    let effects = store.apply(
        NetEvent::Saved {
            session: stale,
            result: Ok(()),
        },
        current,
    );
    assert!(effects.is_empty(), "a closed session must not close the new modal");
    assert!(!store.is_busy(), "the request still completed");
}

#[test]
fn delete_failure_surfaces_the_server_message_and_keeps_state() {
    let mut modal = ModalController::new();
    let session = modal.open(ModalMode::Delete, None);
    let mut store = Store::new();
    store.begin(Pending::Refresh);
    store.apply(NetEvent::ListLoaded(Ok(vec![record("a")])), session);
    store.begin(Pending::Delete(session));

    let effects = store.apply(
        NetEvent::Deleted {
            session,
            result: Err(rejection("product not found")),
        },
        session,
    );
    assert!(
        matches!(&effects[..], [Effect::Notify(message)] if message.contains("product not found"))
    );
    assert_eq!(store.products().len(), 1, "the list is untouched");
}

#[test]
fn begin_refuses_a_second_in_flight_request() {
    let mut store = Store::new();
    let session = live_session();
    assert!(store.begin(Pending::Save(session)));
    assert!(!store.begin(Pending::Save(session)), "double submit blocked");
    assert!(!store.begin(Pending::Refresh));

    store.apply(
        NetEvent::Saved {
            session,
            result: Ok(()),
        },
        session,
    );
    assert!(store.begin(Pending::Refresh), "slot frees after completion");
}
