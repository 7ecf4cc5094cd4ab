use crate::domain::ProductRecord;
use crate::form::TextField;
use crate::modal::{ModalController, ModalMode};

fn record(id: &str, title: &str, images: &[&str]) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        title: title.to_string(),
        images_url: images.iter().map(|url| url.to_string()).collect(),
        ..ProductRecord::default()
    }
}

#[test]
fn open_seeds_the_draft_from_the_record() {
    let mut modal = ModalController::new();
    modal.open(ModalMode::Edit, Some(&record("p1", "First", &["a", "b"])));
    assert!(modal.is_open());
    assert_eq!(modal.mode(), Some(ModalMode::Edit));
    assert_eq!(modal.draft().id, "p1");
    assert_eq!(modal.draft().gallery().slots(), ["a", "b"]);
}

#[test]
fn reopening_replaces_the_draft_wholesale() {
    let mut modal = ModalController::new();
    modal.open(ModalMode::Edit, Some(&record("p1", "First", &["a", "b", "c"])));
    modal
        .draft_mut()
        .set_text(TextField::Description, "edited but never committed");

    modal.open(ModalMode::View, Some(&record("p2", "Second", &["z"])));
    let draft = modal.draft();
    assert_eq!(draft.id, "p2");
    assert_eq!(draft.text(TextField::Title), "Second");
    assert_eq!(draft.text(TextField::Description), "");
    assert_eq!(
        draft.gallery().slots(),
        ["z"],
        "no secondary image from the previous product survives"
    );
}

#[test]
fn create_opens_on_the_blank_template() {
    let mut modal = ModalController::new();
    modal.open(ModalMode::Edit, Some(&record("p1", "First", &["a"])));
    modal.open(ModalMode::Create, None);
    assert_eq!(modal.draft().id, "");
    assert_eq!(modal.draft().text(TextField::Title), "");
    assert!(modal.draft().gallery().is_empty());
}

#[test]
fn close_hides_without_touching_the_draft() {
    let mut modal = ModalController::new();
    modal.open(ModalMode::Delete, Some(&record("p1", "First", &[])));
    modal.close();
    assert!(!modal.is_open());
    assert_eq!(modal.mode(), None);
    assert_eq!(modal.draft().id, "p1", "draft lingers until the next open");
}

#[test]
fn each_open_gets_a_new_session() {
    let mut modal = ModalController::new();
    let first = modal.open(ModalMode::Edit, Some(&record("p1", "First", &[])));
    let second = modal.open(ModalMode::Edit, Some(&record("p1", "First", &[])));
    assert_ne!(first, second);
    assert_eq!(modal.session(), second);

    modal.close();
    let third = modal.open(ModalMode::Create, None);
    assert_ne!(second, third);
}
