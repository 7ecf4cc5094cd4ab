use crate::form::{Gallery, MAX_SLOTS};

fn gallery_of(urls: &[&str]) -> Gallery {
    let urls: Vec<String> = urls.iter().map(|url| url.to_string()).collect();
    Gallery::from_urls(&urls)
}

fn assert_invariants(gallery: &Gallery, context: &str) {
    assert!(
        gallery.len() <= MAX_SLOTS,
        "{context}: gallery exceeded capacity"
    );
    let slots = gallery.slots();
    if slots.len() >= 2 {
        let tail = &slots[slots.len() - 2..];
        assert!(
            !(tail[0].is_empty() && tail[1].is_empty()),
            "{context}: two trailing empty slots"
        );
    }
}

#[test]
fn typing_into_last_slot_opens_a_fresh_one() {
    let mut gallery = gallery_of(&[""]);
    assert!(gallery.set_slot(0, "https://img/one.png"));
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery.slot(0), Some("https://img/one.png"));
    assert_eq!(gallery.slot(1), Some(""), "new last slot starts blank");
}

#[test]
fn growth_stops_at_capacity() {
    let mut gallery = gallery_of(&[""]);
    for index in 0..MAX_SLOTS {
        gallery.set_slot(index, format!("url-{index}"));
        assert_invariants(&gallery, "while filling");
    }
    assert_eq!(gallery.len(), MAX_SLOTS);
    assert_eq!(gallery.slot(MAX_SLOTS - 1), Some("url-4"), "no blank appended at capacity");
}

#[test]
fn typing_into_an_interior_slot_does_not_grow() {
    let mut gallery = gallery_of(&["a", "b", ""]);
    gallery.set_slot(0, "replaced");
    assert_eq!(gallery.len(), 3);
}

#[test]
fn clearing_collapses_the_trailing_blank() {
    let mut gallery = gallery_of(&["a", "b", ""]);
    gallery.set_slot(1, "");
    assert_eq!(gallery.slots(), ["a", ""]);
}

#[test]
fn clearing_the_only_slot_keeps_it() {
    let mut gallery = gallery_of(&["a"]);
    gallery.set_slot(0, "");
    assert_eq!(gallery.len(), 1, "length 1 never shrinks on clear");
}

#[test]
fn clearing_the_last_filled_slot_shrinks_by_one() {
    let mut gallery = gallery_of(&["a", ""]);
    gallery.set_slot(0, "");
    assert_eq!(gallery.slots(), [""]);
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut gallery = gallery_of(&["a"]);
    assert!(!gallery.set_slot(3, "x"));
    assert_eq!(gallery.slots(), ["a"]);
}

#[test]
fn add_slot_is_a_noop_at_capacity() {
    let mut gallery = gallery_of(&["a", "b", "c", "d", "e"]);
    assert!(!gallery.add_slot());
    assert_eq!(gallery.len(), MAX_SLOTS);
}

#[test]
fn add_affordance_needs_capacity_and_a_filled_tail() {
    assert!(gallery_of(&[]).can_add_slot(), "empty gallery can add");
    assert!(gallery_of(&["a"]).can_add_slot());
    assert!(!gallery_of(&["a", ""]).can_add_slot(), "blank already waiting");
    assert!(!gallery_of(&["a", "b", "c", "d", "e"]).can_add_slot());
}

#[test]
fn remove_last_takes_whatever_is_at_the_tail() {
    let mut gallery = gallery_of(&["a", "b"]);
    assert!(gallery.remove_last());
    assert_eq!(gallery.slots(), ["a"]);
    assert!(gallery.remove_last());
    assert!(gallery.is_empty());
    assert!(!gallery.remove_last());
}

#[test]
fn filled_filters_blanks_and_keeps_order() {
    let gallery = gallery_of(&["a", "", "b", ""]);
    assert_eq!(gallery.filled(), ["a", "b"]);
}

#[test]
fn seeding_truncates_to_capacity() {
    let gallery = gallery_of(&["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(gallery.len(), MAX_SLOTS);
    assert_eq!(gallery.slot(4), Some("5"));
}

#[test]
fn invariants_survive_a_mixed_editing_session() {
    let mut gallery = gallery_of(&[""]);
    let script: &[(usize, &str)] = &[
        (0, "a"),
        (1, "b"),
        (2, "c"),
        (1, ""),
        (2, ""),
        (0, ""),
        (0, "again"),
        (1, "more"),
        (2, "and-more"),
        (3, "four"),
        (4, "five"),
        (4, ""),
        (3, ""),
        (0, ""),
    ];
    for (step, (index, value)) in script.iter().enumerate() {
        gallery.set_slot(*index, *value);
        assert_invariants(&gallery, &format!("step {step}"));
    }
    gallery.add_slot();
    assert_invariants(&gallery, "after explicit add");
    while gallery.remove_last() {
        assert_invariants(&gallery, "while draining");
    }
    assert!(gallery.is_empty());
}
