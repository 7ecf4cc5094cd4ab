/// Capacity of the secondary-image gallery.
pub const MAX_SLOTS: usize = 5;

/// The ordered sequence of secondary image URL slots backing the modal form.
///
/// The gallery keeps at most one trailing empty slot: typing into the last
/// slot opens a fresh blank one while capacity remains, and clearing the last
/// slot collapses the trailing blank. Both rules run on every edit, so the
/// behavior is observable per keystroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    slots: Vec<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the gallery wholesale from a record, truncated to capacity.
    pub fn from_urls(urls: &[String]) -> Self {
        let mut slots = urls.to_vec();
        slots.truncate(MAX_SLOTS);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// Replaces the slot at `index` and applies the grow/shrink rules.
    ///
    /// Grow and shrink are guarded independently: grow needs a non-empty
    /// value landing in the last slot with capacity left, shrink needs an
    /// empty value with a trailing blank to collapse. Out-of-range indices
    /// are ignored.
    pub fn set_slot(&mut self, index: usize, value: impl Into<String>) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        let value = value.into();
        let is_last = index == self.slots.len() - 1;
        let filled = !value.is_empty();
        self.slots[index] = value;

        if filled && is_last && self.slots.len() < MAX_SLOTS {
            self.slots.push(String::new());
        }

        if !filled
            && self.slots.len() > 1
            && self.slots.last().is_some_and(|slot| slot.is_empty())
        {
            self.slots.pop();
        }

        true
    }

    /// Whether the "add image" affordance should be offered: capacity left
    /// and no blank slot already waiting at the tail.
    pub fn can_add_slot(&self) -> bool {
        self.slots.len() < MAX_SLOTS && self.slots.last().is_none_or(|slot| !slot.is_empty())
    }

    /// Appends one empty slot; a no-op at capacity.
    pub fn add_slot(&mut self) -> bool {
        if self.slots.len() >= MAX_SLOTS {
            return false;
        }
        self.slots.push(String::new());
        true
    }

    /// Removes the final slot, whatever it holds.
    pub fn remove_last(&mut self) -> bool {
        self.slots.pop().is_some()
    }

    /// The commit shape: non-empty slots in insertion order.
    pub fn filled(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .cloned()
            .collect()
    }
}
