use crate::normalize::normalize;
use crate::tokenize::tokenize;
use crate::view_model::AppViewModel;

/// Outcome tag of the last user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Idle,
    Duplicate,
    Added,
    Batch,
    Empty,
    Preview,
    Error,
}

/// Transient single-slot report of the last user action.
///
/// Replaced by the next action, never accumulated, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn idle() -> Self {
        Self::default()
    }

    pub(crate) fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Whole-app state: the list, the entry field, and the last status.
///
/// Invariant: no two items share a normalized key. All mutation goes
/// through [`crate::update`]; the platform layer reads views and consumes
/// the dirty flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    items: Vec<String>,
    input: String,
    status: Status,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order, most recently added batch first.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Current entry-field text.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// True when any item's normalized key matches `candidate`'s.
    pub fn contains(&self, candidate: &str) -> bool {
        let key = normalize(candidate);
        self.items.iter().any(|item| normalize(item) == key)
    }

    pub fn view(&self) -> AppViewModel {
        let live_duplicate = {
            // Live duplicate marker lights up only for a single token.
            let tokens = tokenize(&self.input);
            tokens.len() == 1 && self.contains(&tokens[0])
        };
        AppViewModel {
            items: self.items.clone(),
            item_count: self.items.len(),
            input: self.input.clone(),
            status: self.status.clone(),
            live_duplicate,
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; render when it was set.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.dirty = true;
    }

    /// Inserts pasted text at a byte offset into the entry field, clamped
    /// back to the nearest char boundary.
    pub(crate) fn splice_input(&mut self, text: &str, cursor: usize) {
        let mut at = cursor.min(self.input.len());
        while at > 0 && !self.input.is_char_boundary(at) {
            at -= 1;
        }
        self.input.insert_str(at, text);
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
        self.dirty = true;
    }

    /// Prepends `uniques` as a group, preserving their order, so the first
    /// element becomes the new head of the list.
    pub(crate) fn prepend(&mut self, uniques: &[String]) {
        if uniques.is_empty() {
            return;
        }
        let mut next = uniques.to_vec();
        next.append(&mut self.items);
        self.items = next;
        self.dirty = true;
    }

    /// Removes items by exact display-form equality. Returns whether
    /// anything was removed.
    pub(crate) fn remove_exact(&mut self, item: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it != item);
        let removed = self.items.len() != before;
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// Empties the list. Returns whether it held anything.
    pub(crate) fn clear_items(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        self.dirty = true;
        true
    }

    /// Replaces the list wholesale (startup restore).
    pub(crate) fn replace_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.dirty = true;
    }
}
