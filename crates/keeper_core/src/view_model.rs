use crate::state::Status;

/// Render-ready snapshot of [`crate::AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Items in display order, most recent batch first.
    pub items: Vec<String>,
    /// Item count for the stats line.
    pub item_count: usize,
    /// Current entry-field text.
    pub input: String,
    /// Outcome of the last user action.
    pub status: Status,
    /// The field holds exactly one token and it is already in the list.
    pub live_duplicate: bool,
    /// True when the state changed since the last render.
    pub dirty: bool,
}
