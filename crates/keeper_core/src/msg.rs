#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the entry field (full replacement text).
    InputChanged(String),
    /// User submitted the entry field contents.
    Submitted,
    /// Clipboard text landed in the entry field at a byte offset.
    Pasted { text: String, cursor: usize },
    /// User deleted one item from the list.
    ItemDeleted(String),
    /// User cleared the whole list.
    ListCleared,
    /// User cleared the entry field (Escape).
    InputCleared,
    /// Items loaded from the persistence slot at startup.
    ItemsRestored(Vec<String>),
    /// User asked for a JSON export of the list.
    ExportJsonRequested,
    /// User asked for a plain-text export of the list.
    ExportTxtRequested,
    /// An export file was written.
    ExportFinished { path: String },
    /// An export file could not be written.
    ExportFailed { message: String },
    /// Candidates parsed out of an import file.
    ImportParsed(Vec<String>),
    /// An import file could not be read or parsed.
    ImportFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
