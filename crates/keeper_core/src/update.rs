use crate::dedupe::{collapse, partition};
use crate::state::{Status, StatusKind};
use crate::tokenize::tokenize;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::Submitted => submit(&mut state),
        Msg::Pasted { text, cursor } => {
            // Paste fills the field and previews; it never adds anything.
            if !text.is_empty() {
                state.splice_input(&text, cursor);
                preview(&mut state);
            }
            Vec::new()
        }
        Msg::ItemDeleted(item) => {
            if state.remove_exact(&item) {
                state.set_status(Status::new(
                    StatusKind::Idle,
                    format!("Deleted \"{item}\"."),
                ));
                vec![persist(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::ListCleared => {
            if state.clear_items() {
                vec![persist(&state)]
            } else {
                Vec::new()
            }
        }
        Msg::InputCleared => {
            state.set_input(String::new());
            state.set_status(Status::idle());
            Vec::new()
        }
        Msg::ItemsRestored(items) => {
            // Restoring is not a mutation: collapse defends the no-duplicate
            // invariant against a hand-edited slot, but nothing is written
            // back until the next real change.
            state.replace_items(collapse(&items));
            Vec::new()
        }
        Msg::ExportJsonRequested => vec![Effect::ExportJson {
            items: state.items().to_vec(),
        }],
        Msg::ExportTxtRequested => vec![Effect::ExportTxt {
            items: state.items().to_vec(),
        }],
        Msg::ExportFinished { path } => {
            state.set_status(Status::new(StatusKind::Idle, format!("Exported to {path}.")));
            Vec::new()
        }
        Msg::ExportFailed { message } => {
            state.set_status(Status::new(
                StatusKind::Error,
                format!("Export failed: {message}"),
            ));
            Vec::new()
        }
        Msg::ImportParsed(candidates) => import_merge(&mut state, &candidates),
        Msg::ImportFailed { message } => {
            state.set_status(Status::new(StatusKind::Error, message));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    let tokens = tokenize(state.input());
    if tokens.is_empty() {
        state.set_status(Status::new(StatusKind::Empty, "Type something first."));
        return Vec::new();
    }

    let part = partition(state.items(), &tokens);
    state.prepend(&part.uniques);

    if tokens.len() == 1 {
        let token = &tokens[0];
        let status = if part.uniques.is_empty() {
            Status::new(
                StatusKind::Duplicate,
                format!("\"{token}\" is already in the list."),
            )
        } else {
            Status::new(StatusKind::Added, format!("Added \"{token}\"."))
        };
        state.set_status(status);
    } else {
        let mut parts = Vec::new();
        if !part.uniques.is_empty() {
            parts.push(format!("added {}", part.uniques.len()));
        }
        if !part.duplicates.is_empty() {
            let dups = part.duplicates.len();
            parts.push(format!("{dups} {}", plural(dups, "duplicate")));
        }
        state.set_status(Status::new(
            StatusKind::Batch,
            format!("Batch: {}.", parts.join(", ")),
        ));
    }

    state.set_input(String::new());
    if part.uniques.is_empty() {
        Vec::new()
    } else {
        vec![persist(state)]
    }
}

/// Read-only analysis of the field after a paste. Repeating it over the
/// same contents yields the same status.
fn preview(state: &mut AppState) {
    let tokens = tokenize(state.input());
    if tokens.is_empty() {
        state.set_status(Status::idle());
    } else if tokens.len() == 1 {
        let token = &tokens[0];
        let status = if state.contains(token) {
            Status::new(
                StatusKind::Duplicate,
                format!("\"{token}\" is already in the list."),
            )
        } else {
            Status::idle()
        };
        state.set_status(status);
    } else {
        let part = partition(state.items(), &tokens);
        let dups = part.duplicates.len();
        state.set_status(Status::new(
            StatusKind::Preview,
            format!(
                "Batch ready: {} new, {dups} {}.",
                part.uniques.len(),
                plural(dups, "duplicate")
            ),
        ));
    }
}

fn import_merge(state: &mut AppState, candidates: &[String]) -> Vec<Effect> {
    let cleaned = collapse(candidates);
    let part = partition(state.items(), &cleaned);
    state.prepend(&part.uniques);

    let skipped = part.duplicates.len();
    state.set_status(Status::new(
        StatusKind::Batch,
        format!(
            "Import complete: added {}, skipped {skipped} {}.",
            part.uniques.len(),
            plural(skipped, "duplicate")
        ),
    ));

    if part.uniques.is_empty() {
        Vec::new()
    } else {
        vec![persist(state)]
    }
}

fn persist(state: &AppState) -> Effect {
    Effect::PersistItems {
        items: state.items().to_vec(),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_owned()
    } else {
        format!("{word}s")
    }
}
