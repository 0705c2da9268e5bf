//! Keeper core: pure list state machine and the text rules behind it.
mod dedupe;
mod effect;
mod msg;
mod normalize;
mod state;
mod tokenize;
mod update;
mod view_model;

pub use dedupe::{collapse, partition, Partition};
pub use effect::Effect;
pub use msg::Msg;
pub use normalize::normalize;
pub use state::{AppState, Status, StatusKind};
pub use tokenize::tokenize;
pub use update::update;
pub use view_model::AppViewModel;
