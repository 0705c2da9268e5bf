//! Terminal platform layer: event loop, effect execution, rendering.
mod app;
mod effects;
mod logging;
mod ui;

pub(crate) use app::run_app;
