//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the custom
//! playlist and the current list selection.

mod model;

pub use model::*;
