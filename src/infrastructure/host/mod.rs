//! Panel host task and its request handle.

mod panel_host;

pub use panel_host::{PanelHandle, PanelHost};
