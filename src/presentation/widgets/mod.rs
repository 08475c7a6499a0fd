mod footer_bar;
mod input;
mod status_bar;

pub use footer_bar::FooterBar;
pub use input::TextInput;
pub use status_bar::{StatusLevel, StatusLine};
