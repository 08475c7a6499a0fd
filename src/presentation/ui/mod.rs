//! UI screens.

mod app;
mod details_screen;
mod form_screen;
mod table_screen;

pub use app::App;
pub use details_screen::{DetailsAction, DetailsScreen};
pub use form_screen::{FormAction, FormMode, FormScreen};
pub use table_screen::{TableAction, TableScreen, TableScreenState};
