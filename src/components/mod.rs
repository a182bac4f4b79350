//! UI Components
//!
//! Pieces shared between pages.

mod footer;
mod nav_bar;
mod page_copy;
mod temperature_field;

pub use footer::Footer;
pub use nav_bar::NavBar;
pub use page_copy::PageCopy;
pub use temperature_field::TemperatureField;
