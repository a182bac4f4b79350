//! Pages
//!
//! One component per concept, plus the home page.

mod home;
mod hooks;
mod lifecycle;
mod props;
mod redux;
mod state;
mod virtual_dom;

pub use home::HomePage;
pub use hooks::HooksPage;
pub use lifecycle::LifecyclePage;
pub use props::PropsPage;
pub use redux::ReduxPage;
pub use state::StatePage;
pub use virtual_dom::VirtualDomPage;
