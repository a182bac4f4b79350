//! Conceptos UI App
//!
//! Root component: navigation bar, the current page and the footer.

use favorites_store::FavoritesStore;
use leptos::ev;
use leptos::prelude::*;

use crate::components::{Footer, NavBar};
use crate::config::SiteConfig;
use crate::pages::{HomePage, HooksPage, LifecyclePage, PropsPage, ReduxPage, StatePage, VirtualDomPage};
use crate::routes::Page;

/// Page named by the URL: the hash wins, then the path
fn location_page() -> Page {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Page::Home;
    };
    match location.hash() {
        Ok(hash) if !hash.is_empty() && hash != "#" => Page::from_hash(&hash),
        _ => Page::from_path(&location.pathname().unwrap_or_default()),
    }
}

fn set_location_hash(page: Page) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&page.hash()) {
            tracing::warn!(?e, "could not update location hash");
        }
    }
}

#[component]
pub fn App(config: SiteConfig, store: FavoritesStore) -> impl IntoView {
    // State
    let (current_page, set_current_page) = signal(location_page());

    let navigate = Callback::new(move |page: Page| {
        if current_page.get_untracked() != page {
            tracing::debug!(path = page.path(), "navigate");
            set_current_page.set(page);
        }
        set_location_hash(page);
    });

    // Back/forward buttons and hand-edited URLs. Lives as long as the app.
    let _ = window_event_listener(ev::hashchange, move |_| {
        let page = location_page();
        if current_page.get_untracked() != page {
            set_current_page.set(page);
        }
    });

    view! {
        <div class="site">
            <NavBar current_page=current_page on_navigate=navigate />

            <main class="page">
                {move || match current_page.get() {
                    Page::Home => view! { <HomePage on_navigate=navigate /> }.into_any(),
                    Page::Props => view! { <PropsPage /> }.into_any(),
                    Page::State => view! { <StatePage /> }.into_any(),
                    Page::Lifecycle => view! { <LifecyclePage delay_ms=config.loading_delay_ms /> }.into_any(),
                    Page::Hooks => view! {
                        <HooksPage tick_ms=config.clock_tick_ms zones=config.zones.clone() />
                    }.into_any(),
                    Page::VirtualDom => view! { <VirtualDomPage /> }.into_any(),
                    Page::Redux => view! { <ReduxPage store=store.clone() /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
