//! Conceptos UI Frontend Entry Point

use conceptos_ui::app::App;
use conceptos_ui::config::SiteConfig;
use favorites_store::FavoritesStore;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = SiteConfig::load();
    // The one favorites store, handed to the pages that need it
    let store = FavoritesStore::new();
    tracing::info!(?config, "mounting site");

    mount_to_body(move || view! { <App config=config store=store /> });
}
