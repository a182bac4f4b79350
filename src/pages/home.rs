//! Home Page
//!
//! Introduction and one card per concept page.

use leptos::prelude::*;

use crate::components::PageCopy;
use crate::routes::Page;

const INTRO: &str = r#"
Este proyecto presenta los conceptos fundamentales de las interfaces basadas en
componentes de forma práctica. Cada página se centra en un concepto, con una
definición clara y un pequeño ejemplo interactivo.

Las páginas cubren desde lo básico (**props** y **estado**) hasta técnicas como los
**efectos**, el **Virtual DOM** y la gestión de estado global con **Redux**.
"#;

#[component]
pub fn HomePage(#[prop(into)] on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <section class="home-container">
            <h1 class="main-title">"Conceptos Fundamentales de Interfaces"</h1>
            <PageCopy markdown=INTRO />
            <div class="features-grid">
                {Page::ALL.into_iter().filter_map(|page| page.card().map(|card| (page, card))).map(|(page, card)| {
                    view! {
                        <a
                            class="feature-card"
                            href=page.hash()
                            on:click=move |ev| {
                                ev.prevent_default();
                                on_navigate.run(page);
                            }
                        >
                            <div class="feature-icon">{card.icon}</div>
                            <h3 class="feature-title">{card.title}</h3>
                            <p class="feature-text">{card.text}</p>
                        </a>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
