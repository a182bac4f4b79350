use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <p class="footer-text">"© 2025 Conceptos Fundamentales de Interfaces"</p>
                <p class="footer-description">
                    "Este proyecto educativo presenta los conceptos esenciales de las interfaces "
                    "basadas en componentes a través de ejemplos prácticos."
                </p>
            </div>
        </footer>
    }
}
