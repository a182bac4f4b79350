//! Virtual DOM Page
//!
//! Counter that shows how often its view is rebuilt.

use leptos::prelude::*;

use crate::components::PageCopy;
use crate::counter::RenderTally;

const COPY: &str = r#"
El **Virtual DOM** es una representación en memoria del DOM real. En lugar de
manipular directamente el DOM del navegador, el framework trabaja con esta copia
ligera.

El proceso tiene tres fases:

1. **Representación virtual**: se crean estructuras que describen la interfaz.
2. **Reconciliación**: cuando cambia el estado, se compara el árbol nuevo con el
   anterior (*diffing*).
3. **Actualización selectiva**: solo se tocan los nodos que realmente cambiaron.
"#;

#[component]
pub fn VirtualDomPage() -> impl IntoView {
    let tally = StoredValue::new(RenderTally::default());
    let (count, set_count) = signal(0u32);

    let increment = move |_| {
        tally.update_value(|t| t.increment());
        set_count.set(tally.with_value(|t| t.count));
    };

    view! {
        <section class="virtual-dom-container">
            <h1 class="page-title">"Virtual DOM"</h1>
            <PageCopy markdown=COPY />

            <div class="example-section">
                <p class="example-intro">
                    "Cada vez que cambias el estado, el contador vuelve a construir su vista."
                </p>

                <div class="counter-widget">
                    {move || {
                        let count = count.get();
                        let renders = tally.try_update_value(|t| t.record_render()).unwrap_or_default();
                        view! {
                            <div class="render-info">
                                <p class="render-text">
                                    "Este componente se ha renderizado: "
                                    <span class="render-count">{renders}</span>
                                    " veces"
                                </p>
                            </div>
                            <div class="count-display">
                                <span class="count-label">"Contador actual: "</span>
                                <span class="count-value">{count}</span>
                            </div>
                        }
                    }}
                    <button class="increment-button" on:click=increment>
                        "Incrementar contador"
                    </button>
                </div>
            </div>
        </section>
    }
}
