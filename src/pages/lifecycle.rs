//! Lifecycle Page
//!
//! Simulated data load. The timer is owned by the page and released when the
//! page is torn down.

use leptos::prelude::*;

use crate::components::PageCopy;
use crate::lifecycle::{button_label, status_text, LoadingSimulation};
use crate::timer::BrowserScheduler;

const COPY: &str = r#"
El **ciclo de vida** describe las fases por las que pasa un componente: montaje,
actualización y desmontaje.

Los efectos permiten ejecutar código en esas fases. Un efecto que crea un
temporizador debe **limpiarlo** al desmontarse, para que nunca se ejecute sobre una
vista que ya no existe.
"#;

#[component]
pub fn LifecyclePage(delay_ms: u32) -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let simulation = StoredValue::new_local(LoadingSimulation::new(BrowserScheduler, delay_ms));

    let toggle = move |_| {
        let now_loading = simulation
            .try_update_value(|sim| sim.toggle(move || set_loading.set(false)))
            .unwrap_or(false);
        set_loading.set(now_loading);
    };

    on_cleanup(move || {
        simulation.try_update_value(|sim| sim.close());
    });

    let seconds = f64::from(delay_ms) / 1000.0;

    view! {
        <section class="lifecycle-container">
            <h1 class="page-title">"Ciclo de Vida de un Componente"</h1>
            <PageCopy markdown=COPY />

            <div class="example-section">
                <p class="example-intro">
                    {format!("Al iniciar la carga se simula una espera de {} segundos. ", seconds)}
                    "Si cancelas la carga, el temporizador se limpia para evitar efectos secundarios."
                </p>

                <button class="load-button" on:click=toggle>
                    {move || button_label(loading.get())}
                </button>

                <div class="load-status">
                    <p>{move || status_text(loading.get())}</p>
                </div>
            </div>
        </section>
    }
}
