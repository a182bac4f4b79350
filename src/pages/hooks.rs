//! Hooks Page
//!
//! Clock refreshed by a repeating timer, with a time-zone selector.

use chrono::Utc;
use leptos::prelude::*;

use crate::clock::{display_time, Ticker};
use crate::components::PageCopy;
use crate::config::ZoneOption;
use crate::timer::BrowserScheduler;

const COPY: &str = r#"
Los **hooks** permiten usar estado y otros mecanismos en componentes funcionales:
uno maneja el estado local y otro controla los **efectos secundarios**, como
suscripciones o temporizadores.

En este reloj el tiempo se actualiza cada segundo y puedes cambiar la zona horaria
para ver la hora en distintas regiones.
"#;

#[component]
pub fn HooksPage(tick_ms: u32, zones: Vec<ZoneOption>) -> impl IntoView {
    let (now, set_now) = signal(Utc::now());
    let (zone, set_zone) = signal::<Option<String>>(None);

    let ticker = StoredValue::new_local(Ticker::start(&BrowserScheduler, tick_ms, move || {
        set_now.set(Utc::now())
    }));
    on_cleanup(move || {
        ticker.try_update_value(|ticker| ticker.close());
    });

    let formatted = move || {
        let instant = now.get();
        zone.with(|zone| display_time(instant, zone.as_deref()))
    };

    view! {
        <section class="hooks-container">
            <h1 class="page-title">"Hooks"</h1>
            <PageCopy markdown=COPY />

            <div class="example-section">
                <select
                    class="zone-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        tracing::debug!(zone = %value, "time zone selected");
                        set_zone.set((!value.is_empty()).then_some(value));
                    }
                >
                    {zones.into_iter().map(|option| {
                        view! {
                            <option value=option.zone.unwrap_or_default()>{option.label}</option>
                        }
                    }).collect_view()}
                </select>

                <h2 class="clock-display">"Hora actual: "{formatted}</h2>
            </div>
        </section>
    }
}
