//! Props Page
//!
//! Temperature converter: the page owns the state and hands each field its
//! value plus a change callback.

use leptos::prelude::*;

use crate::components::{PageCopy, TemperatureField};
use crate::temperature::{Scale, TemperatureInput};

const COPY: &str = r#"
Las **props** (propiedades) son el mecanismo con el que un componente padre pasa
datos a sus hijos, igual que una función recibe parámetros.

Son **inmutables** desde la perspectiva del hijo: un hijo no modifica lo que recibe,
lo que garantiza un flujo de datos %b%unidireccional%b% y predecible.

Cuando se pasan funciones como props, el hijo puede avisar al padre de un cambio.
Este patrón se conoce como *elevar el estado*.
"#;

#[component]
pub fn PropsPage() -> impl IntoView {
    let (input, set_input) = signal(TemperatureInput::default());

    let field = move |scale: Scale| Signal::derive(move || input.with(|i| i.field(scale)));
    let celsius = field(Scale::Celsius);
    let fahrenheit = field(Scale::Fahrenheit);

    let on_celsius = Callback::new(move |value: String| {
        set_input.set(TemperatureInput::new(value, Scale::Celsius));
    });
    let on_fahrenheit = Callback::new(move |value: String| {
        set_input.set(TemperatureInput::new(value, Scale::Fahrenheit));
    });

    view! {
        <section class="props-container">
            <h1 class="page-title">"Props (Propiedades)"</h1>
            <PageCopy markdown=COPY />

            <div class="example-section">
                <p class="example-intro">
                    "En este conversor el componente padre maneja todo el estado y pasa los "
                    "valores y funciones de actualización como props a cada campo."
                </p>

                <div class="converter-widget">
                    <TemperatureField scale=Scale::Celsius value=celsius on_change=on_celsius />
                    <TemperatureField scale=Scale::Fahrenheit value=fahrenheit on_change=on_fahrenheit />

                    <div class="conversion-result">
                        <p class="result-text">
                            "Conversión actual: "
                            <span class="temperature-value">{move || input.with(TemperatureInput::summary)}</span>
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
