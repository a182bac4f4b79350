//! Temperature Field Component
//!
//! Child of the converter: shows a value it does not own and reports edits
//! back through `on_change`.

use leptos::prelude::*;

use crate::temperature::Scale;

#[component]
pub fn TemperatureField(
    scale: Scale,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="temperature-input">
            <label class="temperature-label">
                {scale.label()}": "
                <input
                    type="number"
                    class="temperature-field"
                    placeholder="Ingresa la temperatura"
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            </label>
        </div>
    }
}
