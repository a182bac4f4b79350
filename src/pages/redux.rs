//! Redux Page
//!
//! Favorites list backed by the global store. The page subscribes while it is
//! mounted and only ever changes the list through `dispatch`.

use favorites_store::{select_count, select_favorites, FavoritesAction, FavoritesState, FavoritesStore};
use leptos::prelude::*;

use crate::components::PageCopy;

const COPY: &str = r#"
**Redux** centraliza el estado de la aplicación en un único *store*, de modo que
cualquier componente puede leerlo sin pasar props a través de muchos niveles.

Se basa en tres piezas:

- **Store**: guarda el estado global; permite leerlo, despachar acciones y
  suscribirse a los cambios.
- **Actions**: describen %p%qué%p% ocurrió.
- **Reducers**: funciones puras que calculan el nuevo estado a partir del anterior.

```rust
fn reduce(state: &FavoritesState, action: FavoritesAction) -> FavoritesState {
    match action {
        FavoritesAction::Add(item) => /* añadir al final */,
        FavoritesAction::Remove(item) => /* quitar cada aparición */,
    }
}
```
"#;

#[component]
pub fn ReduxPage(store: FavoritesStore) -> impl IntoView {
    let (state, set_state) = signal(FavoritesState::clone(&store.get_state()));
    let subscription = store.subscribe(move |next| set_state.set(next.clone()));
    on_cleanup(move || subscription.unsubscribe());

    let store = StoredValue::new(store);
    let (draft, set_draft) = signal(String::new());

    let add_favorite = move || {
        let text = draft.get_untracked();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        store.with_value(|s| s.dispatch(FavoritesAction::Add(text.to_string())));
        set_draft.set(String::new());
    };
    let remove_favorite = move |item: String| {
        store.with_value(|s| s.dispatch(FavoritesAction::Remove(item)));
    };

    let entries = move || {
        state.with(|s| {
            select_favorites(s)
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="redux-container">
            <h1 class="page-title">"Redux: Gestión de Estado Global"</h1>
            <PageCopy markdown=COPY />

            <div class="example-section">
                <p class="example-intro">
                    "La lista de favoritos vive en el store global: sigue ahí aunque cambies de página."
                </p>

                <div class="favorites-widget">
                    <div class="input-section">
                        <input
                            type="text"
                            class="favorite-input"
                            placeholder="Nuevo favorito (ej: Pizza, Libros, Viajar...)"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    add_favorite();
                                }
                            }
                        />
                        <button
                            class="add-button"
                            disabled=move || draft.with(|d| d.trim().is_empty())
                            on:click=move |_| add_favorite()
                        >
                            "Añadir"
                        </button>
                    </div>

                    <div class="favorites-list">
                        <h3 class="list-title">
                            {move || format!("Mis Favoritos ({})", state.with(select_count))}
                        </h3>
                        <Show
                            when=move || state.with(|s| !s.is_empty())
                            fallback=|| view! {
                                <div class="empty-state">
                                    <p>"No hay favoritos aún. ¡Añade tu primer elemento!"</p>
                                </div>
                            }
                        >
                            <ul class="favorites-items">
                                <For
                                    each=entries
                                    key=|entry| entry.clone()
                                    children=move |(_, item): (usize, String)| {
                                        let target = item.clone();
                                        view! {
                                            <li class="favorite-item">
                                                <span class="favorite-text">{item}</span>
                                                <button
                                                    class="remove-button"
                                                    title="Eliminar favorito"
                                                    on:click=move |_| remove_favorite(target.clone())
                                                >
                                                    "✕"
                                                </button>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
