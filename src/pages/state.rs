//! State Page
//!
//! To-do list kept in local component state.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::PageCopy;
use crate::todo::{
    filter_tasks, store_add_draft, store_delete_task, store_toggle_task, Task, TaskFilter, TaskStats,
    TodoBoard, TodoBoardStoreFields, TodoStore,
};

const COPY: &str = r#"
El **estado** permite a un componente guardar datos que cambian con el tiempo. A
diferencia de las props, el estado es local y lo controla el propio componente.

Cuando el estado cambia, la interfaz se vuelve a pintar para reflejar los nuevos
datos. El estado se trata como **inmutable**: en lugar de modificar una lista se
crea una nueva con el cambio aplicado.
"#;

fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

#[component]
pub fn StatePage() -> impl IntoView {
    let board: TodoStore = Store::new(TodoBoard::default());

    let add = move || store_add_draft(&board, now_ms());
    let visible = move || {
        let filter = board.filter().get();
        board.tasks().with(|tasks| filter_tasks(tasks, filter))
    };
    let stats = move || board.tasks().with(|tasks| TaskStats::of(tasks));

    view! {
        <section class="state-container">
            <h1 class="page-title">"Estados (State)"</h1>
            <PageCopy markdown=COPY />

            <div class="example-section">
                <p class="example-intro">
                    "Una lista de tareas que usa estado para guardarlas, marcarlas, filtrarlas y eliminarlas."
                </p>

                <div class="task-manager">
                    <div class="input-section">
                        <input
                            type="text"
                            class="task-input"
                            placeholder="Nueva tarea"
                            prop:value=move || board.draft().get()
                            on:input=move |ev| {
                                *board.draft().write() = event_target_value(&ev);
                            }
                        />
                        <button class="add-button" on:click=move |_| add()>"Añadir"</button>
                    </div>

                    <div class="filter-section">
                        {TaskFilter::ALL.into_iter().map(|filter| {
                            let selected = move || board.filter().get() == filter;
                            view! {
                                <button
                                    class=move || if selected() { "filter-button active" } else { "filter-button" }
                                    disabled=selected
                                    on:click=move |_| {
                                        *board.filter().write() = filter;
                                    }
                                >
                                    {filter.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <ul class="task-list">
                        <Show when=move || visible().is_empty()>
                            <li class="no-tasks">"No hay tareas"</li>
                        </Show>
                        <For
                            each=visible
                            key=|task| (task.id, task.completed)
                            children=move |task: Task| {
                                let id = task.id;
                                view! {
                                    <li class="task-item">
                                        <input
                                            type="checkbox"
                                            class="task-checkbox"
                                            checked=task.completed
                                            on:change=move |_| store_toggle_task(&board, id)
                                        />
                                        <span class=if task.completed { "task-text completed" } else { "task-text" }>
                                            {task.text}
                                        </span>
                                        <button class="delete-button" on:click=move |_| store_delete_task(&board, id)>
                                            "Eliminar"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>

                    <div class="task-stats">
                        <span class="stat-item">
                            <strong>"Total tareas: "</strong>{move || stats().total}
                        </span>
                        <span class="stat-divider">"|"</span>
                        <span class="stat-item">
                            <strong>"Completadas: "</strong>{move || stats().completed}
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}
