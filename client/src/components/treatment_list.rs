//! Editable list of prior treatments on the booking form.

use leptos::prelude::*;

#[component]
pub fn TreatmentList(
    items: Signal<Vec<String>>,
    input: Signal<String>,
    on_input: Callback<String>,
    on_add: Callback<()>,
    on_remove: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="treatment-list">
            <div class="treatment-list__entry">
                <input
                    class="form-input"
                    type="text"
                    placeholder="e.g. Antibiotics in March"
                    prop:value=move || input.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_add.run(());
                        }
                    }
                />
                <button class="btn" type="button" on:click=move |_| on_add.run(())>
                    "Add"
                </button>
            </div>
            <ul class="treatment-list__items">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <li class="treatment-list__item">
                                    <span>{item}</span>
                                    <button
                                        class="treatment-list__remove"
                                        type="button"
                                        title="Remove"
                                        aria-label="Remove treatment"
                                        on:click=move |_| on_remove.run(index)
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
