//! Modal for picking a new date and time for an appointment.

use leptos::prelude::*;

use crate::state::appointments::{AppointmentsState, RescheduleDraft};
use crate::util::dates::today_iso;

/// Edits `state.reschedule` in place; the page submits or closes it.
#[component]
pub fn RescheduleDialog(
    state: RwSignal<AppointmentsState>,
    busy: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let min_date = today_iso();
    let field = move |pick: fn(&RescheduleDraft) -> String| {
        move || state.with(|s| s.reschedule.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Reschedule appointment"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "New date"
                        <input
                            class="dialog__input"
                            type="date"
                            required
                            min=min_date
                            prop:value=field(|d| d.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.edit_reschedule(|d| d.date = value));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "New time"
                        <input
                            class="dialog__input"
                            type="time"
                            required
                            prop:value=field(|d| d.time.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.edit_reschedule(|d| d.time = value));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Reason"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            placeholder="Why are you rescheduling?"
                            prop:value=field(|d| d.reason.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.edit_reschedule(|d| d.reason = value));
                            }
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Reschedule" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
