//! "My appointments" page: list, filter, confirm, cancel, reschedule.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `estado` query parameter seeds the status filter and is re-read
//! whenever it changes. The dropdown narrows the loaded list locally. Every
//! mutating action refetches the whole list when it succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::actions::Confirmation;
use crate::actions::appointments::{
    ActionOutcome, CANCEL_PROMPT, cancel_appointment, confirm_appointment, load_appointments, reschedule_appointment,
};
use crate::app::AppServices;
use crate::components::appointment_card::AppointmentCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::reschedule_dialog::RescheduleDialog;
use crate::net::types::Appointment;
use crate::session::Session;
use crate::state::appointments::{AppointmentsState, RescheduleDraft, StatusFilter};
use crate::state::notices::NoticeState;

#[component]
pub fn MyAppointmentsPage(session: Session) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let state = RwSignal::new(AppointmentsState::default());
    let locale = services.config.locale;
    let api = services.api;

    let query = use_query_map();
    Effect::new(move || {
        let raw = query.with(|q| q.get(StatusFilter::QUERY_KEY));
        state.update(|s| s.set_filter(StatusFilter::from_query(raw.as_deref())));
    });

    let reload = {
        let api = api.clone();
        move || {
            state.update(AppointmentsState::begin_load);
            let api = api.clone();
            spawn_local(async move {
                let result = load_appointments(&*api, session).await;
                state.update(|s| s.apply_load(result));
            });
        }
    };
    Effect::new(move || reload());

    let apply = move |outcome: ActionOutcome| {
        state.update(|s| notices.update(|n| outcome.apply(s, n)));
    };

    let on_confirm = Callback::new({
        let api = api.clone();
        move |id: i64| {
            state.update(AppointmentsState::begin_action);
            let api = api.clone();
            spawn_local(async move { apply(confirm_appointment(&*api, session, id).await) });
        }
    });

    let on_cancel_request = Callback::new(move |id: i64| state.update(|s| s.request_cancel(id)));
    let on_cancel_resolve = Callback::new({
        let api = api.clone();
        move |choice: Confirmation| {
            let target = state.try_update(AppointmentsState::take_pending_cancel).flatten();
            if choice == Confirmation::Confirmed && target.is_some() {
                state.update(AppointmentsState::begin_action);
            }
            let api = api.clone();
            spawn_local(async move { apply(cancel_appointment(&*api, session, target, choice).await) });
        }
    });

    let on_reschedule_open = Callback::new(move |appointment: Appointment| {
        state.update(|s| s.open_reschedule(&appointment));
    });
    let on_reschedule_close = Callback::new(move |()| state.update(AppointmentsState::close_reschedule));
    let on_reschedule_submit = Callback::new({
        let api = api.clone();
        move |()| {
            let draft = state.with_untracked(|s| s.reschedule.clone());
            if draft.as_ref().and_then(RescheduleDraft::request).is_some() {
                state.update(AppointmentsState::begin_action);
            }
            let api = api.clone();
            spawn_local(async move { apply(reschedule_appointment(&*api, session, draft).await) });
        }
    });

    let busy = Signal::derive(move || state.with(|s| s.loading));
    let visible = move || state.with(|s| s.visible.clone());
    let selected_filter = move || state.with(|s| s.filter.as_query_value());

    view! {
        <section class="appointments-page">
            <header class="page-header">
                <h1>"My appointments"</h1>
                <a class="btn btn--primary" href="/citas/agendar">"Book appointment"</a>
            </header>

            <div class="appointments-page__toolbar">
                <label class="form-label" for="status-filter">"Status"</label>
                <select
                    id="status-filter"
                    class="form-input"
                    prop:value=selected_filter
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.set_filter(StatusFilter::from_query(Some(value.as_str()))));
                    }
                >
                    {StatusFilter::OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.as_query_value()>
                                    {move || state.with(|s| s.filter_option_label(option))}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <span class="appointments-page__count">
                    {move || {
                        let s = state.get();
                        format!("{} of {}", s.visible.len(), s.appointments.len())
                    }}
                </span>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !(busy.get() && state.with(|s| s.appointments.is_empty()))
                fallback=|| view! { <p class="appointments-page__loading">"Loading appointments..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! { <p class="appointments-page__empty">"No appointments to show."</p> }
                >
                    <div class="appointments-page__list">
                        <For
                            each=visible
                            key=|a| (a.id, a.status, a.date.clone(), a.time.clone())
                            children=move |appointment| {
                                view! {
                                    <AppointmentCard
                                        appointment=appointment
                                        locale=locale
                                        busy=busy
                                        on_confirm=on_confirm
                                        on_cancel=on_cancel_request
                                        on_reschedule=on_reschedule_open
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || state.with(|s| s.reschedule.is_some())>
                <RescheduleDialog
                    state=state
                    busy=busy
                    on_submit=on_reschedule_submit
                    on_close=on_reschedule_close
                />
            </Show>
            <Show when=move || state.with(|s| s.pending_cancel.is_some())>
                <ConfirmDialog
                    title="Cancel appointment"
                    message=CANCEL_PROMPT
                    confirm_label="Cancel appointment"
                    danger=true
                    on_resolve=on_cancel_resolve
                />
            </Show>
        </section>
    }
}
