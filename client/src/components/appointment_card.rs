//! Card for one appointment in the "my appointments" list.
//!
//! DESIGN
//! ======
//! Which buttons appear is decided by `AvailableActions::for_status`, so the
//! status-to-action table lives in one tested place.

use leptos::prelude::*;

use crate::config::DisplayLocale;
use crate::net::types::Appointment;
use crate::state::appointments::{AvailableActions, status_class};
use crate::util::dates::{format_date, format_date_time, short_time};

#[component]
pub fn AppointmentCard(
    appointment: Appointment,
    locale: DisplayLocale,
    busy: Signal<bool>,
    on_confirm: Callback<i64>,
    on_cancel: Callback<i64>,
    on_reschedule: Callback<Appointment>,
) -> impl IntoView {
    let actions = AvailableActions::for_status(appointment.status);
    let badge_class = format!("status-badge {}", status_class(appointment.status));
    let status_label = appointment.status.map_or("Unknown", |s| s.label());
    let date = format_date(&appointment.date, locale);
    let time = short_time(&appointment.time).to_owned();
    let created = appointment.created_at.as_deref().map(|raw| format_date_time(raw, locale));
    let id = appointment.id;
    let treatments = appointment.prior_treatments.clone();
    let details = [
        ("Reason", appointment.reason.clone()),
        ("Symptoms", appointment.symptoms.clone()),
        ("Prior diagnosis", appointment.prior_diagnosis.clone()),
        ("Notes", appointment.notes.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (label, v)))
    .collect::<Vec<_>>();

    view! {
        <article class="appointment-card">
            <header class="appointment-card__header">
                <div>
                    <span class="appointment-card__date">{date}</span>
                    <span class="appointment-card__time">{time}</span>
                </div>
                <span class=badge_class>{status_label}</span>
            </header>
            <dl class="appointment-card__details">
                {details
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect::<Vec<_>>()}
            </dl>
            {(!treatments.is_empty())
                .then(|| {
                    view! {
                        <ul class="appointment-card__treatments">
                            {treatments.into_iter().map(|t| view! { <li>{t}</li> }).collect::<Vec<_>>()}
                        </ul>
                    }
                })}
            {created.map(|c| view! { <p class="appointment-card__created">"Booked " {c}</p> })}
            {id.map(move |id| {
                view! {
                    <footer class="appointment-card__actions">
                        <Show when=move || actions.confirm>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| on_confirm.run(id)
                            >
                                "Confirm"
                            </button>
                        </Show>
                        <Show when=move || actions.reschedule>
                            <button
                                class="btn"
                                disabled=move || busy.get()
                                on:click={
                                    let appointment = appointment.clone();
                                    move |_| on_reschedule.run(appointment.clone())
                                }
                            >
                                "Reschedule"
                            </button>
                        </Show>
                        <Show when=move || actions.cancel>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| on_cancel.run(id)
                            >
                                "Cancel"
                            </button>
                        </Show>
                    </footer>
                }
            })}
        </article>
    }
}
