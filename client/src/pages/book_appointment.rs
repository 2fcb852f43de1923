//! Appointment booking page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reference lists load once on mount. Changing the date, time, or
//! veterinarian re-checks slot availability; how a failed check is treated
//! comes from `ClientConfig::availability_failure`. A successful booking or a
//! confirmed discard returns to the appointment list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions::booking::{
    DISCARD_PROMPT, apply_submit, check_availability, load_reference_data, prepare_booking, submit_booking,
};
use crate::actions::Confirmation;
use crate::app::AppServices;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::treatment_list::TreatmentList;
use crate::session::Session;
use crate::state::booking::{Availability, BookingForm, parse_selection};
use crate::state::notices::NoticeState;
use crate::util::dates::today_iso;

const LIST_ROUTE: &str = "/mis-citas";

#[component]
pub fn BookAppointmentPage(session: Session) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(BookingForm::new(session.client_id(), &today_iso()));
    let leave = RwSignal::new(false);
    let policy = services.config.availability_failure;
    let api = services.api;
    let reference = services.reference;

    Effect::new(move || {
        form.update(BookingForm::begin_reference_load);
        let reference = reference.clone();
        spawn_local(async move {
            let data = load_reference_data(&*reference, session).await;
            form.update(|f| f.apply_reference(data));
        });
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if form.with(|f| f.submitted) || leave.get() {
            navigate(LIST_ROUTE, NavigateOptions::default());
        }
    });

    let recheck = {
        let api = api.clone();
        move || {
            let Some(query) = form.with_untracked(BookingForm::availability_query) else {
                return;
            };
            let Some(ticket) = form.try_update(BookingForm::begin_availability_check) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                if let Some(result) = check_availability(&*api, Some(query), policy).await {
                    form.update(|f| {
                        f.apply_availability_if_current(ticket, result, policy);
                    });
                }
            });
        }
    };
    let recheck = StoredValue::new(recheck);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(draft) = form.try_update(prepare_booking).flatten() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let result = submit_booking(&*api, &draft).await;
                form.update(|f| notices.update(|n| apply_submit(&result, f, n)));
            });
        }
    };

    let on_discard_resolve = Callback::new(move |choice: Confirmation| {
        if form.try_update(|f| f.resolve_discard(choice)).unwrap_or(false) {
            leave.set(true);
        }
    });

    let treatments = Signal::derive(move || form.with(|f| f.treatments.clone()));
    let treatment_input = Signal::derive(move || form.with(|f| f.treatment_input.clone()));
    let on_treatment_input = Callback::new(move |value: String| form.update(|f| f.treatment_input = value));
    let on_treatment_add = Callback::new(move |()| form.update(BookingForm::add_treatment));
    let on_treatment_remove = Callback::new(move |index: usize| form.update(|f| f.remove_treatment(index)));

    let loading = move || form.with(|f| f.loading);
    let selection_value = |id: Option<i64>| id.map(|v| v.to_string()).unwrap_or_default();
    let availability_class = move || {
        let modifier = match form.with(|f| f.availability) {
            Availability::Available => "availability--ok",
            Availability::Unavailable => "availability--taken",
            Availability::Unverified => "availability--unknown",
        };
        format!("availability {modifier}")
    };

    view! {
        <section class="booking-page">
            <header class="page-header">
                <h1>"Book appointment"</h1>
            </header>

            <form class="form" on:submit=on_submit>
                <div class="form-row">
                    <label class="form-label" for="pet">"Pet"</label>
                    <select
                        id="pet"
                        class="form-input"
                        prop:value=move || selection_value(form.with(|f| f.pet_id))
                        on:change=move |ev| {
                            let id = parse_selection(&event_target_value(&ev));
                            form.update(|f| f.pet_id = id);
                        }
                    >
                        <option value="">"Select a pet"</option>
                        {move || {
                            form.with(|f| f.reference.pets.clone())
                                .into_iter()
                                .map(|pet| {
                                    let label = if pet.species.is_empty() {
                                        pet.name
                                    } else {
                                        format!("{} ({})", pet.name, pet.species)
                                    };
                                    view! { <option value=pet.id.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="form-row">
                    <label class="form-label" for="service">"Service"</label>
                    <select
                        id="service"
                        class="form-input"
                        prop:value=move || selection_value(form.with(|f| f.service_id))
                        on:change=move |ev| {
                            let id = parse_selection(&event_target_value(&ev));
                            form.update(|f| f.service_id = id);
                        }
                    >
                        <option value="">"Select a service"</option>
                        {move || {
                            form.with(|f| f.reference.services.clone())
                                .into_iter()
                                .map(|service| {
                                    view! { <option value=service.id.to_string()>{service.name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <div class="form-row form-row--split">
                    <div>
                        <label class="form-label" for="date">"Date"</label>
                        <input
                            id="date"
                            class="form-input"
                            type="date"
                            min=move || form.with(|f| f.min_date.clone())
                            prop:value=move || form.with(|f| f.date.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.date = value);
                                recheck.with_value(|check| check());
                            }
                        />
                    </div>
                    <div>
                        <label class="form-label" for="time">"Time"</label>
                        <input
                            id="time"
                            class="form-input"
                            type="time"
                            prop:value=move || form.with(|f| f.time.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.time = value);
                                recheck.with_value(|check| check());
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <label class="form-label" for="staff">"Veterinarian (optional)"</label>
                    <select
                        id="staff"
                        class="form-input"
                        prop:value=move || selection_value(form.with(|f| f.staff_id))
                        on:change=move |ev| {
                            let id = parse_selection(&event_target_value(&ev));
                            form.update(|f| f.staff_id = id);
                            recheck.with_value(|check| check());
                        }
                    >
                        <option value="">"Any veterinarian"</option>
                        {move || {
                            form.with(|f| f.reference.veterinarians.clone())
                                .into_iter()
                                .map(|vet| {
                                    let label = if vet.specialty.is_empty() {
                                        vet.name
                                    } else {
                                        format!("{} - {}", vet.name, vet.specialty)
                                    };
                                    view! { <option value=vet.id.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>

                <p class=availability_class>
                    {move || {
                        form.with(|f| {
                            if f.checking_availability {
                                "Checking availability...".to_owned()
                            } else {
                                f.availability_message.clone()
                            }
                        })
                    }}
                </p>

                <div class="form-row">
                    <label class="form-label" for="reason">"Reason for visit"</label>
                    <textarea
                        id="reason"
                        class="form-input"
                        rows="2"
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.reason = value);
                        }
                    ></textarea>
                </div>

                <div class="form-row">
                    <label class="form-label" for="symptoms">"Symptoms"</label>
                    <textarea
                        id="symptoms"
                        class="form-input"
                        rows="2"
                        prop:value=move || form.with(|f| f.symptoms.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.symptoms = value);
                        }
                    ></textarea>
                </div>

                <div class="form-row">
                    <label class="form-label" for="diagnosis">"Prior diagnosis"</label>
                    <input
                        id="diagnosis"
                        class="form-input"
                        type="text"
                        prop:value=move || form.with(|f| f.prior_diagnosis.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.prior_diagnosis = value);
                        }
                    />
                </div>

                <div class="form-row">
                    <span class="form-label">"Prior treatments"</span>
                    <TreatmentList
                        items=treatments
                        input=treatment_input
                        on_input=on_treatment_input
                        on_add=on_treatment_add
                        on_remove=on_treatment_remove
                    />
                </div>

                <div class="form-row">
                    <label class="form-label" for="notes">"Additional notes"</label>
                    <textarea
                        id="notes"
                        class="form-input"
                        rows="2"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.notes = value);
                        }
                    ></textarea>
                </div>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>

                <div class="form-actions">
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| form.update(BookingForm::request_discard)
                    >
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=loading>
                        {move || if loading() { "Booking..." } else { "Book appointment" }}
                    </button>
                </div>
            </form>

            <Show when=move || form.with(|f| f.discard_requested)>
                <ConfirmDialog
                    title="Discard booking"
                    message=DISCARD_PROMPT
                    confirm_label="Discard"
                    danger=true
                    on_resolve=on_discard_resolve
                />
            </Show>
        </section>
    }
}
