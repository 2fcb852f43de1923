//! Account registration page.
//!
//! Field errors appear once a field has been touched. Submitting an invalid
//! form touches every field so all problems show at once.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions::registration::{apply_registration, prepare_registration, submit_registration};
use crate::app::AppServices;
use crate::state::notices::NoticeState;
use crate::state::registration::{Field, RegistrationForm};

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Password => "password",
        Field::FullName | Field::Username => "text",
    }
}

fn autocomplete(field: Field) -> &'static str {
    match field {
        Field::FullName => "name",
        Field::Username => "username",
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Password => "new-password",
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(RegistrationForm::default());
    let api = services.api;

    let navigate = use_navigate();
    Effect::new(move || {
        if form.with(|f| f.registered) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(account) = form.try_update(prepare_registration).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = submit_registration(&*api, &account).await;
            form.update(|f| notices.update(|n| apply_registration(&result, f, n)));
        });
    };

    let submitting = move || form.with(|f| f.submitting);

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="form" novalidate on:submit=on_submit>
                    {Field::ALL
                        .into_iter()
                        .map(|field| {
                            let id = format!("register-{}", autocomplete(field));
                            view! {
                                <div class="form-row">
                                    <label class="form-label" for=id.clone()>{field.label()}</label>
                                    <input
                                        id=id
                                        class="form-input"
                                        class:form-input--invalid=move || {
                                            form.with(|f| f.visible_error(field).is_some())
                                        }
                                        type=input_type(field)
                                        autocomplete=autocomplete(field)
                                        prop:value=move || form.with(|f| f.value(field).to_owned())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| f.set(field, value));
                                        }
                                        on:blur=move |_| form.update(|f| f.touch(field))
                                    />
                                    {move || {
                                        form.with(|f| f.visible_error(field))
                                            .map(|message| view! { <p class="form-field-error">{message}</p> })
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}

                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="form-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>

                    <button class="btn btn--primary btn--block" type="submit" disabled=submitting>
                        {move || if submitting() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </section>
    }
}
