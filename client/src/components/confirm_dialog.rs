//! In-app confirmation prompt.
//!
//! Replaces the browser's blocking `confirm()` so callers receive an explicit
//! [`Confirmation`] and nothing runs until the user answers.

use leptos::prelude::*;

use crate::actions::Confirmation;

/// Modal asking the user to confirm or decline an action.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    #[prop(default = "Confirm")] confirm_label: &'static str,
    #[prop(default = "Back")] decline_label: &'static str,
    #[prop(optional)] danger: bool,
    on_resolve: Callback<Confirmation>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_resolve.run(Confirmation::Declined)>
            <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message" class:dialog__danger=danger>
                    {message}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_resolve.run(Confirmation::Declined)>
                        {decline_label}
                    </button>
                    <button
                        class="btn"
                        class:btn--danger=danger
                        class:btn--primary=!danger
                        on:click=move |_| on_resolve.run(Confirmation::Confirmed)
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
