//! Sign-in landing page.
//!
//! Authentication is handled by the clinic backend; the client runs with the
//! configured client id, so this page only routes the user onward.

use leptos::prelude::*;

use crate::app::AppServices;

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let client_id = services.config.client_id;

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">
                    {format!("Signed in as client #{client_id}.")}
                </p>
                <div class="form-actions">
                    <a class="btn btn--primary" href="/mis-citas">"Go to my appointments"</a>
                    <a class="btn" href="/citas/agendar">"Book appointment"</a>
                </div>
                <p class="auth-card__footer">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </section>
    }
}
