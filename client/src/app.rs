//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::notice_tray::NoticeTray;
use crate::config::ClientConfig;
use crate::net::api::{HttpClinicApi, SharedApi};
use crate::pages::{
    book_appointment::BookAppointmentPage, login::LoginPage, my_appointments::MyAppointmentsPage,
    register::RegisterPage,
};
use crate::reference::{SharedReferenceSource, source_for};
use crate::session::Session;
use crate::state::notices::NoticeState;

/// Collaborators shared by every page.
#[derive(Clone)]
pub struct AppServices {
    pub api: SharedApi,
    pub reference: SharedReferenceSource,
    pub config: ClientConfig,
}

impl AppServices {
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        let api: SharedApi = Arc::new(HttpClinicApi::new(&config.api_base_url));
        let reference = source_for(config.reference_data, api.clone());
        Self { api, reference, config }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds configuration, the session, and backend collaborators, provides
/// them as context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        warn!("invalid client configuration, using defaults: {e}");
        ClientConfig::default()
    });
    let session = Session::from_config(&config);
    provide_context(AppServices::from_config(config));
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic.css"/>
        <Title text="Veterinary Clinic"/>

        <Router>
            <nav class="app-nav">
                <a class="app-nav__brand" href="/mis-citas">"Veterinary Clinic"</a>
                <a class="app-nav__link" href="/mis-citas">"My appointments"</a>
                <a class="app-nav__link" href="/citas/agendar">"Book appointment"</a>
                <a class="app-nav__link" href="/register">"Register"</a>
            </nav>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/mis-citas"/> }/>
                    <Route
                        path=StaticSegment("mis-citas")
                        view=move || view! { <MyAppointmentsPage session=session/> }
                    />
                    <Route
                        path=(StaticSegment("citas"), StaticSegment("agendar"))
                        view=move || view! { <BookAppointmentPage session=session/> }
                    />
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
            <NoticeTray/>
        </Router>
    }
}
