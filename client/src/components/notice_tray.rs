//! Toast tray for action outcomes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared `NoticeState` from context. Each notice dismisses itself
//! after `NOTICE_TIMEOUT_MS` or when the user closes it.

use leptos::prelude::*;

use crate::state::notices::NoticeState;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let last_scheduled = StoredValue::new(0_u64);

    Effect::new(move || {
        let fresh: Vec<u64> = notices.with(|n| {
            n.notices
                .iter()
                .map(|notice| notice.id)
                .filter(|id| *id > last_scheduled.get_value())
                .collect()
        });
        for id in fresh {
            last_scheduled.set_value(id);
            schedule_dismiss(notices, id);
        }
    });

    view! {
        <div class="notice-tray" aria-live="polite">
            <For
                each=move || notices.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.kind.css_modifier()) role="status">
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(notices: RwSignal<NoticeState>, id: u64) {
    leptos::task::spawn_local(async move {
        let timeout = std::time::Duration::from_millis(crate::state::notices::NOTICE_TIMEOUT_MS);
        gloo_timers::future::sleep(timeout).await;
        notices.update(|n| n.dismiss(id));
    });
}

#[cfg(not(feature = "hydrate"))]
fn schedule_dismiss(_notices: RwSignal<NoticeState>, _id: u64) {}
