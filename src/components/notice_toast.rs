//! Toast region for transient notices.

use leptos::prelude::*;

use crate::state::notice::NoticeState;
#[cfg(feature = "hydrate")]
use crate::state::notice::NOTICE_DURATION_MS;

/// Clear notice `seq` once its display time has elapsed.
pub fn dismiss_later(notice: RwSignal<NoticeState>, seq: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_DURATION_MS))).await;
        let _ = notice.try_update(|n| n.dismiss(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (notice, seq);
}

/// Renders the current notice, if any.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    move || {
        notice
            .get()
            .message
            .map(|message| view! { <div class="toast" role="status">{message}</div> })
    }
}
