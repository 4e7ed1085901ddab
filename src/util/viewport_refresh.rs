//! Debounced viewport refetch.
//!
//! Panning and zooming change the camera many times per second; issuing a
//! network query on every intermediate frame would flood the server. Each
//! camera change bumps the view's refresh epoch and schedules a delayed
//! refetch; when the delay elapses, only the most recently scheduled
//! epoch is still current and actually queries (last-scheduled-wins).
//! Teardown bumps the epoch once more, leaving any pending timer inert.

use leptos::prelude::RwSignal;

#[cfg(feature = "hydrate")]
use crate::net::repository;
#[cfg(feature = "hydrate")]
use crate::state::scene::SceneState;
use crate::state::view::ViewState;

/// Quiet period after the last transform change before refetching.
pub const VIEWPORT_DEBOUNCE_MS: u64 = 300;

/// Schedule a debounced refetch of the objects in the current viewport.
#[cfg(feature = "hydrate")]
pub fn schedule_viewport_refresh(view: RwSignal<ViewState>, scene: RwSignal<SceneState>) {
    use leptos::prelude::{Update, WithUntracked};

    let mut epoch = 0;
    view.update(|v| epoch = v.bump_refresh_epoch());

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(VIEWPORT_DEBOUNCE_MS)).await;
        let (current, bounds) = view.with_untracked(|v| (v.refresh_epoch, v.bounds()));
        if current != epoch {
            // A newer transform change superseded this timer.
            return;
        }
        repository::refresh_viewport(scene, bounds).await;
    });
}

/// Refetch immediately, invalidating any scheduled debounce first.
#[cfg(feature = "hydrate")]
pub fn refresh_viewport_now(view: RwSignal<ViewState>, scene: RwSignal<SceneState>) {
    use leptos::prelude::{Update, WithUntracked};

    view.update(|v| {
        v.bump_refresh_epoch();
    });
    let bounds = view.with_untracked(ViewState::bounds);
    leptos::task::spawn_local(async move {
        repository::refresh_viewport(scene, bounds).await;
    });
}

/// Invalidate any pending refetch; called on surface teardown.
pub fn cancel_pending_refresh(view: RwSignal<ViewState>) {
    use leptos::prelude::Update;

    view.update(|v| {
        v.bump_refresh_epoch();
    });
}
