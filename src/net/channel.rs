//! Push channel: websocket subscription to the shared canvas topic.
//!
//! The channel delivers CREATE/UPDATE/DELETE notifications from other
//! clients to the object repository, across interruptions. Reconnection
//! uses bounded exponential backoff; after the attempt cap the channel
//! enters a terminal, user-visible given-up state and schedules nothing
//! further.
//!
//! ERROR HANDLING
//! ==============
//! Malformed frames are logged and dropped; transport failures feed the
//! reconnect machine. Nothing in here mutates the cache directly — every
//! change goes through `repository::apply_remote_change`.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::net::repository::apply_remote_change;
#[cfg(feature = "hydrate")]
use crate::net::types::ChangeFrame;
#[cfg(feature = "hydrate")]
use crate::state::media::MediaState;
#[cfg(feature = "hydrate")]
use crate::state::scene::{ConnectionStatus, SceneState};

/// First reconnect delay.
pub const INITIAL_RECONNECT_DELAY_MS: u64 = 1_000;

/// Upper bound on any reconnect delay.
pub const MAX_RECONNECT_DELAY_MS: u64 = 30_000;

/// Delay growth factor per failed attempt.
pub const BACKOFF_MULTIPLIER: u64 = 2;

/// Reconnect attempts before the channel gives up for good.
pub const MAX_RECONNECT_ATTEMPTS: u32 = 10;

/// Exponential backoff schedule for reconnect attempts.
///
/// `next_delay` yields `1000, 2000, 4000, 8000, 16000, 30000, 30000, ...`
/// milliseconds and `None` once the attempt cap is reached. A successful
/// connection resets the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectBackoff {
    attempts: u32,
    delay_ms: u64,
}

impl Default for ReconnectBackoff {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconnectBackoff {
    #[must_use]
    pub fn new() -> Self {
        Self { attempts: 0, delay_ms: INITIAL_RECONNECT_DELAY_MS }
    }

    /// Delay before the next reconnect attempt, or `None` when attempts
    /// are exhausted.
    pub fn next_delay(&mut self) -> Option<u64> {
        if self.attempts >= MAX_RECONNECT_ATTEMPTS {
            return None;
        }
        self.attempts += 1;
        let delay = self.delay_ms.min(MAX_RECONNECT_DELAY_MS);
        self.delay_ms = (self.delay_ms * BACKOFF_MULTIPLIER).min(MAX_RECONNECT_DELAY_MS);
        Some(delay)
    }

    /// Reset after a successful connection.
    pub fn reset(&mut self) {
        self.attempts = 0;
        self.delay_ms = INITIAL_RECONNECT_DELAY_MS;
    }

    /// Failed attempts since the last successful connection.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// Handle to a running push channel.
///
/// Dropping the handle does not stop the channel; call
/// [`ChannelHandle::disconnect`] to tear it down. Teardown is safe from
/// any state: it cancels a pending reconnect wait, closes an active
/// connection, and is idempotent.
#[cfg(feature = "hydrate")]
pub struct ChannelHandle {
    closed: std::rc::Rc<std::cell::Cell<bool>>,
    shutdown_tx: futures::channel::mpsc::UnboundedSender<()>,
}

#[cfg(feature = "hydrate")]
impl ChannelHandle {
    /// Stop the channel and cancel any pending reconnect.
    pub fn disconnect(&self) {
        self.closed.set(true);
        let _ = self.shutdown_tx.unbounded_send(());
    }
}

/// Spawn the push-channel lifecycle as a local async task.
///
/// Connects to the canvas topic, applies incoming frames through the
/// repository, and reconnects on disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_push_channel(scene: RwSignal<SceneState>, media: RwSignal<MediaState>) -> ChannelHandle {
    use futures::channel::mpsc;
    use std::cell::Cell;
    use std::rc::Rc;

    let closed = Rc::new(Cell::new(false));
    let (shutdown_tx, shutdown_rx) = mpsc::unbounded::<()>();

    leptos::task::spawn_local(channel_loop(scene, media, Rc::clone(&closed), shutdown_rx));

    ChannelHandle { closed, shutdown_tx }
}

/// Websocket URL for the canvas topic, derived from the page location.
#[cfg(feature = "hydrate")]
fn push_endpoint_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}/ws/canvas")
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn channel_loop(
    scene: RwSignal<SceneState>,
    media: RwSignal<MediaState>,
    closed: std::rc::Rc<std::cell::Cell<bool>>,
    mut shutdown_rx: futures::channel::mpsc::UnboundedReceiver<()>,
) {
    let mut backoff = ReconnectBackoff::new();

    loop {
        if closed.get() {
            scene.update(|s| s.connection = ConnectionStatus::Disconnected);
            break;
        }
        scene.update(|s| s.connection = ConnectionStatus::Connecting);

        let url = push_endpoint_url();
        match connect_and_listen(&url, scene, media, &mut backoff, &mut shutdown_rx).await {
            Ok(()) => {
                leptos::logging::log!("push channel closed by teardown");
                scene.update(|s| s.connection = ConnectionStatus::Disconnected);
                break;
            }
            Err(e) => leptos::logging::warn!("push channel dropped: {e}"),
        }
        scene.update(|s| s.connection = ConnectionStatus::Disconnected);

        let Some(delay) = backoff.next_delay() else {
            leptos::logging::error!(
                "push channel gave up after {MAX_RECONNECT_ATTEMPTS} attempts; reload to resync"
            );
            scene.update(|s| s.connection = ConnectionStatus::GivenUp);
            break;
        };
        leptos::logging::warn!(
            "push channel reconnecting in {delay} ms (attempt {}/{MAX_RECONNECT_ATTEMPTS})",
            backoff.attempts()
        );
        scene.update(|s| s.connection = ConnectionStatus::ReconnectWait);
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
    }
}

/// Connect to the topic and process frames until disconnect or teardown.
///
/// Returns `Ok(())` only for a voluntary teardown; every other exit is an
/// error that feeds the reconnect machine.
#[cfg(feature = "hydrate")]
async fn connect_and_listen(
    url: &str,
    scene: RwSignal<SceneState>,
    media: RwSignal<MediaState>,
    backoff: &mut ReconnectBackoff,
    shutdown_rx: &mut futures::channel::mpsc::UnboundedReceiver<()>,
) -> Result<(), String> {
    use futures::StreamExt;
    use futures::future::Either;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    scene.update(|s| s.connection = ConnectionStatus::Connected);
    backoff.reset();
    leptos::logging::log!("push channel connected");

    // The subscription is receive-only; the write half just keeps the
    // socket alive until this function returns.
    let (_write, mut read) = ws.split();
    loop {
        match futures::future::select(read.next(), shutdown_rx.next()).await {
            Either::Left((Some(Ok(Message::Text(text))), _)) => {
                dispatch_frame(scene, media, &text);
            }
            Either::Left((Some(Ok(Message::Bytes(_))), _)) => {
                // The topic speaks JSON text; binary frames are ignored.
            }
            Either::Left((Some(Err(e)), _)) => return Err(e.to_string()),
            Either::Left((None, _)) => return Err("connection closed".to_owned()),
            Either::Right((_, _)) => return Ok(()),
        }
    }
}

/// Parse and apply one inbound frame; malformed frames never crash the
/// channel.
#[cfg(feature = "hydrate")]
fn dispatch_frame(scene: RwSignal<SceneState>, media: RwSignal<MediaState>, text: &str) {
    match ChangeFrame::parse(text) {
        Ok(change) => scene.update(|s| {
            media.update(|m| apply_remote_change(s, m, &change));
        }),
        Err(e) => leptos::logging::warn!("dropping malformed push frame: {e}"),
    }
}
