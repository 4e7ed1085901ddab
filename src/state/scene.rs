//! Scene state: the object cache, selection, and synchronization status.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single source of truth the rendering layer reads. It is
//! mutated only through the methods below, called by the object
//! repository (local mutations and remote change application) and the
//! interaction layer (selection, live gesture previews). The push channel
//! never touches it directly.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use canvas::object::CanvasObject;
use canvas::store::ObjectStore;

/// Push-channel connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// Socket is open and frames are flowing.
    Connected,
    /// Waiting out a backoff delay before the next attempt.
    ReconnectWait,
    /// Reconnect attempts exhausted; terminal until a page reload.
    GivenUp,
}

/// Live rectangle of an object mid-drag or mid-resize.
///
/// Published by the interaction layer while a gesture is in progress so
/// overlay positioners can track the object without reading half-committed
/// cache state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveRect {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The materialized scene: cached objects plus transient UI state.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    /// All objects currently materialized client-side, keyed by id.
    pub objects: ObjectStore,
    /// At most one selected object id.
    pub selection: Option<i64>,
    /// Push-channel status, surfaced in the toolbar.
    pub connection: ConnectionStatus,
    /// In-progress gesture rectangle, if any.
    pub live_gesture: Option<LiveRect>,
    /// True while a viewport query is in flight.
    pub loading: bool,
    /// Last user-visible failure, shown as a dismissible banner.
    pub last_error: Option<String>,
    /// Whether the background grid is drawn.
    pub show_grid: bool,
}

impl SceneState {
    #[must_use]
    pub fn new() -> Self {
        Self { show_grid: true, ..Self::default() }
    }

    // ── Selection ───────────────────────────────────────────────

    pub fn select(&mut self, id: i64) {
        self.selection = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // ── Live gesture ────────────────────────────────────────────

    pub fn set_live(&mut self, rect: LiveRect) {
        self.live_gesture = Some(rect);
    }

    pub fn clear_live(&mut self) {
        self.live_gesture = None;
    }

    /// The rectangle to display for `id` right now: the live gesture rect
    /// when a gesture targets this object, the committed cache value
    /// otherwise.
    #[must_use]
    pub fn display_rect(&self, id: i64) -> Option<LiveRect> {
        if let Some(live) = self.live_gesture
            && live.id == id
        {
            return Some(live);
        }
        self.objects.get(id).map(|obj| LiveRect {
            id,
            x: obj.position_x,
            y: obj.position_y,
            width: obj.width,
            height: obj.height,
        })
    }

    // ── Cache writes ────────────────────────────────────────────

    /// Insert a freshly created object unless its id is already cached.
    ///
    /// Returns `true` when the object was inserted. Guards the creator's
    /// own HTTP response racing the push CREATE for the same id.
    pub fn apply_created(&mut self, obj: CanvasObject) -> bool {
        self.objects.insert_new(obj)
    }

    /// Write the canonical server response for a local update.
    ///
    /// The response replaces the cached object wholesale; client-held
    /// fields are never merged in.
    pub fn apply_updated(&mut self, obj: CanvasObject) {
        self.objects.insert(obj);
    }

    /// Remove an object and clear any state referencing it.
    pub fn apply_deleted(&mut self, id: i64) {
        self.objects.remove(id);
        if self.selection == Some(id) {
            self.selection = None;
        }
        if self.live_gesture.map(|live| live.id) == Some(id) {
            self.live_gesture = None;
        }
    }

    /// Replace the cached set with a viewport query response.
    ///
    /// The server, not the client, is authoritative for which objects lie
    /// in a viewport. The selected id is kept even when the selected
    /// object scrolled out of view; dependents degrade gracefully.
    pub fn replace_viewport(&mut self, objects: Vec<CanvasObject>) {
        self.objects.load_all(objects);
    }

    // ── Status ──────────────────────────────────────────────────

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }
}
