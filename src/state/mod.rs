//! Injectable application state containers.
//!
//! DESIGN
//! ======
//! All shared mutable UI state lives in these containers, provided as
//! `RwSignal` contexts from the root component and passed explicitly to
//! whatever needs them. Each container exposes named mutator methods; no
//! other code touches the fields of the object cache directly.

pub mod media;
pub mod scene;
pub mod view;
