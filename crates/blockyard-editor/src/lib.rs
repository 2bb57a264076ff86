//! Interaction, camera, and editor state store for the Blockyard engine.
//!
//! This crate sits between the input layer and the renderer:
//! - [`Interaction`] tracks the two-phase click workflow and the live
//!   pointer cell
//! - [`CameraRig`] holds the named-view catalog and drives animated
//!   transitions between views
//! - [`Editor`] composes both with the world model behind a command
//!   surface and hands the renderer an immutable [`Snapshot`] to draw
//!
//! Everything here is single-threaded by design: each command runs to
//! completion before the next is accepted, so the store needs no locks.

pub mod camera;
pub mod interaction;
pub mod settings;
pub mod store;

pub use camera::{CameraAnimation, CameraPose, CameraRig, CameraView, ViewName};
pub use interaction::{Interaction, InteractionState};
pub use settings::{DebugSettings, FogSettings, ToolMode};
pub use store::{Editor, ObjectSnapshot, PreviewSnapshot, Snapshot};
