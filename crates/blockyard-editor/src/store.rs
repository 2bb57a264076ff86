//! The editor state store: command surface and render snapshots.

use blockyard_core::{GridPos, Result};
use blockyard_world::{ObjectId, ObjectType, WorldModel};
use glam::Vec3;
use serde::Serialize;
use tracing::{debug, info};

use crate::camera::{CameraPose, CameraRig, ViewName};
use crate::interaction::{Interaction, InteractionState};
use crate::settings::{DebugSettings, FogSettings, ToolMode};

/// Single-owner state container for an editing session.
///
/// Composes the world model, interaction machine, camera rig, and display
/// settings behind command methods. Commands run to completion before the
/// next is accepted and the store is only ever touched from the logic
/// thread, so no locking is involved anywhere. The renderer reads state
/// through [`Editor::snapshot`] and never mutates it.
///
/// All time is caller-supplied: milliseconds for object creation stamps,
/// seconds on a monotonic clock for camera ticks. The store itself never
/// reads a clock.
#[derive(Debug, Clone)]
pub struct Editor {
    world: WorldModel,
    interaction: Interaction,
    camera: CameraRig,
    tool: ToolMode,
    object_type: &'static ObjectType,
    selected: Option<ObjectId>,
    fog: FogSettings,
    debug_ui: DebugSettings,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            world: WorldModel::new(),
            interaction: Interaction::new(),
            camera: CameraRig::new(),
            tool: ToolMode::Block,
            object_type: &ObjectType::BLOCK,
            selected: None,
            fog: FogSettings::default(),
            debug_ui: DebugSettings::default(),
        }
    }
}

impl Editor {
    /// Fresh session: empty world, idle interaction, camera at center,
    /// block tool with the generic block type selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The world model.
    #[must_use]
    pub const fn world(&self) -> &WorldModel {
        &self.world
    }

    /// The interaction machine.
    #[must_use]
    pub const fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// The camera rig.
    #[must_use]
    pub const fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// The active tool.
    #[must_use]
    pub const fn tool(&self) -> ToolMode {
        self.tool
    }

    /// The object type new placements will use.
    #[must_use]
    pub const fn object_type(&self) -> &'static ObjectType {
        self.object_type
    }

    /// Current fog settings.
    #[must_use]
    pub const fn fog(&self) -> FogSettings {
        self.fog
    }

    /// Pointer moved to a world-space intersection point.
    ///
    /// Snaps and clamps the point, then updates the preview cell. The
    /// interaction phase never changes on motion. Outside the block tool
    /// the preview is cleared instead.
    ///
    /// # Errors
    ///
    /// [`blockyard_core::Error::InvalidInput`] if the point is non-finite;
    /// the command is dropped and no state changes.
    pub fn pointer_moved(&mut self, world_point: Vec3) -> Result<()> {
        if self.tool != ToolMode::Block {
            self.interaction.clear_preview();
            return Ok(());
        }
        let pos = GridPos::snap(world_point)?.clamp_to_surface();
        self.interaction.pointer_moved(pos);
        Ok(())
    }

    /// Pointer left the ground plane; nothing to preview.
    pub fn pointer_left(&mut self) {
        self.interaction.clear_preview();
    }

    /// Pointer clicked a world-space intersection point at `now_ms`.
    ///
    /// The first click anchors a placement; the second click asks the
    /// world to place the region between anchor and click. A rejected
    /// placement keeps the anchor armed so the user can retry a different
    /// far corner without re-anchoring. Ignored outside the block tool.
    ///
    /// # Errors
    ///
    /// [`blockyard_core::Error::InvalidInput`] if the point is non-finite;
    /// the command is dropped and no state changes.
    pub fn pointer_down(&mut self, world_point: Vec3, now_ms: u64) -> Result<()> {
        if self.tool != ToolMode::Block {
            return Ok(());
        }
        let pos = GridPos::snap(world_point)?.clamp_to_surface();

        match self.interaction.state() {
            InteractionState::Idle => {
                debug!(x = pos.x, y = pos.y, z = pos.z, "placement anchored");
                self.interaction.begin(pos);
            }
            InteractionState::AwaitingConfirmation { anchor } => {
                if self
                    .world
                    .try_place(anchor, pos, self.object_type, now_ms)
                    .is_ok()
                {
                    self.interaction.reset();
                }
                // Rejection keeps the anchor armed; the world logged it.
            }
        }
        Ok(())
    }

    /// Abandon any in-progress placement (escape key). Idempotent.
    pub fn cancel(&mut self) {
        self.interaction.reset();
    }

    /// Remove every placed object and reset the interaction.
    ///
    /// The camera is deliberately left alone, including an in-flight view
    /// transition.
    pub fn clear_all(&mut self) {
        info!(objects = self.world.len(), "clearing all placed objects");
        self.world.clear();
        self.interaction.reset();
        self.selected = None;
    }

    /// Switch the active tool, abandoning any in-progress placement.
    pub fn select_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
        self.interaction.reset();
    }

    /// Switch the object type for new placements, abandoning any
    /// in-progress placement. Unknown ids fall back to the generic block.
    pub fn select_object_type(&mut self, id: &str) {
        self.object_type = ObjectType::lookup(id);
        debug!(ty = self.object_type.id, "object type selected");
        self.interaction.reset();
    }

    /// Mark an object as selected, or clear the selection.
    pub fn select_object(&mut self, id: Option<ObjectId>) {
        self.selected = id;
    }

    /// Ask the camera to fly to a named view at time `now` (seconds).
    pub fn request_view(&mut self, name: ViewName, now: f64) {
        self.camera.request_view(name, now);
    }

    /// Per-frame tick at time `now` (seconds); advances the camera.
    pub fn tick(&mut self, now: f64) {
        self.camera.advance(now);
    }

    /// Toggle the camera info debug overlay.
    pub fn toggle_camera_info(&mut self) {
        self.debug_ui.show_camera_info = !self.debug_ui.show_camera_info;
        debug!(
            visible = self.debug_ui.show_camera_info,
            "camera info overlay toggled"
        );
    }

    /// Replace the fog settings.
    pub fn set_fog(&mut self, fog: FogSettings) {
        self.fog = fog;
    }

    /// The cells to highlight under the cursor, plus whether any of them
    /// is already occupied (used purely for highlight coloring).
    #[must_use]
    pub fn preview(&self) -> PreviewSnapshot {
        let cells = self.interaction.preview_region(self.object_type);
        let overlap = self.world.occupancy().any_occupied(&cells);
        PreviewSnapshot { cells, overlap }
    }

    /// Immutable view of the whole session for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            objects: self
                .world
                .objects()
                .iter()
                .map(|obj| ObjectSnapshot {
                    id: obj.id.clone(),
                    positions: obj.positions.clone(),
                    ty: obj.ty,
                    selected: self.selected.as_ref() == Some(&obj.id),
                })
                .collect(),
            preview: self.preview(),
            interaction: self.interaction.state(),
            camera: self.camera.pose(),
            tool: self.tool,
            object_type: self.object_type,
            fog: self.fog,
            debug_ui: self.debug_ui,
        }
    }
}

/// Everything the renderer needs for one frame, in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub objects: Vec<ObjectSnapshot>,
    pub preview: PreviewSnapshot,
    pub interaction: InteractionState,
    pub camera: CameraPose,
    pub tool: ToolMode,
    pub object_type: &'static ObjectType,
    pub fog: FogSettings,
    pub debug_ui: DebugSettings,
}

/// One placed object as the renderer sees it.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectSnapshot {
    pub id: ObjectId,
    pub positions: Vec<GridPos>,
    pub ty: &'static ObjectType,
    pub selected: bool,
}

/// Cursor highlight cells and their overlap flag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreviewSnapshot {
    pub cells: Vec<GridPos>,
    /// True when any highlighted cell is already occupied
    pub overlap: bool,
}
