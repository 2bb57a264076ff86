//! Display and session settings carried alongside the world state.

use serde::Serialize;

/// Editing tool. Only block placement exists today; the variant exists so
/// switching tools is a real transition that abandons pending placements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolMode {
    #[default]
    Block,
}

/// Scene fog parameters, passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FogSettings {
    pub enabled: bool,
    /// Fog color (RGB, 0-255)
    pub color: [u8; 3],
    pub density: f32,
    /// Distance where fog starts
    pub near: f32,
    /// Distance of full fog
    pub far: f32,
    /// Whether the skybox is fogged too
    pub affect_skybox: bool,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [255, 255, 255],
            density: 0.02,
            near: 20.0,
            far: 80.0,
            affect_skybox: true,
        }
    }
}

/// Debug overlay toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DebugSettings {
    /// Show the camera position/target readout
    pub show_camera_info: bool,
}
