//! Named camera views and animated transitions between them.

use std::fmt;
use std::str::FromStr;

use blockyard_core::math::ease_in_out_cubic;
use blockyard_core::{Error, Result};
use glam::Vec3;
use serde::Serialize;
use tracing::info;

/// Wall-clock duration of a view transition, in seconds.
pub const VIEW_TRANSITION_SECS: f64 = 0.3;

/// Label of a predefined camera framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewName {
    Center,
    Left,
    Right,
}

impl ViewName {
    /// The catalog name, as used by the view panel and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The catalog entry for this name.
    #[must_use]
    pub const fn view(self) -> CameraView {
        match self {
            Self::Center => CameraView {
                name: Self::Center,
                position: Vec3::new(22.44, 6.49, 11.62),
                target: Vec3::new(3.56, -2.45, 11.07),
            },
            Self::Left => CameraView {
                name: Self::Left,
                position: Vec3::new(9.49, 6.87, 22.86),
                target: Vec3::new(9.92, -0.88, 9.60),
            },
            Self::Right => CameraView {
                name: Self::Right,
                position: Vec3::new(11.04, 7.99, -1.56),
                target: Vec3::new(11.18, -0.65, 9.74),
            },
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "center" => Ok(Self::Center),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(Error::UnknownView(other.to_string())),
        }
    }
}

/// A predefined camera framing: where the camera sits and what it looks
/// at when resting in this view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraView {
    pub name: ViewName,
    pub position: Vec3,
    pub target: Vec3,
}

/// The live camera placement, interpolated during transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl From<CameraView> for CameraPose {
    fn from(view: CameraView) -> Self {
        Self {
            position: view.position,
            target: view.target,
        }
    }
}

/// Transition state of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraAnimation {
    /// Resting at a named view
    Idle { current: ViewName },
    /// Mid-flight between a captured pose and a catalog view
    Animating {
        from: CameraPose,
        to: CameraView,
        start_time: f64,
        duration: f64,
    },
}

/// Drives the camera between named views.
///
/// Time is caller-supplied (seconds on any monotonic clock), one
/// [`CameraRig::advance`] per rendered frame. Progress is computed from
/// absolute elapsed time rather than accumulated deltas, so delayed or
/// skipped ticks can never make a transition regress or overshoot.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pose: CameraPose,
    state: CameraAnimation,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            pose: ViewName::Center.view().into(),
            state: CameraAnimation::Idle {
                current: ViewName::Center,
            },
        }
    }
}

impl CameraRig {
    /// Start resting at the center view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The live camera pose.
    #[must_use]
    pub const fn pose(&self) -> CameraPose {
        self.pose
    }

    /// The current transition state.
    #[must_use]
    pub const fn state(&self) -> CameraAnimation {
        self.state
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.state, CameraAnimation::Animating { .. })
    }

    /// The view the camera is resting at, or `None` mid-flight.
    #[must_use]
    pub const fn current_view(&self) -> Option<ViewName> {
        match self.state {
            CameraAnimation::Idle { current } => Some(current),
            CameraAnimation::Animating { .. } => None,
        }
    }

    /// Begin a transition to a named view at time `now`.
    ///
    /// Ignored while another transition is in flight, and when the rig is
    /// already resting at the requested view.
    pub fn request_view(&mut self, name: ViewName, now: f64) {
        match self.state {
            CameraAnimation::Animating { .. } => {}
            CameraAnimation::Idle { current } if current == name => {}
            CameraAnimation::Idle { .. } => {
                info!(view = %name, "camera view requested");
                self.state = CameraAnimation::Animating {
                    from: self.pose,
                    to: name.view(),
                    start_time: now,
                    duration: VIEW_TRANSITION_SECS,
                };
            }
        }
    }

    /// Advance the in-flight transition to time `now`.
    ///
    /// Interpolates the pose with cubic ease-in-out; once progress
    /// reaches 1 the pose snaps exactly onto the destination view and the
    /// rig returns to rest there. A no-op while resting.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, now: f64) {
        let CameraAnimation::Animating {
            from,
            to,
            start_time,
            duration,
        } = self.state
        else {
            return;
        };

        let progress = ((now - start_time) / duration).clamp(0.0, 1.0) as f32;
        let eased = ease_in_out_cubic(progress);
        self.pose = CameraPose {
            position: from.position.lerp(to.position, eased),
            target: from.target.lerp(to.target, eased),
        };

        if progress >= 1.0 {
            self.pose = to.into();
            self.state = CameraAnimation::Idle { current: to.name };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_resting_at_center() {
        let rig = CameraRig::new();
        assert_eq!(rig.current_view(), Some(ViewName::Center));
        assert_eq!(rig.pose().position, ViewName::Center.view().position);
    }

    #[test]
    fn request_to_current_view_is_ignored() {
        let mut rig = CameraRig::new();
        rig.request_view(ViewName::Center, 10.0);
        assert!(!rig.is_animating());
    }

    #[test]
    fn request_while_animating_is_ignored() {
        let mut rig = CameraRig::new();
        rig.request_view(ViewName::Left, 0.0);
        assert!(rig.is_animating());

        rig.request_view(ViewName::Right, 0.1);
        rig.advance(VIEW_TRANSITION_SECS);

        assert_eq!(rig.current_view(), Some(ViewName::Left));
    }

    #[test]
    fn transition_lands_exactly_on_the_destination() {
        let mut rig = CameraRig::new();
        rig.request_view(ViewName::Right, 5.0);

        rig.advance(5.0 + VIEW_TRANSITION_SECS);

        let to = ViewName::Right.view();
        assert_eq!(rig.current_view(), Some(ViewName::Right));
        assert_eq!(rig.pose().position, to.position);
        assert_eq!(rig.pose().target, to.target);
    }

    #[test]
    fn late_tick_still_terminates_without_overshoot() {
        let mut rig = CameraRig::new();
        rig.request_view(ViewName::Left, 0.0);

        // Whole seconds late; progress clamps to 1.
        rig.advance(7.5);

        let to = ViewName::Left.view();
        assert_eq!(rig.current_view(), Some(ViewName::Left));
        assert_eq!(rig.pose().position, to.position);
    }

    #[test]
    fn midpoint_pose_is_halfway() {
        let mut rig = CameraRig::new();
        let from = rig.pose();
        rig.request_view(ViewName::Left, 0.0);

        rig.advance(VIEW_TRANSITION_SECS / 2.0);

        let to = ViewName::Left.view();
        let expected = (from.position + to.position) / 2.0;
        assert_relative_eq!(rig.pose().position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(rig.pose().position.y, expected.y, epsilon = 1e-4);
        assert_relative_eq!(rig.pose().position.z, expected.z, epsilon = 1e-4);
        assert!(rig.is_animating());
    }

    #[test]
    fn progress_never_regresses_across_ticks() {
        let mut rig = CameraRig::new();
        let from = rig.pose().position;
        rig.request_view(ViewName::Left, 0.0);
        let to = ViewName::Left.view().position;
        let total = from.distance(to);

        let mut travelled = 0.0_f32;
        for i in 0..=20 {
            rig.advance(f64::from(i) * VIEW_TRANSITION_SECS / 20.0);
            let now = from.distance(rig.pose().position);
            assert!(now >= travelled - 1e-4, "camera moved backwards");
            travelled = now;
        }
        assert_relative_eq!(travelled, total, epsilon = 1e-4);
    }

    #[test]
    fn view_names_roundtrip_through_strings() {
        for name in [ViewName::Center, ViewName::Left, ViewName::Right] {
            assert_eq!(name.as_str().parse::<ViewName>().unwrap(), name);
        }
        assert!("top".parse::<ViewName>().is_err());
    }
}
