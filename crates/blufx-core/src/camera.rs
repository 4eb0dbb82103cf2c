use crate::state::RuntimeState;

/// Host view-type code of the 3D cockpit, the only view this controller governs.
pub const VIEW_COCKPIT_3D: i32 = 1026;

/// What the controller decided for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    /// Input seen within the threshold; auto-follow off.
    Active,
    /// Idle long enough, or outside the governed view; auto-follow on.
    Idle,
}

impl CameraPhase {
    pub fn auto_follow(&self) -> bool {
        matches!(self, CameraPhase::Idle)
    }
}

/// Pure transition rule.
pub fn decide(view_type: i32, idle_seconds: f64, threshold: f32) -> CameraPhase {
    if view_type != VIEW_COCKPIT_3D {
        CameraPhase::Idle
    } else if idle_seconds <= threshold as f64 {
        CameraPhase::Active
    } else {
        CameraPhase::Idle
    }
}

/// Forces the host's camera auto-follow flag from input idleness.
///
/// Level-triggered: every evaluation yields a value to write, so observers
/// that start polling mid-session see the right state immediately.
#[derive(Debug, Default)]
pub struct IdleCameraController {
    last_phase: Option<CameraPhase>,
}

impl IdleCameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one tick. Returns the auto-follow value to write, or `None`
    /// when the feature is off or another component holds the override.
    pub fn evaluate(&mut self, state: &RuntimeState, view_type: i32, now: f64) -> Option<bool> {
        if !state.features.idle_camera_control || state.override_camera_control {
            return None;
        }
        let idle = now - state.timing.last_input_activity;
        let phase = decide(view_type, idle, state.params.idle_disable_seconds);
        if self.last_phase != Some(phase) {
            log::debug!("camera phase {:?} (idle {:.1}s)", phase, idle);
            self.last_phase = Some(phase);
        }
        Some(phase.auto_follow())
    }

    pub fn last_phase(&self) -> Option<CameraPhase> {
        self.last_phase
    }
}
