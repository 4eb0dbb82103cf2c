use crate::parameter::ParameterSet;
use crate::preset::{PresetId, PresetLibrary, PresetScope};

/// The three user-facing features. Each maps to one or more host callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    PostProcessing,
    FpsLimiter,
    IdleCameraControl,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::PostProcessing,
        Feature::FpsLimiter,
        Feature::IdleCameraControl,
    ];

    /// Key used in the persisted settings file.
    pub fn key(&self) -> &'static str {
        match self {
            Feature::PostProcessing => "postProcesssingEnabled",
            Feature::FpsLimiter => "fpsLimiterEnabled",
            Feature::IdleCameraControl => "controlCinemaVeriteEnabled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::PostProcessing => "Enable Post-Processing",
            Feature::FpsLimiter => "Enable FPS-Limiter",
            Feature::IdleCameraControl => "Control Cinema Verite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureToggles {
    pub post_processing: bool,
    pub fps_limiter: bool,
    pub idle_camera_control: bool,
}

impl FeatureToggles {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::PostProcessing => self.post_processing,
            Feature::FpsLimiter => self.fps_limiter,
            Feature::IdleCameraControl => self.idle_camera_control,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::PostProcessing => self.post_processing = enabled,
            Feature::FpsLimiter => self.fps_limiter = enabled,
            Feature::IdleCameraControl => self.idle_camera_control = enabled,
        }
    }
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            post_processing: true,
            fps_limiter: false,
            idle_camera_control: false,
        }
    }
}

/// Timestamps in host elapsed seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingState {
    /// Baseline of the update-tick limiter.
    pub last_tick: f64,
    /// Baseline of the render limiter.
    pub last_frame: f64,
    pub last_input_activity: f64,
    /// Last cursor position seen, to tell real movement from hover events.
    pub last_cursor: Option<(i32, i32)>,
}

impl TimingState {
    pub fn register_activity(&mut self, now: f64) {
        self.last_input_activity = now;
    }

    /// Record a cursor sample. Counts as activity only when the cursor moved;
    /// the first sample seeds the position.
    pub fn register_cursor(&mut self, x: i32, y: i32, now: f64) -> bool {
        let moved = matches!(self.last_cursor, Some(last) if last != (x, y));
        self.last_cursor = Some((x, y));
        if moved {
            self.last_input_activity = now;
        }
        moved
    }
}

/// Process-wide plugin state. Every component reads and writes this directly.
#[derive(Debug, Clone, Default)]
pub struct RuntimeState {
    pub params: ParameterSet,
    pub features: FeatureToggles,
    pub timing: TimingState,
    /// Set by other plugins to take camera control away from us.
    pub override_camera_control: bool,
    pub presets: PresetLibrary,
}

impl RuntimeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the grading fields of a preset into the live parameters.
    pub fn apply_preset(&mut self, id: PresetId) {
        self.apply_preset_with(id, PresetScope::GradingOnly);
    }

    pub fn apply_preset_with(&mut self, id: PresetId, scope: PresetScope) {
        let preset = *self.presets.get(id);
        self.params.copy_fields(&preset, scope.params());
        log::debug!("applied preset {}", id.label());
    }

    pub fn reset_to_default(&mut self) {
        self.apply_preset(PresetId::Default);
    }

    pub fn capture_user_snapshot(&mut self) -> bool {
        let live = self.params;
        self.presets.capture_user_snapshot(&live)
    }
}
