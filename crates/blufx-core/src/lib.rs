pub mod camera;
pub mod error;
pub mod grade;
pub mod limiter;
pub mod parameter;
pub mod preset;
pub mod settings;
pub mod state;

pub use camera::{CameraPhase, IdleCameraController, VIEW_COCKPIT_3D};
pub use error::{FxError, Result};
pub use grade::{grade_pixel, GradingUniforms};
pub use limiter::{limit, Clock, SystemClock};
pub use parameter::{round_hundredths, Param, ParameterSet};
pub use preset::{PresetId, PresetLibrary, PresetScope};
pub use settings::{FileSettingsStore, LoadReport, SettingsStore};
pub use state::{Feature, FeatureToggles, RuntimeState, TimingState};
