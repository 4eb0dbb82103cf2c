use blufx_core::{Clock, Feature};

/// Return value of a flight-loop callback asking to run again next frame.
pub const EVERY_FRAME: f32 = -1.0;

/// A host callback slot the plugin can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Callback {
    /// Draw callback after the window phase; grades the finished frame.
    PostProcessingDraw,
    /// Draw callback before the terrain phase; limits render rate.
    LimiterDraw,
    /// Per-frame flight loop; limits simulation rate.
    LimiterFlightLoop,
    /// Per-frame flight loop; drives the camera auto-follow flag.
    CameraFlightLoop,
}

impl Callback {
    pub const ALL: [Callback; 4] = [
        Callback::PostProcessingDraw,
        Callback::LimiterDraw,
        Callback::LimiterFlightLoop,
        Callback::CameraFlightLoop,
    ];

    pub fn feature(&self) -> Feature {
        match self {
            Callback::PostProcessingDraw => Feature::PostProcessing,
            Callback::LimiterDraw | Callback::LimiterFlightLoop => Feature::FpsLimiter,
            Callback::CameraFlightLoop => Feature::IdleCameraControl,
        }
    }
}

/// Messages the host broadcasts to every plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    PlaneLoaded,
    SceneryLoaded,
    Other(i64),
}

/// What the plugin needs from the simulator.
///
/// Every call happens on the host's main thread from inside a callback.
pub trait Host: Clock {
    /// Main window size in pixels.
    fn screen_size(&self) -> (i32, i32);

    /// Current view type code.
    fn view_type(&self) -> i32;

    /// Write the camera auto-follow ("cinema verite") flag.
    fn set_auto_follow_camera(&mut self, enabled: bool);

    /// Write the atmospheric Raleigh scale. Only called on legacy hosts.
    fn set_raleigh_scale(&mut self, value: f32);

    fn register_callback(&mut self, callback: Callback);

    fn unregister_callback(&mut self, callback: Callback);
}
