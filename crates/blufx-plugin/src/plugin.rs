use std::collections::BTreeSet;
use std::sync::Arc;

use blufx_core::parameter::DEFAULT_RALEIGH_SCALE;
use blufx_core::{
    limit, settings, Feature, FileSettingsStore, FxError, IdleCameraController, Param, RuntimeState,
    SettingsStore,
};
use blufx_grading::{FrameGrader, GradingEngine};

use crate::command::UiCommand;
use crate::config::{PluginConfig, PLUGIN_NAME};
use crate::host::{Callback, Host, HostMessage, EVERY_FRAME};

/// The plugin: owns all state and answers every host callback.
///
/// The registered callback set always equals the set implied by the enabled
/// features. Each callback body still re-checks its toggle, since the host
/// may deliver one more invocation after unregistering.
pub struct BluFxPlugin<H: Host, G: FrameGrader> {
    host: H,
    grader: Option<G>,
    config: PluginConfig,
    state: RuntimeState,
    camera: IdleCameraController,
    store: Box<dyn SettingsStore>,
    registered: BTreeSet<Callback>,
    settings_window_visible: bool,
}

impl<H: Host, G: FrameGrader> BluFxPlugin<H, G> {
    /// Plugin reading and writing the settings file named in `config`.
    pub fn new(host: H, config: PluginConfig) -> Self {
        let store = Box::new(FileSettingsStore::new(config.settings_path.clone()));
        Self::with_store(host, config, store)
    }

    pub fn with_store(host: H, config: PluginConfig, store: Box<dyn SettingsStore>) -> Self {
        Self {
            host,
            grader: None,
            config,
            state: RuntimeState::new(),
            camera: IdleCameraController::new(),
            store,
            registered: BTreeSet::new(),
            settings_window_visible: false,
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Load settings, take the grading engine (or its build error) and
    /// register the callbacks of the enabled features.
    pub fn start(&mut self, grader: Result<G, FxError>) -> bool {
        log::info!(
            "initializing {} (host version {}{})",
            PLUGIN_NAME,
            self.config.host_version,
            if self.config.legacy_features() { ", legacy" } else { "" }
        );

        self.load_settings();

        match grader {
            Ok(grader) => self.grader = Some(grader),
            Err(e) => {
                log::error!("{}", e);
                log::warn!("post-processing disabled for this session");
                self.state.features.post_processing = false;
            }
        }

        if self.state.features.post_processing {
            self.update_raleigh(false);
        }
        self.sync_callbacks();
        true
    }

    /// Save settings, release GPU resources and leave every callback slot.
    pub fn stop(&mut self) {
        self.save_settings();
        if let Some(mut grader) = self.grader.take() {
            grader.destroy();
        }
        for callback in std::mem::take(&mut self.registered) {
            self.host.unregister_callback(callback);
        }
        log::info!("stopped");
    }

    pub fn enable(&mut self) -> bool {
        true
    }

    pub fn disable(&mut self) {
        self.update_raleigh(true);
    }

    pub fn receive_message(&mut self, message: HostMessage) {
        match message {
            HostMessage::PlaneLoaded => log::debug!("plane loaded"),
            HostMessage::SceneryLoaded => self.update_raleigh(false),
            HostMessage::Other(_) => {}
        }
    }

    // ── Host callbacks ──────────────────────────────────────────────

    pub fn draw_post_processing(&mut self) -> bool {
        if !self.state.features.post_processing {
            return true;
        }
        let Some(grader) = self.grader.as_mut() else {
            return true;
        };
        let (width, height) = self.host.screen_size();
        if let Err(e) = grader.render_frame(width, height, self.settings_window_visible, &self.state.params) {
            log::error!("{}", e);
        }
        true
    }

    pub fn draw_limiter(&mut self) -> bool {
        if self.state.features.fps_limiter {
            let timing = &mut self.state.timing;
            timing.last_frame = limit(&self.host, self.state.params.max_frame_rate, timing.last_frame);
        }
        true
    }

    pub fn flight_loop_limiter(&mut self) -> f32 {
        if self.state.features.fps_limiter {
            let timing = &mut self.state.timing;
            timing.last_tick = limit(&self.host, self.state.params.max_frame_rate, timing.last_tick);
        }
        EVERY_FRAME
    }

    pub fn flight_loop_camera(&mut self) -> f32 {
        let now = self.host.now();
        let view_type = self.host.view_type();
        if let Some(auto_follow) = self.camera.evaluate(&self.state, view_type, now) {
            self.host.set_auto_follow_camera(auto_follow);
        }
        EVERY_FRAME
    }

    // ── Input ───────────────────────────────────────────────────────

    pub fn mouse_click(&mut self) {
        let now = self.host.now();
        self.state.timing.register_activity(now);
    }

    pub fn mouse_wheel(&mut self) {
        let now = self.host.now();
        self.state.timing.register_activity(now);
    }

    pub fn cursor_moved(&mut self, x: i32, y: i32) {
        let now = self.host.now();
        self.state.timing.register_cursor(x, y, now);
    }

    // ── Override dataref ────────────────────────────────────────────

    pub fn override_camera_control(&self) -> bool {
        self.state.override_camera_control
    }

    pub fn set_override_camera_control(&mut self, value: bool) {
        if value != self.state.override_camera_control {
            log::info!("camera control override {}", if value { "set" } else { "cleared" });
        }
        self.state.override_camera_control = value;
    }

    // ── Settings window ─────────────────────────────────────────────

    pub fn handle_command(&mut self, command: UiCommand) {
        match command {
            UiCommand::SetFeature { feature, enabled } => self.set_feature(feature, enabled),
            UiCommand::SetSlider { param, position } => {
                self.state.params.set_from_slider(param, position);
                if param == Param::RaleighScale {
                    self.update_raleigh(false);
                }
            }
            UiCommand::ApplyPreset(id) => {
                self.state.apply_preset_with(id, self.config.preset_scope);
            }
            UiCommand::ResetRaleighScale => {
                self.state.params.set(Param::RaleighScale, DEFAULT_RALEIGH_SCALE);
                self.update_raleigh(true);
            }
            UiCommand::LoadSettings => {
                self.load_settings();
                if self.grader.is_none() {
                    self.state.features.post_processing = false;
                }
                self.sync_callbacks();
            }
            UiCommand::SaveSettings => self.save_settings(),
            UiCommand::ToggleSettingsWindow => {
                self.settings_window_visible = !self.settings_window_visible;
            }
            UiCommand::HideSettingsWindow => self.settings_window_visible = false,
        }
    }

    fn set_feature(&mut self, feature: Feature, enabled: bool) {
        if feature == Feature::PostProcessing && enabled && self.grader.is_none() {
            log::warn!("cannot enable post-processing: grading shader unavailable");
            return;
        }
        self.state.features.set(feature, enabled);
        if feature == Feature::PostProcessing {
            self.update_raleigh(!enabled);
        }
        self.sync_callbacks();
    }

    /// Whether the graded image covers only the right half of the screen.
    pub fn preview_split_active(&self) -> bool {
        self.settings_window_visible
    }

    // ── Internals ───────────────────────────────────────────────────

    /// Register and unregister until the occupied slots match the toggles.
    fn sync_callbacks(&mut self) {
        for callback in Callback::ALL {
            let wanted = self.state.features.get(callback.feature());
            let present = self.registered.contains(&callback);
            if wanted && !present {
                self.host.register_callback(callback);
                self.registered.insert(callback);
                log::debug!("registered {:?}", callback);
            } else if !wanted && present {
                self.host.unregister_callback(callback);
                self.registered.remove(&callback);
                log::debug!("unregistered {:?}", callback);
            }
        }
    }

    fn update_raleigh(&mut self, reset: bool) {
        if !self.config.legacy_features() {
            return;
        }
        let value = if reset { DEFAULT_RALEIGH_SCALE } else { self.state.params.raleigh_scale };
        self.host.set_raleigh_scale(value);
    }

    fn load_settings(&mut self) {
        match settings::load(self.store.as_ref(), &mut self.state) {
            Ok(report) => log::info!("loaded {} settings", report.applied.len()),
            Err(e) => log::warn!("{}; using defaults", e),
        }
    }

    fn save_settings(&mut self) {
        match settings::save(self.store.as_mut(), &self.state) {
            Ok(()) => log::info!("settings saved"),
            Err(e) => log::warn!("{}", e),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn registered_callbacks(&self) -> &BTreeSet<Callback> {
        &self.registered
    }

    pub fn grader(&self) -> Option<&G> {
        self.grader.as_ref()
    }
}

impl<H: Host> BluFxPlugin<H, GradingEngine> {
    /// Start with the real grading pass, built on the host's context.
    ///
    /// Must run with that context current. A shader build failure leaves
    /// the plugin running with post-processing off.
    pub fn start_with_context(&mut self, gl: Arc<glow::Context>) -> bool {
        self.start(GradingEngine::new(gl))
    }
}
