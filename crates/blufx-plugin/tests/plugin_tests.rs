use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use blufx_core::{Clock, Feature, FxError, Param, ParameterSet, PresetId, SettingsStore, VIEW_COCKPIT_3D};
use blufx_grading::{FrameGrader, GradingEngine};
use blufx_plugin::{logger, BluFxPlugin, Callback, Host, HostMessage, PluginConfig, UiCommand};

// ── Helpers ──────────────────────────────────────────────────────

#[derive(Default)]
struct FakeHost {
    now: Cell<f64>,
    slept: Cell<f64>,
    view_type: i32,
    camera_writes: Vec<bool>,
    raleigh_writes: Vec<f32>,
    active: BTreeSet<Callback>,
    registrations: usize,
}

impl Clock for FakeHost {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn sleep(&self, seconds: f64) {
        self.slept.set(self.slept.get() + seconds);
        self.now.set(self.now.get() + seconds);
    }
}

impl Host for FakeHost {
    fn screen_size(&self) -> (i32, i32) {
        (1920, 1080)
    }

    fn view_type(&self) -> i32 {
        self.view_type
    }

    fn set_auto_follow_camera(&mut self, enabled: bool) {
        self.camera_writes.push(enabled);
    }

    fn set_raleigh_scale(&mut self, value: f32) {
        self.raleigh_writes.push(value);
    }

    fn register_callback(&mut self, callback: Callback) {
        assert!(self.active.insert(callback), "{:?} registered twice", callback);
        self.registrations += 1;
    }

    fn unregister_callback(&mut self, callback: Callback) {
        assert!(self.active.remove(&callback), "{:?} was not registered", callback);
    }
}

#[derive(Default)]
struct FakeGrader {
    frames: Vec<(i32, i32, bool, ParameterSet)>,
    destroyed: Rc<Cell<bool>>,
}

impl FrameGrader for FakeGrader {
    fn render_frame(&mut self, width: i32, height: i32, split: bool, params: &ParameterSet) -> blufx_core::Result<()> {
        self.frames.push((width, height, split, *params));
        Ok(())
    }

    fn destroy(&mut self) {
        self.destroyed.set(true);
    }
}

#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Option<String>>>);

impl SettingsStore for SharedStore {
    fn read(&self) -> blufx_core::Result<String> {
        self.0.borrow().clone().ok_or_else(|| FxError::PersistenceMissing {
            path: PathBuf::from("blu_fx.ini"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    fn write(&mut self, contents: &str) -> blufx_core::Result<()> {
        *self.0.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}

fn config(host_version: i32) -> PluginConfig {
    PluginConfig { host_version, ..Default::default() }
}

fn plugin_with(store: SharedStore, host_version: i32) -> BluFxPlugin<FakeHost, FakeGrader> {
    BluFxPlugin::with_store(FakeHost::default(), config(host_version), Box::new(store))
}

fn started(host_version: i32) -> BluFxPlugin<FakeHost, FakeGrader> {
    let mut plugin = plugin_with(SharedStore::default(), host_version);
    assert!(plugin.start(Ok(FakeGrader::default())));
    plugin
}

fn shader_error() -> FxError {
    FxError::ShaderBuild { stage: "fragment", log: "0:1: syntax error".into() }
}

fn set(plugin: &mut BluFxPlugin<FakeHost, FakeGrader>, feature: Feature, enabled: bool) {
    plugin.handle_command(UiCommand::SetFeature { feature, enabled });
}

// ── 1. Startup and shutdown ──────────────────────────────────────

#[test]
fn defaults_register_post_processing_only() {
    let plugin = started(120000);
    let expected: BTreeSet<_> = [Callback::PostProcessingDraw].into();
    assert_eq!(plugin.registered_callbacks(), &expected);
    assert_eq!(plugin.host().active, expected);
    assert_eq!(plugin.state().params.max_frame_rate, 30.0);
}

#[test]
fn persisted_toggles_drive_registration() {
    let store = SharedStore::default();
    *store.0.borrow_mut() =
        Some("postProcesssingEnabled=0\nfpsLimiterEnabled=1\ncontrolCinemaVeriteEnabled=1\n".into());
    let mut plugin = plugin_with(store, 120000);
    plugin.start(Ok(FakeGrader::default()));

    let expected: BTreeSet<_> =
        [Callback::LimiterDraw, Callback::LimiterFlightLoop, Callback::CameraFlightLoop].into();
    assert_eq!(plugin.host().active, expected);
}

#[test]
fn shader_failure_leaves_post_processing_off() {
    let mut plugin = plugin_with(SharedStore::default(), 120000);
    assert!(plugin.start(Err(shader_error())));
    assert!(!plugin.state().features.post_processing);
    assert!(plugin.host().active.is_empty());

    set(&mut plugin, Feature::PostProcessing, true);
    assert!(!plugin.state().features.post_processing);
    assert!(plugin.host().active.is_empty());
    assert!(plugin.draw_post_processing());
}

#[test]
fn stop_saves_releases_and_unregisters() {
    let store = SharedStore::default();
    let mut plugin = plugin_with(store.clone(), 120000);
    let grader = FakeGrader::default();
    let destroyed = Rc::clone(&grader.destroyed);
    plugin.start(Ok(grader));
    set(&mut plugin, Feature::FpsLimiter, true);
    plugin.handle_command(UiCommand::ApplyPreset(PresetId::Sixties));

    plugin.stop();
    assert!(destroyed.get());
    assert!(plugin.host().active.is_empty());
    assert!(plugin.registered_callbacks().is_empty());

    let saved = store.0.borrow().clone().unwrap();
    assert!(saved.contains("fpsLimiterEnabled=1\n"));
    assert!(saved.contains("vignette=0.65\n"));
}

// ── 2. Feature toggles ───────────────────────────────────────────

#[test]
fn limiter_toggle_owns_both_slots() {
    let mut plugin = started(120000);
    set(&mut plugin, Feature::FpsLimiter, true);
    assert!(plugin.host().active.contains(&Callback::LimiterDraw));
    assert!(plugin.host().active.contains(&Callback::LimiterFlightLoop));

    set(&mut plugin, Feature::FpsLimiter, false);
    assert!(!plugin.host().active.contains(&Callback::LimiterDraw));
    assert!(!plugin.host().active.contains(&Callback::LimiterFlightLoop));
}

#[test]
fn repeated_toggle_is_idempotent() {
    let mut plugin = started(120000);
    let before = plugin.host().registrations;
    set(&mut plugin, Feature::PostProcessing, true);
    set(&mut plugin, Feature::PostProcessing, true);
    assert_eq!(plugin.host().registrations, before);
}

#[test]
fn load_command_resyncs_callbacks() {
    let store = SharedStore::default();
    let mut plugin = plugin_with(store.clone(), 120000);
    plugin.start(Ok(FakeGrader::default()));

    *store.0.borrow_mut() = Some("controlCinemaVeriteEnabled=1\npostProcesssingEnabled=0\n".into());
    plugin.handle_command(UiCommand::LoadSettings);
    let expected: BTreeSet<_> = [Callback::CameraFlightLoop].into();
    assert_eq!(plugin.host().active, expected);
}

// ── 3. Post-processing ───────────────────────────────────────────

#[test]
fn preview_split_follows_settings_window() {
    let mut plugin = started(120000);
    plugin.draw_post_processing();
    plugin.handle_command(UiCommand::ToggleSettingsWindow);
    assert!(plugin.preview_split_active());
    plugin.draw_post_processing();
    plugin.handle_command(UiCommand::HideSettingsWindow);
    plugin.draw_post_processing();

    let splits: Vec<bool> = plugin.grader().unwrap().frames.iter().map(|f| f.2).collect();
    assert_eq!(splits, vec![false, true, false]);
    assert_eq!(plugin.grader().unwrap().frames[0].0, 1920);
}

#[test]
fn grader_sees_live_parameters() {
    let mut plugin = started(120000);
    plugin.handle_command(UiCommand::SetSlider { param: Param::Contrast, position: 140 });
    plugin.handle_command(UiCommand::SetSlider { param: Param::Brightness, position: 600 });
    plugin.draw_post_processing();

    let params = plugin.grader().unwrap().frames[0].3;
    assert_eq!(params.contrast, 1.4);
    assert!((params.brightness - 0.1).abs() < 1e-6);
}

// ── 4. Frame-rate limiter ────────────────────────────────────────

#[test]
fn limiter_waits_out_the_budget() {
    let mut plugin = started(120000);
    set(&mut plugin, Feature::FpsLimiter, true);
    plugin.handle_command(UiCommand::SetSlider { param: Param::MaxFrameRate, position: 50 });

    plugin.host().now.set(10.0);
    plugin.flight_loop_limiter();
    assert_eq!(plugin.host().slept.get(), 0.0);

    let now = plugin.host().now.get();
    plugin.host().now.set(now + 0.005);
    assert_eq!(plugin.flight_loop_limiter(), -1.0);
    assert!((plugin.host().slept.get() - 0.015).abs() < 1e-6);
}

#[test]
fn draw_limiter_keeps_its_own_baseline() {
    let mut plugin = started(120000);
    set(&mut plugin, Feature::FpsLimiter, true);
    plugin.host().now.set(5.0);
    plugin.flight_loop_limiter();
    assert!(plugin.draw_limiter());
    assert_eq!(plugin.host().slept.get(), 0.0);
    assert_eq!(plugin.state().timing.last_frame, 5.0);
}

#[test]
fn disabled_limiter_never_sleeps() {
    let mut plugin = started(120000);
    plugin.host().now.set(1.0);
    plugin.flight_loop_limiter();
    plugin.draw_limiter();
    assert_eq!(plugin.host().slept.get(), 0.0);
}

// ── 5. Idle camera control ───────────────────────────────────────

#[test]
fn camera_follows_input_idleness() {
    let mut plugin = started(120000);
    set(&mut plugin, Feature::IdleCameraControl, true);
    plugin.host_mut().view_type = VIEW_COCKPIT_3D;

    plugin.host().now.set(100.0);
    plugin.mouse_click();
    plugin.host().now.set(103.0);
    plugin.flight_loop_camera();
    plugin.host().now.set(106.0);
    plugin.flight_loop_camera();
    plugin.flight_loop_camera();
    plugin.mouse_wheel();
    plugin.flight_loop_camera();

    assert_eq!(plugin.host().camera_writes, vec![false, true, true, false]);
}

#[test]
fn cursor_hover_is_not_activity() {
    let mut plugin = started(120000);
    set(&mut plugin, Feature::IdleCameraControl, true);
    plugin.host_mut().view_type = VIEW_COCKPIT_3D;

    plugin.cursor_moved(10, 10);
    plugin.host().now.set(50.0);
    plugin.cursor_moved(10, 10);
    plugin.flight_loop_camera();
    plugin.cursor_moved(11, 10);
    plugin.flight_loop_camera();

    assert_eq!(plugin.host().camera_writes, vec![true, false]);
}

#[test]
fn override_blocks_camera_writes() {
    let mut plugin = started(120000);
    set(&mut plugin, Feature::IdleCameraControl, true);
    plugin.set_override_camera_control(true);
    assert!(plugin.override_camera_control());
    plugin.flight_loop_camera();
    assert!(plugin.host().camera_writes.is_empty());

    plugin.set_override_camera_control(false);
    plugin.flight_loop_camera();
    assert_eq!(plugin.host().camera_writes, vec![true]);
}

// ── 6. Raleigh scale ─────────────────────────────────────────────

#[test]
fn legacy_host_gets_raleigh_writes() {
    let mut plugin = started(115000);
    plugin.handle_command(UiCommand::SetSlider { param: Param::RaleighScale, position: 40 });
    plugin.receive_message(HostMessage::SceneryLoaded);
    set(&mut plugin, Feature::PostProcessing, false);
    plugin.handle_command(UiCommand::ResetRaleighScale);
    plugin.disable();

    assert_eq!(plugin.host().raleigh_writes, vec![13.0, 40.0, 40.0, 13.0, 13.0, 13.0]);
    assert_eq!(plugin.state().params.raleigh_scale, 13.0);
}

#[test]
fn modern_host_never_sees_raleigh() {
    let mut plugin = started(120100);
    plugin.handle_command(UiCommand::SetSlider { param: Param::RaleighScale, position: 40 });
    plugin.receive_message(HostMessage::SceneryLoaded);
    plugin.disable();
    assert!(plugin.host().raleigh_writes.is_empty());
    assert!(plugin.enable());
}

// ── 7. Presets ───────────────────────────────────────────────────

#[test]
fn restore_returns_to_loaded_values() {
    let store = SharedStore::default();
    *store.0.borrow_mut() = Some("saturation=1.7\nmaxFps=45\n".into());
    let mut plugin = plugin_with(store, 120000);
    plugin.start(Ok(FakeGrader::default()));

    plugin.handle_command(UiCommand::ApplyPreset(PresetId::Colorless));
    assert_eq!(plugin.state().params.saturation, 0.0);
    plugin.handle_command(UiCommand::ApplyPreset(PresetId::User));
    assert_eq!(plugin.state().params.saturation, 1.7);
    assert_eq!(plugin.state().params.max_frame_rate, 45.0);
}

// ── 8. Host glue ─────────────────────────────────────────────────

#[test]
fn real_engine_failure_starts_without_post_processing() {
    let _: fn(&mut BluFxPlugin<FakeHost, GradingEngine>, Arc<glow::Context>) -> bool =
        BluFxPlugin::start_with_context;

    let mut plugin: BluFxPlugin<FakeHost, GradingEngine> =
        BluFxPlugin::with_store(FakeHost::default(), config(120000), Box::new(SharedStore::default()));
    assert!(plugin.start(Err(shader_error())));
    assert!(plugin.grader().is_none());
    assert!(!plugin.state().features.post_processing);
    assert!(plugin.registered_callbacks().is_empty());
    plugin.stop();
}

#[test]
fn host_logger_receives_plugin_lines() {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&lines);
    assert!(logger::init(
        move |s: &str| captured.lock().unwrap().push(s.to_string()),
        log::LevelFilter::Warn,
    ));
    assert!(!logger::init(|_: &str| {}, log::LevelFilter::Warn));

    let mut plugin = plugin_with(SharedStore::default(), 120000);
    plugin.start(Err(shader_error()));

    let lines = lines.lock().unwrap();
    assert!(lines.iter().any(|l| l.starts_with("BLU-fx v1.2: error: ")), "{:?}", lines);
    assert!(lines.iter().any(|l| l.contains("post-processing disabled")), "{:?}", lines);
}
