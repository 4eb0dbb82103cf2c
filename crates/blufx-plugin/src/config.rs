use std::path::{Path, PathBuf};

use blufx_core::PresetScope;

pub const PLUGIN_NAME: &str = "BLU-fx v1.2";
pub const PLUGIN_SIGNATURE: &str = "de.bwravencl.blu_fx";
pub const PLUGIN_DESCRIPTION: &str = "BLU-fx v1.2 enhances your X-Plane experience!";

/// Dataref other plugins write to take camera control away from us.
pub const OVERRIDE_DATAREF: &str = "blu_fx/override_control_cinema_verite";
/// Host command that shows or hides the settings window.
pub const TOGGLE_SETTINGS_COMMAND: &str = "blu_fx/toggle_settings";

/// First host version without the Raleigh scale dataref.
pub const FIRST_MODERN_HOST_VERSION: i32 = 120000;

/// Plugin configuration.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Settings file, relative to the simulator's working directory.
    pub settings_path: PathBuf,
    /// Host internal version number, e.g. 115000 or 120100.
    pub host_version: i32,
    /// What a preset button copies into the live parameters.
    pub preset_scope: PresetScope,
}

impl PluginConfig {
    /// Older hosts still expose the Raleigh scale and get it written.
    pub fn legacy_features(&self) -> bool {
        self.host_version < FIRST_MODERN_HOST_VERSION
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            settings_path: Path::new(".")
                .join("Resources")
                .join("plugins")
                .join("blu_fx")
                .join("blu_fx.ini"),
            host_version: FIRST_MODERN_HOST_VERSION,
            preset_scope: PresetScope::GradingOnly,
        }
    }
}
