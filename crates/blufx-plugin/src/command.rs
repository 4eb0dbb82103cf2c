use blufx_core::{Feature, Param, PresetId};

/// Actions from the settings window (and the toggle command).
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    /// A feature checkbox changed.
    SetFeature { feature: Feature, enabled: bool },
    /// A slider moved to a raw widget position.
    SetSlider { param: Param, position: i32 },
    /// A preset button was pressed.
    ApplyPreset(PresetId),
    /// The Raleigh "Reset" button.
    ResetRaleighScale,
    /// Reload the settings file.
    LoadSettings,
    /// Write the settings file.
    SaveSettings,
    ToggleSettingsWindow,
    /// Close button of the settings window.
    HideSettingsWindow,
}
