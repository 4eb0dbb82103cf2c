use crate::parameter::{Param, ParameterSet};

/// Identifies a preset button. Order matches the settings window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    /// Restore point captured from the first successful settings load.
    User,
    Default,
    Polaroid,
    FoggedUp,
    HighDynamicRange,
    EditorsChoice,
    SlightlyEnhanced,
    ExtraGloomy,
    RedIsh,
    GreenIsh,
    BlueIsh,
    ShinyCalifornia,
    DustyDry,
    GrayWinter,
    FancyImagination,
    Sixties,
    ColdWinter,
    VintageFilm,
    Colorless,
    Monochrome,
}

impl PresetId {
    pub const ALL: [PresetId; 20] = [
        PresetId::User,
        PresetId::Default,
        PresetId::Polaroid,
        PresetId::FoggedUp,
        PresetId::HighDynamicRange,
        PresetId::EditorsChoice,
        PresetId::SlightlyEnhanced,
        PresetId::ExtraGloomy,
        PresetId::RedIsh,
        PresetId::GreenIsh,
        PresetId::BlueIsh,
        PresetId::ShinyCalifornia,
        PresetId::DustyDry,
        PresetId::GrayWinter,
        PresetId::FancyImagination,
        PresetId::Sixties,
        PresetId::ColdWinter,
        PresetId::VintageFilm,
        PresetId::Colorless,
        PresetId::Monochrome,
    ];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            PresetId::User => "Restore",
            PresetId::Default => "Reset",
            PresetId::Polaroid => "Polaroid",
            PresetId::FoggedUp => "Fogged Up",
            PresetId::HighDynamicRange => "High Dynamic Range",
            PresetId::EditorsChoice => "Editor's Choice",
            PresetId::SlightlyEnhanced => "Slightly Enhanced",
            PresetId::ExtraGloomy => "Extra Gloomy",
            PresetId::RedIsh => "Red-ish",
            PresetId::GreenIsh => "Green-ish",
            PresetId::BlueIsh => "Blue-ish",
            PresetId::ShinyCalifornia => "Shiny California",
            PresetId::DustyDry => "Dusty Dry",
            PresetId::GrayWinter => "Gray Winter",
            PresetId::FancyImagination => "Fancy Imagination",
            PresetId::Sixties => "Sixties",
            PresetId::ColdWinter => "Cold Winter",
            PresetId::VintageFilm => "Vintage Film",
            PresetId::Colorless => "Colorless",
            PresetId::Monochrome => "Monochrome",
        }
    }

    /// The compile-time values for a fixed preset, `None` for the mutable slots.
    pub fn fixed(&self) -> Option<&'static ParameterSet> {
        FIXED_PRESETS
            .iter()
            .find(|(id, _)| id == self)
            .map(|(_, params)| params)
    }
}

/// Which fields a preset application overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetScope {
    /// Brightness through vignette only.
    #[default]
    GradingOnly,
    /// Also raleigh scale, frame-rate cap and idle threshold.
    GradingAndBehavior,
}

impl PresetScope {
    pub fn params(&self) -> &'static [Param] {
        match self {
            PresetScope::GradingOnly => &Param::GRADING,
            PresetScope::GradingAndBehavior => &Param::ALL,
        }
    }
}

const fn g(
    brightness: f32,
    contrast: f32,
    saturation: f32,
    scale: [f32; 3],
    offset: [f32; 3],
    vignette: f32,
) -> ParameterSet {
    ParameterSet::grading(
        brightness, contrast, saturation, scale[0], scale[1], scale[2], offset[0], offset[1],
        offset[2], vignette,
    )
}

#[rustfmt::skip]
pub static FIXED_PRESETS: [(PresetId, ParameterSet); 18] = [
    //                                    bright contr  sat   scale r/g/b            offset r/g/b          vignette
    (PresetId::Polaroid,         g( 0.05, 1.1,  1.4, [0.0,  0.0,  -0.2], [0.0,  0.0,  0.0 ], 0.6 )),
    (PresetId::FoggedUp,         g( 0.05, 1.2,  0.7, [0.15, 0.15,  0.15], [0.0, 0.0,  0.0 ], 0.3 )),
    (PresetId::HighDynamicRange, g( 0.0,  1.15, 0.9, [0.0,  0.0,   0.0], [0.0,  0.0,  0.0 ], 0.6 )),
    (PresetId::EditorsChoice,    g( 0.05, 1.1,  1.3, [0.0,  0.0,   0.0], [0.0,  0.0,  0.0 ], 0.3 )),
    (PresetId::SlightlyEnhanced, g( 0.05, 1.1,  1.1, [0.0,  0.0,   0.0], [0.0,  0.0,  0.0 ], 0.0 )),
    (PresetId::ExtraGloomy,      g(-0.15, 1.3,  1.0, [0.0,  0.0,   0.0], [0.0,  0.0,  0.0 ], 0.0 )),
    (PresetId::RedIsh,           g( 0.0,  1.0,  1.0, [0.1,  0.0,   0.0], [0.0,  0.0,  0.0 ], 0.0 )),
    (PresetId::GreenIsh,         g( 0.0,  1.0,  1.0, [0.0,  0.1,   0.0], [0.0,  0.0,  0.0 ], 0.0 )),
    (PresetId::BlueIsh,          g( 0.0,  1.0,  1.0, [0.0,  0.0,   0.1], [0.0,  0.0,  0.0 ], 0.0 )),
    (PresetId::ShinyCalifornia,  g( 0.1,  1.5,  1.3, [0.0,  0.0,   0.0], [0.0,  0.0, -0.1 ], 0.0 )),
    (PresetId::DustyDry,         g( 0.0,  1.3,  1.3, [0.2,  0.0,   0.0], [0.0,  0.0,  0.0 ], 0.6 )),
    (PresetId::GrayWinter,       g( 0.07, 1.15, 1.3, [0.0,  0.0,   0.0], [0.0,  0.05, 0.0 ], 0.6 )),
    (PresetId::FancyImagination, g( 0.0,  1.6,  1.5, [0.0,  0.0,  -0.1], [0.0,  0.05, 0.0 ], 0.6 )),
    (PresetId::Sixties,          g( 0.0,  1.6,  1.5, [0.2,  0.0,  -0.1], [0.0,  0.05, 0.0 ], 0.65)),
    (PresetId::ColdWinter,       g( 0.0,  1.55, 0.0, [0.0,  0.05,  0.2], [0.0,  0.05, 0.0 ], 0.25)),
    (PresetId::VintageFilm,      g( 0.0,  1.05, 0.0, [0.0,  0.0,   0.07], [0.07, 0.03, 0.0 ], 0.0 )),
    (PresetId::Colorless,        g(-0.03, 1.3,  0.0, [0.0,  0.0,   0.0], [0.0,  0.03, 0.0 ], 0.65)),
    (PresetId::Monochrome,       g(-0.13, 1.2,  0.0, [0.0,  0.0,   0.0], [0.0,  0.03, 0.0 ], 0.7 )),
];

/// Fixed presets plus the two mutable slots.
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    default: ParameterSet,
    user: ParameterSet,
    user_captured: bool,
}

impl PresetLibrary {
    pub fn new() -> Self {
        Self {
            default: ParameterSet::NEUTRAL,
            // Looks like the default until the first settings load replaces it.
            user: ParameterSet::NEUTRAL,
            user_captured: false,
        }
    }

    pub fn get(&self, id: PresetId) -> &ParameterSet {
        match id {
            PresetId::User => &self.user,
            PresetId::Default => &self.default,
            fixed => fixed.fixed().unwrap_or(&self.default),
        }
    }

    pub fn user_captured(&self) -> bool {
        self.user_captured
    }

    /// Copy every field of `live` into the user slot, once per library.
    /// Returns whether the capture happened.
    pub fn capture_user_snapshot(&mut self, live: &ParameterSet) -> bool {
        if self.user_captured {
            return false;
        }
        self.user = *live;
        self.user_captured = true;
        true
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::new()
    }
}
