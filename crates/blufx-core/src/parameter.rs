/// Raleigh scale the host ships with (legacy hosts only).
pub const DEFAULT_RALEIGH_SCALE: f32 = 13.0;
pub const DEFAULT_MAX_FRAME_RATE: f32 = 30.0;
pub const DEFAULT_IDLE_DISABLE_SECONDS: f32 = 5.0;

/// Round to the nearest hundredth, halves rounding up.
///
/// Evaluated in f64 on the exact stored f32 so that values sitting just
/// below a half (0.565f32 is 0.564999...) do not get pushed across it by
/// f32 multiplication error.
pub fn round_hundredths(value: f32) -> f32 {
    ((value as f64 * 100.0 + 0.5).floor() / 100.0) as f32
}

/// How a raw slider position maps onto a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderScale {
    /// Position in thousandths, shifted down by 0.5.
    CenteredThousandths,
    /// Position in hundredths.
    Hundredths,
    /// Position is the value.
    Units,
}

/// One of the 13 fields of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Param {
    Brightness,
    Contrast,
    Saturation,
    RedScale,
    GreenScale,
    BlueScale,
    RedOffset,
    GreenOffset,
    BlueOffset,
    Vignette,
    RaleighScale,
    MaxFrameRate,
    IdleDisableSeconds,
}

impl Param {
    pub const ALL: [Param; 13] = [
        Param::Brightness,
        Param::Contrast,
        Param::Saturation,
        Param::RedScale,
        Param::GreenScale,
        Param::BlueScale,
        Param::RedOffset,
        Param::GreenOffset,
        Param::BlueOffset,
        Param::Vignette,
        Param::RaleighScale,
        Param::MaxFrameRate,
        Param::IdleDisableSeconds,
    ];

    /// Fields that presets always carry. The remaining three are
    /// performance/behavior settings.
    pub const GRADING: [Param; 10] = [
        Param::Brightness,
        Param::Contrast,
        Param::Saturation,
        Param::RedScale,
        Param::GreenScale,
        Param::BlueScale,
        Param::RedOffset,
        Param::GreenOffset,
        Param::BlueOffset,
        Param::Vignette,
    ];

    /// Key used in the persisted settings file.
    pub fn key(&self) -> &'static str {
        match self {
            Param::Brightness => "brightness",
            Param::Contrast => "contrast",
            Param::Saturation => "saturation",
            Param::RedScale => "redScale",
            Param::GreenScale => "greenScale",
            Param::BlueScale => "blueScale",
            Param::RedOffset => "redOffset",
            Param::GreenOffset => "greenOffset",
            Param::BlueOffset => "blueOffset",
            Param::Vignette => "vignette",
            Param::RaleighScale => "raleighScale",
            Param::MaxFrameRate => "maxFps",
            Param::IdleDisableSeconds => "disableCinemaVeriteTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Param::Brightness => "Brightness",
            Param::Contrast => "Contrast",
            Param::Saturation => "Saturation",
            Param::RedScale => "Red Scale",
            Param::GreenScale => "Green Scale",
            Param::BlueScale => "Blue Scale",
            Param::RedOffset => "Red Offset",
            Param::GreenOffset => "Green Offset",
            Param::BlueOffset => "Blue Offset",
            Param::Vignette => "Vignette",
            Param::RaleighScale => "Raleigh Scale",
            Param::MaxFrameRate => "Max FPS",
            Param::IdleDisableSeconds => "On input disable for",
        }
    }

    /// Valid value range, inclusive.
    pub fn range(&self) -> (f32, f32) {
        match self {
            Param::Brightness => (-0.5, 0.5),
            Param::Contrast => (0.05, 2.0),
            Param::Saturation => (0.0, 2.5),
            Param::RedScale | Param::GreenScale | Param::BlueScale => (-0.75, 0.75),
            Param::RedOffset | Param::GreenOffset | Param::BlueOffset => (-0.5, 0.5),
            Param::Vignette => (0.0, 1.0),
            Param::RaleighScale => (1.0, 100.0),
            Param::MaxFrameRate => (20.0, 200.0),
            Param::IdleDisableSeconds => (1.0, 30.0),
        }
    }

    pub fn slider_scale(&self) -> SliderScale {
        match self {
            Param::Brightness => SliderScale::CenteredThousandths,
            Param::RaleighScale | Param::MaxFrameRate | Param::IdleDisableSeconds => {
                SliderScale::Units
            }
            _ => SliderScale::Hundredths,
        }
    }

    /// Slider widget bounds in raw positions.
    pub fn slider_range(&self) -> (i32, i32) {
        match self.slider_scale() {
            SliderScale::CenteredThousandths => (1, 1000),
            SliderScale::Hundredths => {
                let (min, max) = self.range();
                ((min * 100.0).round() as i32, (max * 100.0).round() as i32)
            }
            SliderScale::Units => {
                let (min, max) = self.range();
                (min as i32, max as i32)
            }
        }
    }

    /// Convert a raw slider position to a (not yet clamped) value.
    pub fn from_slider(&self, position: i32) -> f32 {
        match self.slider_scale() {
            SliderScale::CenteredThousandths => round_hundredths(position as f32 / 1000.0) - 0.5,
            SliderScale::Hundredths => position as f32 / 100.0,
            SliderScale::Units => position as f32,
        }
    }

    /// Convert a value back to the slider position that produces it.
    pub fn to_slider(&self, value: f32) -> i32 {
        match self.slider_scale() {
            SliderScale::CenteredThousandths => ((value + 0.5) * 1000.0).round() as i32,
            SliderScale::Hundredths => (value * 100.0).round() as i32,
            SliderScale::Units => value.round() as i32,
        }
    }

    /// Caption text shown next to the slider.
    pub fn caption(&self, value: f32) -> String {
        match self {
            Param::RaleighScale | Param::MaxFrameRate => format!("{}: {:.0}", self.label(), value),
            Param::IdleDisableSeconds => format!("{}: {:.0} sec", self.label(), value),
            _ => format!("{}: {:.2}", self.label(), value),
        }
    }
}

/// The live color-grading and timing values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub red_scale: f32,
    pub green_scale: f32,
    pub blue_scale: f32,
    pub red_offset: f32,
    pub green_offset: f32,
    pub blue_offset: f32,
    pub vignette: f32,
    /// Legacy-only atmospheric tuning.
    pub raleigh_scale: f32,
    /// Frames per second cap used by both limiters.
    pub max_frame_rate: f32,
    pub idle_disable_seconds: f32,
}

impl ParameterSet {
    /// Neutral grading with default behavior settings.
    pub const NEUTRAL: ParameterSet = ParameterSet::grading(
        0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    );

    /// Build a set from grading values; behavior fields get their defaults.
    #[allow(clippy::too_many_arguments)]
    pub const fn grading(
        brightness: f32,
        contrast: f32,
        saturation: f32,
        red_scale: f32,
        green_scale: f32,
        blue_scale: f32,
        red_offset: f32,
        green_offset: f32,
        blue_offset: f32,
        vignette: f32,
    ) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
            red_scale,
            green_scale,
            blue_scale,
            red_offset,
            green_offset,
            blue_offset,
            vignette,
            raleigh_scale: DEFAULT_RALEIGH_SCALE,
            max_frame_rate: DEFAULT_MAX_FRAME_RATE,
            idle_disable_seconds: DEFAULT_IDLE_DISABLE_SECONDS,
        }
    }

    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Brightness => self.brightness,
            Param::Contrast => self.contrast,
            Param::Saturation => self.saturation,
            Param::RedScale => self.red_scale,
            Param::GreenScale => self.green_scale,
            Param::BlueScale => self.blue_scale,
            Param::RedOffset => self.red_offset,
            Param::GreenOffset => self.green_offset,
            Param::BlueOffset => self.blue_offset,
            Param::Vignette => self.vignette,
            Param::RaleighScale => self.raleigh_scale,
            Param::MaxFrameRate => self.max_frame_rate,
            Param::IdleDisableSeconds => self.idle_disable_seconds,
        }
    }

    fn slot(&mut self, param: Param) -> &mut f32 {
        match param {
            Param::Brightness => &mut self.brightness,
            Param::Contrast => &mut self.contrast,
            Param::Saturation => &mut self.saturation,
            Param::RedScale => &mut self.red_scale,
            Param::GreenScale => &mut self.green_scale,
            Param::BlueScale => &mut self.blue_scale,
            Param::RedOffset => &mut self.red_offset,
            Param::GreenOffset => &mut self.green_offset,
            Param::BlueOffset => &mut self.blue_offset,
            Param::Vignette => &mut self.vignette,
            Param::RaleighScale => &mut self.raleigh_scale,
            Param::MaxFrameRate => &mut self.max_frame_rate,
            Param::IdleDisableSeconds => &mut self.idle_disable_seconds,
        }
    }

    /// Store a value: clamped to the field range, then rounded to hundredths.
    /// Non-finite input leaves the field untouched.
    pub fn set(&mut self, param: Param, value: f32) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite {} value", param.key());
            return;
        }
        let (min, max) = param.range();
        *self.slot(param) = round_hundredths(value.clamp(min, max));
    }

    pub fn set_from_slider(&mut self, param: Param, position: i32) {
        self.set(param, param.from_slider(position));
    }

    /// Copy the listed fields from `other`.
    pub fn copy_fields(&mut self, other: &ParameterSet, params: &[Param]) {
        for &param in params {
            *self.slot(param) = other.get(param);
        }
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
