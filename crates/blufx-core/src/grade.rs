use glam::{Vec2, Vec3};

use crate::parameter::ParameterSet;

/// Rec. 709 luma weights used for desaturation.
pub const LUMA_COEFFICIENTS: Vec3 = Vec3::new(0.2125, 0.7154, 0.0721);

/// Vignette falloff runs from this radius (untouched) ...
pub const VIGNETTE_OUTER: f32 = 0.75;
/// ... down to this one (fully darkened).
pub const VIGNETTE_INNER: f32 = 0.75 - 0.45;

/// Everything the grading shader reads, derived from the live parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingUniforms {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub scale: Vec3,
    pub offset: Vec3,
    pub vignette: f32,
    pub resolution: Vec2,
    /// Left edge of the graded region in UV space; 0.5 during split preview.
    pub left_edge: f32,
}

impl GradingUniforms {
    pub fn new(params: &ParameterSet, width: i32, height: i32, preview_split: bool) -> Self {
        Self {
            brightness: params.brightness,
            contrast: params.contrast,
            saturation: params.saturation,
            scale: Vec3::new(params.red_scale, params.green_scale, params.blue_scale),
            offset: Vec3::new(params.red_offset, params.green_offset, params.blue_offset),
            vignette: params.vignette,
            resolution: Vec2::new(width as f32, height as f32),
            left_edge: if preview_split { 0.5 } else { 0.0 },
        }
    }
}

/// GLSL `smoothstep`, including the reversed-edge case the vignette relies on.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Grade one pixel exactly as the fragment shader does.
///
/// `frag_coord` is in window pixels, like `gl_FragCoord.xy`.
pub fn grade_pixel(color: Vec3, frag_coord: Vec2, u: &GradingUniforms) -> Vec3 {
    let mut color = color * u.contrast + Vec3::splat(u.brightness);

    let intensity = Vec3::splat(color.dot(LUMA_COEFFICIENTS));
    color = intensity.lerp(color, u.saturation);

    // Curve peaks at mid-gray and vanishes at black and white.
    let centered = (color - Vec3::splat(0.5)) * 2.0;
    let curve = (Vec3::ONE - centered * centered) * (2.0 / 3.0);
    color = (color + u.scale * curve + u.offset).clamp(Vec3::ZERO, Vec3::ONE);

    let position = frag_coord / u.resolution - Vec2::splat(0.5);
    let vig = smoothstep(VIGNETTE_OUTER, VIGNETTE_INNER, position.length());
    color.lerp(color * vig, u.vignette)
}

/// Whether a pixel column falls inside the graded region.
pub fn is_graded(frag_x: f32, u: &GradingUniforms) -> bool {
    frag_x >= u.left_edge * u.resolution.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetId;

    const RES: (i32, i32) = (1920, 1080);

    fn center() -> Vec2 {
        Vec2::new(960.0, 540.0)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_neutral_is_identity_at_center() {
        let u = GradingUniforms::new(&ParameterSet::NEUTRAL, RES.0, RES.1, false);
        let c = Vec3::new(0.2, 0.5, 0.9);
        assert!(close(grade_pixel(c, center(), &u), c));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let mut p = ParameterSet::NEUTRAL;
        p.saturation = 0.0;
        let u = GradingUniforms::new(&p, RES.0, RES.1, false);
        let out = grade_pixel(Vec3::new(0.9, 0.1, 0.3), center(), &u);
        assert!((out.x - out.y).abs() < 1e-6 && (out.y - out.z).abs() < 1e-6);
    }

    #[test]
    fn test_channel_curve_and_clamp() {
        let mut p = ParameterSet::NEUTRAL;
        p.red_scale = 0.75;
        p.blue_offset = 0.5;
        let u = GradingUniforms::new(&p, RES.0, RES.1, false);
        let out = grade_pixel(Vec3::splat(0.5), center(), &u);
        assert!((out.x - 1.0).abs() < 1e-6);
        assert!((out.y - 0.5).abs() < 1e-6);
        assert!((out.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vignette_darkens_corners_only() {
        let mut p = ParameterSet::NEUTRAL;
        p.vignette = 1.0;
        let u = GradingUniforms::new(&p, RES.0, RES.1, false);
        let c = Vec3::splat(0.8);
        assert!(close(grade_pixel(c, center(), &u), c));
        let corner = grade_pixel(c, Vec2::new(0.0, 0.0), &u);
        assert!(corner.x < 0.8);
    }

    #[test]
    fn test_smoothstep_reversed_edges() {
        assert_eq!(smoothstep(0.75, 0.3, 0.1), 1.0);
        assert_eq!(smoothstep(0.75, 0.3, 0.9), 0.0);
    }

    #[test]
    fn test_split_preview_region() {
        let p = *crate::preset::PresetLibrary::new().get(PresetId::Default);
        let full = GradingUniforms::new(&p, RES.0, RES.1, false);
        let split = GradingUniforms::new(&p, RES.0, RES.1, true);
        assert!(is_graded(0.0, &full));
        assert!(!is_graded(100.0, &split));
        assert!(is_graded(960.0, &split));
    }
}
