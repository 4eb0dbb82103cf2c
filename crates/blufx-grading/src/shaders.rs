// ── Grading pass ────────────────────────────────────────────────────

/// Name of the per-vertex quad corner, in [0,1] on both axes.
pub const CORNER_ATTRIBUTE: &str = "a_corner";

// GLSL 1.20 so the pair builds on legacy 2.1 contexts as well as
// compatibility profiles.

/// Fullscreen quad whose left edge can be pulled to the middle of the
/// screen, so only the right half is graded during split preview.
pub const GRADE_VERTEX: &str = r#"#version 120

attribute vec2 a_corner;

uniform float u_left_edge; // 0.0 full screen, 0.5 split preview

varying vec2 v_uv;

void main() {
    v_uv = vec2(mix(u_left_edge, 1.0, a_corner.x), a_corner.y);
    gl_Position = vec4(v_uv * 2.0 - 1.0, 0.0, 1.0);
}
"#;

pub const GRADE_FRAGMENT: &str = r#"#version 120

varying vec2 v_uv;

uniform sampler2D u_scene;
uniform float u_brightness;
uniform float u_contrast;
uniform float u_saturation;
uniform vec3 u_scale;
uniform vec3 u_offset;
uniform float u_vignette;
uniform vec2 u_resolution;

const vec3 LUMA = vec3(0.2125, 0.7154, 0.0721);

void main() {
    vec3 color = texture2D(u_scene, v_uv).rgb;

    color = color * u_contrast + vec3(u_brightness);

    vec3 intensity = vec3(dot(color, LUMA));
    color = mix(intensity, color, u_saturation);

    // Per-channel curve: strongest at mid-gray, zero at black and white
    vec3 centered = (color - 0.5) * 2.0;
    vec3 curve = 2.0 / 3.0 * (1.0 - centered * centered);
    color = clamp(color + u_scale * curve + u_offset, 0.0, 1.0);

    vec2 position = gl_FragCoord.xy / u_resolution - vec2(0.5);
    float vig = smoothstep(0.75, 0.75 - 0.45, length(position));
    color = mix(color, color * vig, u_vignette);

    gl_FragColor = vec4(color, 1.0);
}
"#;
