use glow::HasContext;

use blufx_core::{FxError, GradingUniforms, Result};

use crate::quad::CORNER_LOCATION;
use crate::shaders;

/// Texture unit the captured scene is bound to.
pub const SCENE_UNIT: u32 = 0;

/// Compile and link a vertex/fragment pair, pinning each named attribute to
/// its location before the link.
///
/// Nothing is left allocated on failure; the driver's diagnostic text is
/// carried in the error.
pub fn compile_program(
    gl: &glow::Context,
    vert_src: &str,
    frag_src: &str,
    attributes: &[(u32, &str)],
) -> Result<glow::Program> {
    unsafe {
        let vert = compile_shader(gl, glow::VERTEX_SHADER, "vertex", vert_src)?;
        let frag = match compile_shader(gl, glow::FRAGMENT_SHADER, "fragment", frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                gl.delete_shader(vert);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(p) => p,
            Err(e) => {
                gl.delete_shader(vert);
                gl.delete_shader(frag);
                return Err(FxError::GlResource(e));
            }
        };

        gl.attach_shader(program, vert);
        gl.attach_shader(program, frag);
        for &(location, name) in attributes {
            gl.bind_attrib_location(program, location, name);
        }
        gl.link_program(program);
        let linked = gl.get_program_link_status(program);

        gl.detach_shader(program, vert);
        gl.detach_shader(program, frag);
        gl.delete_shader(vert);
        gl.delete_shader(frag);

        if !linked {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(FxError::ShaderBuild { stage: "link", log });
        }
        Ok(program)
    }
}

unsafe fn compile_shader(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    src: &str,
) -> Result<glow::Shader> {
    let shader = gl.create_shader(kind).map_err(FxError::GlResource)?;
    gl.shader_source(shader, src);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(FxError::ShaderBuild { stage, log });
    }
    Ok(shader)
}

/// The linked grading program and its uniform locations.
///
/// Locations are optional because drivers drop uniforms the compiler
/// proves unused; setting a `None` location is a no-op.
pub struct GradingProgram {
    program: glow::Program,
    loc_scene: Option<glow::UniformLocation>,
    loc_brightness: Option<glow::UniformLocation>,
    loc_contrast: Option<glow::UniformLocation>,
    loc_saturation: Option<glow::UniformLocation>,
    loc_scale: Option<glow::UniformLocation>,
    loc_offset: Option<glow::UniformLocation>,
    loc_vignette: Option<glow::UniformLocation>,
    loc_resolution: Option<glow::UniformLocation>,
    loc_left_edge: Option<glow::UniformLocation>,
}

impl GradingProgram {
    pub fn new(gl: &glow::Context) -> Result<Self> {
        let program = compile_program(
            gl,
            shaders::GRADE_VERTEX,
            shaders::GRADE_FRAGMENT,
            &[(CORNER_LOCATION, shaders::CORNER_ATTRIBUTE)],
        )?;

        unsafe {
            let loc = |name: &str| gl.get_uniform_location(program, name);
            Ok(Self {
                program,
                loc_scene: loc("u_scene"),
                loc_brightness: loc("u_brightness"),
                loc_contrast: loc("u_contrast"),
                loc_saturation: loc("u_saturation"),
                loc_scale: loc("u_scale"),
                loc_offset: loc("u_offset"),
                loc_vignette: loc("u_vignette"),
                loc_resolution: loc("u_resolution"),
                loc_left_edge: loc("u_left_edge"),
            })
        }
    }

    /// Bind the program and upload this frame's uniforms.
    pub fn bind(&self, gl: &glow::Context, u: &GradingUniforms) {
        unsafe {
            gl.use_program(Some(self.program));

            gl.uniform_1_i32(self.loc_scene.as_ref(), SCENE_UNIT as i32);
            gl.uniform_1_f32(self.loc_brightness.as_ref(), u.brightness);
            gl.uniform_1_f32(self.loc_contrast.as_ref(), u.contrast);
            gl.uniform_1_f32(self.loc_saturation.as_ref(), u.saturation);
            gl.uniform_3_f32(self.loc_scale.as_ref(), u.scale.x, u.scale.y, u.scale.z);
            gl.uniform_3_f32(self.loc_offset.as_ref(), u.offset.x, u.offset.y, u.offset.z);
            gl.uniform_1_f32(self.loc_vignette.as_ref(), u.vignette);
            gl.uniform_2_f32(self.loc_resolution.as_ref(), u.resolution.x, u.resolution.y);
            gl.uniform_1_f32(self.loc_left_edge.as_ref(), u.left_edge);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program); }
    }
}
