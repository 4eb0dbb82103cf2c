use std::sync::Arc;

use glow::HasContext;

use blufx_core::{GradingUniforms, ParameterSet, Result};

use crate::gl_state::SavedGlState;
use crate::program::{GradingProgram, SCENE_UNIT};
use crate::quad::FullscreenQuad;
use crate::scene_texture::SceneTexture;

/// Anything that can grade the frame the host just drew.
///
/// The plugin only talks to this trait, so it runs against a recording fake
/// in tests and against [`GradingEngine`] inside the host.
pub trait FrameGrader {
    /// Capture the current frame, grade it and draw it back over the
    /// screen, or over the right half only when `preview_split` is set.
    fn render_frame(
        &mut self,
        width: i32,
        height: i32,
        preview_split: bool,
        params: &ParameterSet,
    ) -> Result<()>;

    /// Release every GPU resource. Further frames are ignored.
    fn destroy(&mut self);
}

/// Color-grading pass on the host's OpenGL context.
pub struct GradingEngine {
    gl: Arc<glow::Context>,
    program: GradingProgram,
    quad: FullscreenQuad,
    scene: Option<SceneTexture>,
    destroyed: bool,
}

impl GradingEngine {
    /// Build the shader program and quad. Must be called with the host's
    /// context current.
    ///
    /// A shader build failure returns the driver log and leaves nothing
    /// bound or allocated.
    pub fn new(gl: Arc<glow::Context>) -> Result<Self> {
        let program = GradingProgram::new(&gl)?;
        let quad = match FullscreenQuad::new(&gl) {
            Ok(quad) => quad,
            Err(e) => {
                program.destroy(&gl);
                return Err(e);
            }
        };
        log::info!("grading shader ready");
        Ok(Self { gl, program, quad, scene: None, destroyed: false })
    }

    fn ensure_scene(&mut self, width: i32, height: i32) -> Result<&SceneTexture> {
        let scene = match self.scene.take() {
            Some(scene) if scene.matches(width, height) => scene,
            stale => {
                if let Some(old) = stale {
                    old.destroy(&self.gl);
                }
                SceneTexture::new(&self.gl, SCENE_UNIT, width, height)?
            }
        };
        Ok(self.scene.insert(scene))
    }
}

impl FrameGrader for GradingEngine {
    fn render_frame(
        &mut self,
        width: i32,
        height: i32,
        preview_split: bool,
        params: &ParameterSet,
    ) -> Result<()> {
        if self.destroyed || width <= 0 || height <= 0 {
            return Ok(());
        }

        let gl = Arc::clone(&self.gl);
        unsafe {
            let saved = SavedGlState::save(&gl, SCENE_UNIT, self.quad.uses_vertex_array());

            let scene = match self.ensure_scene(width, height) {
                Ok(scene) => scene,
                Err(e) => {
                    saved.restore(&gl);
                    return Err(e);
                }
            };
            scene.capture(&gl, SCENE_UNIT);

            gl.disable(glow::BLEND);
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::CULL_FACE);
            gl.disable(glow::SCISSOR_TEST);
            gl.viewport(0, 0, width, height);

            let uniforms = GradingUniforms::new(params, width, height, preview_split);
            self.program.bind(&gl, &uniforms);
            self.quad.draw(&gl);

            saved.restore(&gl);
        }
        Ok(())
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(scene) = self.scene.take() {
            scene.destroy(&self.gl);
        }
        self.quad.destroy(&self.gl);
        self.program.destroy(&self.gl);
        self.destroyed = true;
        log::debug!("grading engine released");
    }
}
