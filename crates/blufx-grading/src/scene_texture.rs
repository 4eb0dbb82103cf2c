use glow::HasContext;

use blufx_core::{FxError, Result};

/// Screen-sized RGBA texture holding a copy of the last rendered frame.
///
/// Sized once at creation; a resolution change means destroy and recreate.
pub struct SceneTexture {
    texture: glow::Texture,
    width: i32,
    height: i32,
}

impl SceneTexture {
    /// Allocate the texture through `unit`, which is left active with
    /// nothing bound. Other units are not touched.
    pub fn new(gl: &glow::Context, unit: u32, width: i32, height: i32) -> Result<Self> {
        unsafe {
            let texture = gl.create_texture().map_err(FxError::GlResource)?;
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                width,
                height,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(None),
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);
            gl.bind_texture(glow::TEXTURE_2D, None);

            log::debug!("scene texture {}x{}", width, height);
            Ok(Self { texture, width, height })
        }
    }

    pub fn matches(&self, width: i32, height: i32) -> bool {
        self.width == width && self.height == height
    }

    /// Copy the bound read framebuffer into the texture, leaving it bound
    /// on `unit`.
    pub fn capture(&self, gl: &glow::Context, unit: u32) {
        unsafe {
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.texture));
            gl.copy_tex_sub_image_2d(glow::TEXTURE_2D, 0, 0, 0, 0, 0, self.width, self.height);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_texture(self.texture); }
    }
}
