use glow::HasContext;

use blufx_core::{FxError, Result};

/// Attribute slot the quad corners are fed through. Bound by name before
/// the grading program links.
pub const CORNER_LOCATION: u32 = 0;

/// Corners of the unit square as a triangle strip. The vertex shader maps
/// them to clip space and texture coordinates.
#[rustfmt::skip]
static CORNERS: [f32; 8] = [
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    1.0, 1.0,
];

/// Vertex array objects are core from 3.0 (desktop and ES alike).
pub fn supports_vertex_arrays(major_version: u32) -> bool {
    major_version >= 3
}

/// The four corners the grading pass is drawn with.
///
/// On contexts without vertex array objects the attribute pointer is set
/// up on every draw instead.
pub struct FullscreenQuad {
    vbo: glow::Buffer,
    vao: Option<glow::VertexArray>,
}

impl FullscreenQuad {
    pub fn new(gl: &glow::Context) -> Result<Self> {
        unsafe {
            let vbo = gl.create_buffer().map_err(FxError::GlResource)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, corner_bytes(), glow::STATIC_DRAW);

            let vao = if supports_vertex_arrays(gl.version().major) {
                match gl.create_vertex_array() {
                    Ok(vao) => {
                        gl.bind_vertex_array(Some(vao));
                        enable_corners(gl);
                        gl.bind_vertex_array(None);
                        Some(vao)
                    }
                    Err(e) => {
                        log::warn!("no vertex array object ({}); binding attributes per draw", e);
                        None
                    }
                }
            } else {
                None
            };
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            log::debug!("quad ready (vertex array: {})", vao.is_some());
            Ok(Self { vbo, vao })
        }
    }

    /// Whether drawing rebinds the vertex array binding, which the caller
    /// then has to save and restore.
    pub fn uses_vertex_array(&self) -> bool {
        self.vao.is_some()
    }

    pub fn draw(&self, gl: &glow::Context) {
        unsafe {
            match self.vao {
                Some(vao) => {
                    gl.bind_vertex_array(Some(vao));
                    gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
                    gl.bind_vertex_array(None);
                }
                None => {
                    gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
                    enable_corners(gl);
                    gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
                    gl.disable_vertex_attrib_array(CORNER_LOCATION);
                    gl.bind_buffer(glow::ARRAY_BUFFER, None);
                }
            }
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            if let Some(vao) = self.vao {
                gl.delete_vertex_array(vao);
            }
            gl.delete_buffer(self.vbo);
        }
    }
}

/// Point the corner attribute at the bound array buffer.
unsafe fn enable_corners(gl: &glow::Context) {
    gl.enable_vertex_attrib_array(CORNER_LOCATION);
    gl.vertex_attrib_pointer_f32(CORNER_LOCATION, 2, glow::FLOAT, false, 0, 0);
}

fn corner_bytes() -> &'static [u8] {
    // f32 has no padding and u8 has alignment 1.
    unsafe { std::slice::from_raw_parts(CORNERS.as_ptr() as *const u8, std::mem::size_of_val(&CORNERS)) }
}
