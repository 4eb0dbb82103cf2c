use std::num::NonZeroU32;

use glow::HasContext;

/// The slice of host GL state the grading pass touches.
///
/// The host keeps drawing after us with whatever is bound, so everything we
/// change is put back exactly.
pub struct SavedGlState {
    viewport: [i32; 4],
    blend_enabled: bool,
    depth_test_enabled: bool,
    cull_face_enabled: bool,
    scissor_enabled: bool,
    program: Option<glow::Program>,
    array_buffer: Option<glow::Buffer>,
    /// `None` when the pass draws without vertex array objects.
    vao: Option<Option<glow::VertexArray>>,
    active_texture: i32,
    scene_unit: u32,
    scene_unit_texture: Option<glow::Texture>,
}

fn object_id(gl: &glow::Context, pname: u32) -> Option<NonZeroU32> {
    unsafe { NonZeroU32::new(gl.get_parameter_i32(pname) as u32) }
}

impl SavedGlState {
    /// Record the state. The vertex array binding is only queried when
    /// `vertex_arrays` is set, since 2.1 contexts have no such binding.
    ///
    /// # Safety
    /// `gl` must be current on the calling thread.
    pub unsafe fn save(gl: &glow::Context, scene_unit: u32, vertex_arrays: bool) -> Self {
        let mut viewport = [0i32; 4];
        gl.get_parameter_i32_slice(glow::VIEWPORT, &mut viewport);

        let active_texture = gl.get_parameter_i32(glow::ACTIVE_TEXTURE);
        gl.active_texture(glow::TEXTURE0 + scene_unit);
        let scene_unit_texture = object_id(gl, glow::TEXTURE_BINDING_2D).map(glow::NativeTexture);
        gl.active_texture(active_texture as u32);

        Self {
            viewport,
            blend_enabled: gl.is_enabled(glow::BLEND),
            depth_test_enabled: gl.is_enabled(glow::DEPTH_TEST),
            cull_face_enabled: gl.is_enabled(glow::CULL_FACE),
            scissor_enabled: gl.is_enabled(glow::SCISSOR_TEST),
            program: object_id(gl, glow::CURRENT_PROGRAM).map(glow::NativeProgram),
            array_buffer: object_id(gl, glow::ARRAY_BUFFER_BINDING).map(glow::NativeBuffer),
            vao: vertex_arrays
                .then(|| object_id(gl, glow::VERTEX_ARRAY_BINDING).map(glow::NativeVertexArray)),
            active_texture,
            scene_unit,
            scene_unit_texture,
        }
    }

    /// Put the saved state back.
    ///
    /// # Safety
    /// `gl` must be the context `save` was called with.
    pub unsafe fn restore(&self, gl: &glow::Context) {
        gl.viewport(self.viewport[0], self.viewport[1], self.viewport[2], self.viewport[3]);

        set_capability(gl, glow::BLEND, self.blend_enabled);
        set_capability(gl, glow::DEPTH_TEST, self.depth_test_enabled);
        set_capability(gl, glow::CULL_FACE, self.cull_face_enabled);
        set_capability(gl, glow::SCISSOR_TEST, self.scissor_enabled);

        gl.use_program(self.program);
        if let Some(vao) = self.vao {
            gl.bind_vertex_array(vao);
        }
        gl.bind_buffer(glow::ARRAY_BUFFER, self.array_buffer);

        gl.active_texture(glow::TEXTURE0 + self.scene_unit);
        gl.bind_texture(glow::TEXTURE_2D, self.scene_unit_texture);
        gl.active_texture(self.active_texture as u32);
    }
}

unsafe fn set_capability(gl: &glow::Context, cap: u32, enabled: bool) {
    if enabled {
        gl.enable(cap);
    } else {
        gl.disable(cap);
    }
}
