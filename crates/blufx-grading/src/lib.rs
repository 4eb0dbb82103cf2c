pub mod engine;
pub mod gl_state;
pub mod program;
pub mod quad;
pub mod scene_texture;
pub mod shaders;

pub use engine::{FrameGrader, GradingEngine};
