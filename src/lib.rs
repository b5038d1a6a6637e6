//! A spinning wireframe viewer for OBJ meshes.
//!
//! A mesh is loaded once, centered on its centroid and scaled, expanded into
//! a flat triangle buffer, and then rotated a fixed step every frame. Edges
//! are drawn with an orthographic projection on the CPU; SDL2 is used only
//! for the window, input and presenting the finished frame.
//!
//! # Quick Start
//!
//! ```ignore
//! use wirespin::prelude::*;
//!
//! let config = ViewerConfig::default();
//! let mesh = Mesh::from_obj(&config.model_path, &config.load)?;
//! let mut window = Window::new(&config.title, config.width, config.height, config.fps)?;
//! Viewer::from_mesh(&mesh, &config).run(&mut window)?;
//! ```

pub mod buffer;
pub mod colors;
pub mod config;
pub mod math;
pub mod mesh;
pub mod render;
pub mod transform;
pub mod viewer;
pub mod window;

pub use buffer::VertexBuffer;
pub use config::{Command, ConfigError, ViewerConfig};
pub use mesh::{Face, LoadError, LoadOptions, Mesh, ParseErrorKind};
pub use transform::{Orientation, Spin};
pub use viewer::{LoopState, Viewer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use wirespin::prelude::*;
/// ```
pub mod prelude {
    // Mesh
    pub use crate::buffer::VertexBuffer;
    pub use crate::mesh::{Face, LoadError, LoadOptions, Mesh};

    // Transform
    pub use crate::transform::{Orientation, Spin};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;

    // Rendering
    pub use crate::colors::Color;
    pub use crate::render::{DrawSurface, Renderer, WireframeRasterizer};

    // Window & loop
    pub use crate::config::ViewerConfig;
    pub use crate::viewer::{LoopState, Viewer};
    pub use crate::window::{FrameLimiter, Frontend, Window, WindowEvent};
}
