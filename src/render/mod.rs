//! Drawing surface and wireframe rasterization.
//!
//! [`DrawSurface`] is the small set of 2D primitives the rasterizer needs.
//! [`Renderer`] implements it on a CPU color buffer that the window uploads
//! every frame; tests implement it to record draw calls.

mod renderer;
mod wireframe;

pub use renderer::Renderer;
pub use wireframe::WireframeRasterizer;

use crate::colors::Color;

/// A 2D target that can be cleared and drawn on with lines.
///
/// Drawing state (the current color) lives in the surface, so callers pass
/// the surface explicitly instead of sharing a global renderer handle.
pub trait DrawSurface {
    /// Select the color used by subsequent `clear` and `draw_line` calls.
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole surface with the current color.
    fn clear(&mut self);

    /// Draw a line between two integer points, inclusive, in the current color.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
}
