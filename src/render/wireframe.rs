use super::DrawSurface;
use crate::buffer::VertexBuffer;
use crate::colors::{self, Color};
use crate::math::vec3::Vec3;

/// Draws every triangle of a [`VertexBuffer`] as three edges.
///
/// Projection is orthographic: each vertex is moved by a fixed screen
/// offset (the viewport center) and its Z is dropped. There is no depth
/// test or culling, so back edges are drawn too.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireframeRasterizer {
    offset: Vec3,
    background: Color,
    foreground: Color,
}

impl WireframeRasterizer {
    pub fn new(width: u32, height: u32, background: Color, foreground: Color) -> Self {
        Self {
            offset: Vec3::new((width / 2) as f32, (height / 2) as f32, 0.0),
            background,
            foreground,
        }
    }

    /// Rasterizer for a viewport with the default palette.
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self::new(width, height, colors::BACKGROUND, colors::WIREFRAME)
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Screen position of a vertex. Coordinates past the `i32` range
    /// saturate; the surface clips them.
    #[inline]
    pub fn project(&self, vertex: Vec3) -> (i32, i32) {
        let p = vertex + self.offset;
        (p.x as i32, p.y as i32)
    }

    /// Clears `surface` and draws edges A→B, B→C, C→A for every triangle.
    pub fn render<S: DrawSurface>(&self, buffer: &VertexBuffer, surface: &mut S) {
        surface.set_draw_color(self.background);
        surface.clear();
        surface.set_draw_color(self.foreground);

        for [a, b, c] in buffer.triangles() {
            let a = self.project(a);
            let b = self.project(b);
            let c = self.project(c);

            surface.draw_line(a.0, a.1, b.0, b.1);
            surface.draw_line(b.0, b.1, c.0, c.1);
            surface.draw_line(c.0, c.1, a.0, a.1);
        }
    }
}
