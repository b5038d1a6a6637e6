//! Software drawing surface.
//!
//! Provides the [`Renderer`] struct which owns an ARGB8888 color buffer and
//! implements the line drawing used for wireframes.

use super::DrawSurface;
use crate::colors::{self, Color};

pub struct Renderer {
    color_buffer: Vec<u32>,
    draw_color: u32,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND.to_argb(); size],
            draw_color: colors::WIREFRAME.to_argb(),
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The color buffer as raw bytes, ready for an ARGB8888 texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Clips the segment to the buffer with Liang-Barsky, returning the
    /// visible part or `None` if the segment misses the buffer entirely.
    ///
    /// Endpoints may be anywhere in `i32`, including saturated projections of
    /// huge coordinates; the clip runs in `f64` so nothing overflows.
    fn clip_line(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i32, i32, i32, i32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let (x0, y0, x1, y1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
        let x_max = (self.width - 1) as f64;
        let y_max = (self.height - 1) as f64;
        let dx = x1 - x0;
        let dy = y1 - y0;

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        // One (p, q) pair per edge: left, right, top, bottom.
        for (p, q) in [(-dx, x0), (dx, x_max - x0), (-dy, y0), (dy, y_max - y0)] {
            if p == 0.0 {
                // Parallel to this edge and outside it.
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                if t > t_exit {
                    return None;
                }
                t_enter = t_enter.max(t);
            } else {
                if t < t_enter {
                    return None;
                }
                t_exit = t_exit.min(t);
            }
        }

        let snap = |v: f64, max: f64| v.round().clamp(0.0, max) as i32;
        Some((
            snap(x0 + t_enter * dx, x_max),
            snap(y0 + t_enter * dy, y_max),
            snap(x0 + t_exit * dx, x_max),
            snap(y0 + t_exit * dy, y_max),
        ))
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Bresenham's algorithm steps along the major axis one pixel at a time
    /// and tracks an integer error term to decide when to also step along the
    /// minor axis. The segment is clipped to the buffer first, so the walk
    /// never leaves the visible area.
    fn draw_line_bresenham(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let Some((x0, y0, x1, y1)) = self.clip_line(x0, y0, x1, y1) else {
            return;
        };

        let dx = (x1 as i64 - x0 as i64).abs();
        let dy = (y1 as i64 - y0 as i64).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can be true, resulting in a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }
}

impl DrawSurface for Renderer {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color.to_argb();
    }

    fn clear(&mut self) {
        self.color_buffer.fill(self.draw_color);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.draw_line_bresenham(x0, y0, x1, y1, self.draw_color);
    }
}
