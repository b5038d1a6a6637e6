//! The main loop.
//!
//! The [`Viewer`] owns the vertex buffer and drives one frame at a time:
//! poll input, spin the buffer, rasterize it into the color buffer, present,
//! then wait for the next frame. Everything runs on the calling thread.

use crate::buffer::VertexBuffer;
use crate::config::ViewerConfig;
use crate::mesh::Mesh;
use crate::render::{Renderer, WireframeRasterizer};
use crate::transform::{self, Spin};
use crate::window::{Frontend, WindowEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Stopped,
}

pub struct Viewer {
    vertices: VertexBuffer,
    spin: Spin,
    rasterizer: WireframeRasterizer,
    renderer: Renderer,
    state: LoopState,
    frames: u64,
}

impl Viewer {
    pub fn new(vertices: VertexBuffer, config: &ViewerConfig) -> Self {
        Self {
            vertices,
            spin: config.spin,
            rasterizer: WireframeRasterizer::new(
                config.width,
                config.height,
                config.background,
                config.foreground,
            ),
            renderer: Renderer::new(config.width, config.height),
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Expands `mesh` into a fresh vertex buffer and builds a viewer around it.
    pub fn from_mesh(mesh: &Mesh, config: &ViewerConfig) -> Self {
        let vertices = VertexBuffer::from_mesh(mesh, config.expand_scale);
        tracing::info!(triangles = vertices.triangle_count(), "vertex buffer ready");
        Self::new(vertices, config)
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn handle_event(&mut self, event: WindowEvent) {
        if event == WindowEvent::Quit {
            self.state = LoopState::Stopped;
        }
    }

    /// Apply one spin step to the vertex buffer.
    pub fn update(&mut self) {
        transform::spin(&mut self.vertices, &self.spin);
    }

    /// Clear the color buffer and draw the current wireframe into it.
    pub fn render(&mut self) {
        self.rasterizer.render(&self.vertices, &mut self.renderer);
    }

    /// Run frames until the frontend reports a quit request.
    ///
    /// A quit seen while polling stops the loop before that frame is drawn.
    /// Returns the number of frames presented.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<u64, String> {
        while self.state == LoopState::Running {
            let event = frontend.poll_events();
            self.handle_event(event);
            if self.state == LoopState::Stopped {
                break;
            }

            self.update();
            self.render();
            frontend.present(self.renderer.as_bytes())?;
            self.frames += 1;

            frontend.wait_for_next_frame();
        }

        tracing::info!(frames = self.frames, "viewer stopped");
        Ok(self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::math::vec3::Vec3;
    use crate::mesh::{Face, LoadOptions};
    use approx::assert_abs_diff_eq;

    /// Frontend that quits after a fixed number of polls.
    struct Scripted {
        polls_before_quit: usize,
        polls: usize,
        presented: Vec<usize>,
        waits: usize,
        fail_present: bool,
    }

    impl Scripted {
        fn quit_after(polls_before_quit: usize) -> Self {
            Self {
                polls_before_quit,
                polls: 0,
                presented: Vec::new(),
                waits: 0,
                fail_present: false,
            }
        }
    }

    impl Frontend for Scripted {
        fn poll_events(&mut self) -> WindowEvent {
            self.polls += 1;
            if self.polls > self.polls_before_quit {
                WindowEvent::Quit
            } else {
                WindowEvent::None
            }
        }

        fn present(&mut self, frame: &[u8]) -> Result<(), String> {
            if self.fail_present {
                return Err("device lost".to_string());
            }
            self.presented.push(frame.len());
            Ok(())
        }

        fn wait_for_next_frame(&mut self) {
            self.waits += 1;
        }
    }

    fn small_config() -> ViewerConfig {
        ViewerConfig {
            width: 64,
            height: 48,
            ..ViewerConfig::default()
        }
    }

    fn triangle_viewer(config: &ViewerConfig) -> Viewer {
        let vertices = [
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(-10.0, -10.0, 0.0),
            Vec3::new(10.0, -10.0, 0.0),
        ];
        Viewer::new(
            VertexBuffer::expand(&vertices, &[Face::new(0, 1, 2)], 1.0),
            config,
        )
    }

    #[test]
    fn quit_on_first_poll_draws_nothing() {
        let mut viewer = triangle_viewer(&small_config());
        let before = viewer.vertices().clone();
        let mut frontend = Scripted::quit_after(0);

        assert_eq!(viewer.run(&mut frontend), Ok(0));
        assert_eq!(viewer.state(), LoopState::Stopped);
        assert!(frontend.presented.is_empty());
        assert_eq!(viewer.vertices(), &before);
    }

    #[test]
    fn runs_one_frame_per_poll_until_quit() {
        let config = small_config();
        let mut viewer = triangle_viewer(&config);
        let mut frontend = Scripted::quit_after(5);

        assert_eq!(viewer.run(&mut frontend), Ok(5));
        assert_eq!(frontend.polls, 6);
        assert_eq!(frontend.waits, 5);
        assert_eq!(frontend.presented, vec![64 * 48 * 4; 5]);
    }

    #[test]
    fn each_frame_spins_the_buffer_once() {
        let config = ViewerConfig {
            spin: Spin::new(Vec3::FORWARD, 18.0),
            ..small_config()
        };
        let mut viewer = triangle_viewer(&config);
        let start = viewer.vertices().vertices()[0];

        viewer.run(&mut Scripted::quit_after(5)).unwrap();

        // 5 * 18 degrees about Z turns (0, 10) into (-10, 0).
        let end = viewer.vertices().vertices()[0];
        assert_abs_diff_eq!(end.x, -start.y, epsilon = 1e-4);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn render_draws_wireframe_into_color_buffer() {
        let config = small_config();
        let mut viewer = triangle_viewer(&config);
        viewer.render();

        let fg = colors::WIREFRAME.to_argb();
        // Apex (0, 10) lands at the viewport center plus offset.
        assert_eq!(viewer.renderer().pixel(32, 34), Some(fg));
        assert_eq!(viewer.renderer().pixel(0, 0), Some(colors::BACKGROUND.to_argb()));
    }

    #[test]
    fn present_failure_is_reported() {
        let mut viewer = triangle_viewer(&small_config());
        let mut frontend = Scripted::quit_after(3);
        frontend.fail_present = true;

        assert_eq!(viewer.run(&mut frontend), Err("device lost".to_string()));
        assert_eq!(viewer.frames(), 0);
    }

    #[test]
    fn from_mesh_expands_with_configured_scale() {
        let mesh = Mesh::parse_obj(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n".as_bytes(),
            &LoadOptions::default(),
        )
        .unwrap();
        let config = ViewerConfig {
            expand_scale: 2.0,
            ..small_config()
        };
        let viewer = Viewer::from_mesh(&mesh, &config);

        assert_eq!(viewer.vertices().len(), 6);
        assert_eq!(viewer.vertices().vertices()[1], mesh.vertices()[1] * 2.0);
    }
}
