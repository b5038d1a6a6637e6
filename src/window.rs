//! SDL2 window, input polling and frame pacing.
//!
//! The window only presents pixels; all drawing happens on the CPU in a
//! [`Renderer`](crate::render::Renderer) whose bytes are uploaded to a
//! streaming texture each frame.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
}

/// What the main loop needs from the outside world each frame.
pub trait Frontend {
    /// Drain pending input; returns [`WindowEvent::Quit`] if any quit request was seen.
    fn poll_events(&mut self) -> WindowEvent;

    /// Show a finished ARGB8888 frame.
    fn present(&mut self, frame: &[u8]) -> Result<(), String>;

    /// Block until the next frame is due.
    fn wait_for_next_frame(&mut self);
}

/// Sleep-based frame pacing toward a target frame rate.
///
/// Not a hard real-time guarantee: frames that run long are not made up.
pub struct FrameLimiter {
    frame_target: Duration,
    previous_frame: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_target: Duration::from_millis(1000 / u64::from(fps.max(1))),
            previous_frame: Instant::now(),
        }
    }

    pub fn frame_target(&self) -> Duration {
        self.frame_target
    }

    /// Waits if necessary to maintain frame rate and returns the time elapsed
    /// since the previous call.
    pub fn wait_and_get_delta(&mut self) -> Duration {
        let mut delta = self.previous_frame.elapsed();

        if delta < self.frame_target {
            std::thread::sleep(self.frame_target - delta);
            delta = self.previous_frame.elapsed();
        }

        self.previous_frame = Instant::now();
        delta
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before `_texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    limiter: FrameLimiter,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32, fps: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // The texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        tracing::debug!(title, width, height, fps, "window created");

        Ok(Self {
            canvas,
            texture,
            _texture_creator: texture_creator,
            event_pump,
            limiter: FrameLimiter::new(fps),
            width,
            height,
        })
    }
}

impl Frontend for Window {
    fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => result = WindowEvent::Quit,
                _ => {}
            }
        }
        result
    }

    fn present(&mut self, frame: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, frame, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    fn wait_for_next_frame(&mut self) {
        self.limiter.wait_and_get_delta();
    }
}
