//! Viewer configuration and command-line parsing.
//!
//! ```text
//! wirespin [OPTIONS] [MODEL.obj]
//! ```

use std::path::PathBuf;

use crate::colors::{self, Color};
use crate::math::vec3::Vec3;
use crate::mesh::LoadOptions;
use crate::transform::Spin;
use crate::window::DEFAULT_FPS;

pub const WINDOW_TITLE: &str = "Wirespin";
pub const WINDOW_WIDTH: u32 = 600;
pub const WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_MODEL_PATH: &str = "assets/cube.obj";

pub const USAGE: &str = "\
Usage: wirespin [OPTIONS] [MODEL.obj]

Spins a wireframe of MODEL.obj (default: assets/cube.obj).

Options:
  --axis <x|y|z>       Spin axis (default: x)
  --speed <DEGREES>    Spin per frame (default: 1)
  --yaw <DEGREES>      Load-time rotation around Y (default: 0)
  --pitch <DEGREES>    Load-time rotation around X (default: 0)
  --roll <DEGREES>     Load-time rotation around Z (default: 0)
  -h, --help           Print this help";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("option `{0}` needs a value")]
    MissingValue(String),
    #[error("option `{flag}` expects a number, got `{value}`")]
    InvalidNumber { flag: String, value: String },
    #[error("unknown axis `{0}`, expected x, y or z")]
    InvalidAxis(String),
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(ViewerConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub model_path: PathBuf,
    /// Centering, scaling and static orientation applied at load.
    pub load: LoadOptions,
    /// Uniform scale applied while expanding faces into the vertex buffer.
    pub expand_scale: f32,
    /// Per-frame rotation, independent of `load.orientation`.
    pub spin: Spin,
    pub background: Color,
    pub foreground: Color,
    pub fps: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            load: LoadOptions::default(),
            expand_scale: 1.0,
            spin: Spin::default(),
            background: colors::BACKGROUND,
            foreground: colors::WIREFRAME,
            fps: DEFAULT_FPS,
        }
    }
}

impl ViewerConfig {
    /// Parse command-line arguments, not including the program name.
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut model_path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--axis" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.spin.axis = parse_axis(&value)?;
                }
                "--speed" => config.spin.degrees_per_frame = number(&arg, args.next())?,
                "--yaw" => config.load.orientation.yaw = number(&arg, args.next())?,
                "--pitch" => config.load.orientation.pitch = number(&arg, args.next())?,
                "--roll" => config.load.orientation.roll = number(&arg, args.next())?,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnknownOption(flag.to_string()));
                }
                _ if model_path.is_none() => model_path = Some(PathBuf::from(&arg)),
                _ => tracing::warn!(argument = %arg, "ignoring extra argument"),
            }
        }

        if let Some(path) = model_path {
            config.model_path = path;
        }
        Ok(Command::Run(config))
    }
}

fn parse_axis(value: &str) -> Result<Vec3, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "x" => Ok(Vec3::RIGHT),
        "y" => Ok(Vec3::UP),
        "z" => Ok(Vec3::FORWARD),
        _ => Err(ConfigError::InvalidAxis(value.to_string())),
    }
}

fn number(flag: &str, value: Option<String>) -> Result<f32, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    match value.parse::<f32>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            flag: flag.to_string(),
            value,
        }),
    }
}
