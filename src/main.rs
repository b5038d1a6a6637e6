use std::process::ExitCode;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use wirespin::config::{Command, ViewerConfig, USAGE};
use wirespin::mesh::Mesh;
use wirespin::viewer::Viewer;
use wirespin::window::Window;

fn init_logging() {
    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cfg!(debug_assertions) { "debug" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match ViewerConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(model = %config.model_path.display(), "starting wirespin");

    let mesh = match Mesh::from_obj(&config.model_path, &config.load) {
        Ok(mesh) => mesh,
        Err(e) => {
            tracing::error!(model = %config.model_path.display(), "failed to load mesh: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut viewer = Viewer::from_mesh(&mesh, &config);

    let mut window = match Window::new(&config.title, config.width, config.height, config.fps) {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("failed to open window: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = viewer.run(&mut window) {
        tracing::error!("rendering failed: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
