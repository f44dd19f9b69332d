//! mc-launcher
//!
//! Loads the `mc_jni` native module, runs its `compile()` entry point once
//! and reports completion.

use anyhow::{Context, Result};
use mc_launcher_core::{
    Config, ConsoleSurface, DisplaySurface, DynamicLoader, Launcher, SurfaceKind,
};
use mc_launcher_ui::WindowSurface;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_secs()
    .init();

    log::info!("Starting mc-launcher");

    let config = Config::load().context("Failed to load configuration")?;

    let loader = DynamicLoader::new(config.module.search_paths.clone());
    let surface: Box<dyn DisplaySurface> = match config.display.surface {
        SurfaceKind::Window => Box::new(WindowSurface::new(config.display.clone())),
        SurfaceKind::Console => Box::new(ConsoleSurface::stdout()),
    };

    let mut launcher = Launcher::new(config.module, loader, surface);
    let activation = launcher
        .activate()
        .context("Activation failed")?;

    log::info!(
        "{}::{}() finished in {}ms",
        activation.module,
        activation.entry_symbol,
        activation.elapsed().num_milliseconds()
    );

    Ok(())
}
