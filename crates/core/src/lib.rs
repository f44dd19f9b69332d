//! Core library for mc-launcher
//!
//! Loads the `mc_jni` native module, runs its `compile()` entry point and
//! reports completion on a display surface.

pub mod config;
pub mod launcher;
pub mod native;
pub mod surface;

pub use config::{Config, DisplayConfig, ModuleConfig, SurfaceKind};
pub use launcher::{Activation, LaunchError, Launcher, LauncherState, FINISH_LABEL};
pub use native::{DynamicLoader, ModuleLoader, NativeEntry, NativeError};
pub use surface::{ConsoleSurface, DisplaySurface};
