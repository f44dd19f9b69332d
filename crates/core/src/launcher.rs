//! Activation: load the native module, run `compile()` once, show the label

use crate::config::ModuleConfig;
use crate::native::{ModuleLoader, NativeError};
use crate::surface::DisplaySurface;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Label rendered after `compile()` returns
pub const FINISH_LABEL: &str = "Finish compilation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherState {
    Created,
    Displayed,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not load native module {module}")]
    ModuleLoad {
        module: String,
        #[source]
        source: NativeError,
    },

    #[error("entry point {symbol} unavailable")]
    EntryPoint {
        symbol: String,
        #[source]
        source: NativeError,
    },

    #[error("could not display completion label")]
    Display(#[source] anyhow::Error),
}

/// Outcome of one successful activation
#[derive(Debug, Clone)]
pub struct Activation {
    pub module: String,
    pub entry_symbol: String,
    pub label: &'static str,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Activation {
    pub fn elapsed(&self) -> Duration {
        self.finished_at.signed_duration_since(self.started_at)
    }
}

pub struct Launcher<L, S> {
    module: ModuleConfig,
    loader: L,
    surface: S,
    state: LauncherState,
}

impl<L: ModuleLoader, S: DisplaySurface> Launcher<L, S> {
    pub fn new(module: ModuleConfig, loader: L, surface: S) -> Self {
        Self {
            module,
            loader,
            surface,
            state: LauncherState::Created,
        }
    }

    pub fn state(&self) -> LauncherState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Load the module, call its entry point, then render [`FINISH_LABEL`].
    ///
    /// Every call repeats all three steps. The label does not depend on what
    /// the entry point did. On error the display step is skipped and the state
    /// is left unchanged.
    pub fn activate(&mut self) -> Result<Activation, LaunchError> {
        let started_at = Utc::now();
        let name = &self.module.name;
        let symbol = &self.module.entry_symbol;

        let entry = self.loader.load(name, symbol).map_err(|e| {
            log::error!("Native module {} unavailable: {}", name, e);
            match e {
                NativeError::Symbol { .. } => LaunchError::EntryPoint {
                    symbol: symbol.clone(),
                    source: e,
                },
                _ => LaunchError::ModuleLoad {
                    module: name.clone(),
                    source: e,
                },
            }
        })?;

        log::info!("Running {}::{}()", name, symbol);
        entry.call();
        log::info!("{}::{}() returned", name, symbol);

        self.surface
            .show_text(FINISH_LABEL)
            .map_err(LaunchError::Display)?;
        self.state = LauncherState::Displayed;

        Ok(Activation {
            module: name.clone(),
            entry_symbol: symbol.clone(),
            label: FINISH_LABEL,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
