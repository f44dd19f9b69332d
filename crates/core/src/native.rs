//! Native module boundary: loading a shared library and calling its entry point

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NativeError {
    #[error("invalid native name {0:?}")]
    InvalidName(String),

    #[error("failed to open native module {name}: {reason}")]
    Open { name: String, reason: String },

    #[error("symbol {symbol} not found in {module}: {reason}")]
    Symbol {
        symbol: String,
        module: String,
        reason: String,
    },

    #[error("dynamic loading is not supported on this platform")]
    Unsupported,
}

/// The `compile()` capability exported by a loaded module.
pub trait NativeEntry {
    /// Invoke the entry point. Blocks until it returns; there is no result.
    fn call(&self);
}

/// Resolves a module name plus entry symbol into something callable.
pub trait ModuleLoader {
    fn load(&self, name: &str, symbol: &str) -> Result<Box<dyn NativeEntry>, NativeError>;
}

/// Platform file name for a module, e.g. `mc_jni` -> `libmc_jni.so`.
pub fn library_file_name(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.dll", name)
    } else if cfg!(target_os = "macos") {
        format!("lib{}.dylib", name)
    } else {
        format!("lib{}.so", name)
    }
}

/// Loader backed by the platform dynamic linker.
#[derive(Debug, Clone, Default)]
pub struct DynamicLoader {
    search_paths: Vec<PathBuf>,
}

impl DynamicLoader {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Paths handed to the dynamic linker, in the order they are tried.
    /// The bare file name comes last so the platform search path applies.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file_name = library_file_name(name);
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .filter(|path| path.exists())
            .chain(std::iter::once(PathBuf::from(&file_name)))
            .collect()
    }
}

impl ModuleLoader for DynamicLoader {
    fn load(&self, name: &str, symbol: &str) -> Result<Box<dyn NativeEntry>, NativeError> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(NativeError::InvalidName(name.to_string()));
        }

        // Configured directories come first, so their failure is the one worth reporting.
        let mut first_error = None;
        for candidate in self.candidates(name) {
            log::debug!("Trying native module at {:?}", candidate);
            // SAFETY: mc_jni's initializers are trusted the same way the host trusts any
            // library it links against.
            match unsafe { LoadedModule::open(&candidate) } {
                Ok(module) => {
                    log::info!("Loaded native module {} from {:?}", name, module.path());
                    let entry = module.entry(symbol)?;
                    return Ok(Box::new(entry));
                }
                Err(e) => {
                    log::debug!("{}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        Err(first_error.unwrap_or(NativeError::Open {
            name: name.to_string(),
            reason: "no candidate paths".to_string(),
        }))
    }
}

/// A library opened for the rest of the process lifetime. The handle is never closed.
#[derive(Debug)]
pub struct LoadedModule {
    path: PathBuf,
    #[cfg(unix)]
    handle: std::ptr::NonNull<libc::c_void>,
}

impl LoadedModule {
    /// Open the library at `path`.
    ///
    /// # Safety
    ///
    /// Opening a library runs its initialization routines; callers must trust them.
    #[cfg(unix)]
    pub unsafe fn open(path: &Path) -> Result<Self, NativeError> {
        use std::os::unix::ffi::OsStrExt;

        let display = path.display().to_string();
        let c_path = std::ffi::CString::new(path.as_os_str().as_bytes())
            .map_err(|_| NativeError::InvalidName(display.clone()))?;

        // SAFETY: `c_path` is a valid C string. The caller accepted the library's initializers.
        let handle = unsafe { libc::dlopen(c_path.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
        match std::ptr::NonNull::new(handle) {
            Some(handle) => Ok(Self {
                path: path.to_path_buf(),
                handle,
            }),
            None => Err(NativeError::Open {
                name: display,
                reason: last_dl_error(),
            }),
        }
    }

    #[cfg(not(unix))]
    pub unsafe fn open(_path: &Path) -> Result<Self, NativeError> {
        Err(NativeError::Unsupported)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `symbol` as an `extern "C" fn()`.
    #[cfg(unix)]
    pub fn entry(&self, symbol: &str) -> Result<DynamicEntry, NativeError> {
        let c_symbol = std::ffi::CString::new(symbol)
            .map_err(|_| NativeError::InvalidName(symbol.to_string()))?;

        // Clear any stale error so a failure below reports this lookup.
        // SAFETY: trivially safe.
        unsafe { libc::dlerror() };

        // SAFETY: `self.handle` is a live handle from dlopen and `c_symbol` is a valid C string.
        let address = unsafe { libc::dlsym(self.handle.as_ptr(), c_symbol.as_ptr()) };
        if address.is_null() {
            return Err(NativeError::Symbol {
                symbol: symbol.to_string(),
                module: self.path.display().to_string(),
                reason: last_dl_error(),
            });
        }

        // SAFETY: `address` is non-null and the module exports `symbol` as `void symbol(void)`.
        let func = unsafe { std::mem::transmute::<*mut libc::c_void, extern "C" fn()>(address) };
        Ok(DynamicEntry {
            symbol: symbol.to_string(),
            func,
        })
    }

    #[cfg(not(unix))]
    pub fn entry(&self, _symbol: &str) -> Result<DynamicEntry, NativeError> {
        Err(NativeError::Unsupported)
    }
}

/// A resolved `void fn(void)` entry point.
#[derive(Debug, Clone)]
pub struct DynamicEntry {
    symbol: String,
    func: extern "C" fn(),
}

impl NativeEntry for DynamicEntry {
    fn call(&self) {
        log::debug!("Calling native {}()", self.symbol);
        (self.func)()
    }
}

#[cfg(unix)]
fn last_dl_error() -> String {
    // SAFETY: trivially safe.
    let error = unsafe { libc::dlerror() };
    if error.is_null() {
        "unknown dynamic linker error".to_string()
    } else {
        // SAFETY: `error` points to a valid C string owned by the dynamic linker.
        unsafe { std::ffi::CStr::from_ptr(error) }
            .to_string_lossy()
            .into_owned()
    }
}
