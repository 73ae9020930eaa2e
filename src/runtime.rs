//! Explicit library initialization.
//!
//! One-time setup is requested by calling [`Runtime::init`] and holding the
//! returned guard. Under the `wasm` feature the first call installs a panic
//! hook that forwards internal faults to the host console; repeated calls
//! are cheap and return another guard to the same runtime.
//!
//! ```
//! use kernel_bench::Runtime;
//!
//! let runtime = Runtime::init();
//! assert!(Runtime::is_initialized());
//! assert_eq!(runtime.version(), env!("CARGO_PKG_VERSION"));
//! ```

use std::sync::Once;

static INIT: Once = Once::new();

/// Handle proving the library has been initialized.
#[derive(Debug, Clone)]
pub struct Runtime {
    _private: (),
}

impl Runtime {
    /// Run one-time setup (idempotent) and return a guard.
    pub fn init() -> Self {
        INIT.call_once(|| {
            #[cfg(feature = "wasm")]
            console_error_panic_hook::set_once();

            tracing::debug!(
                version = env!("CARGO_PKG_VERSION"),
                panic_hook = cfg!(feature = "wasm"),
                "runtime initialized"
            );
        });

        Self { _private: () }
    }

    /// Whether [`Runtime::init`] has completed at least once.
    pub fn is_initialized() -> bool {
        INIT.is_completed()
    }

    /// Crate version this runtime belongs to
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = Runtime::init();
        let second = Runtime::init();
        assert!(Runtime::is_initialized());
        assert_eq!(first.version(), second.version());
    }
}
