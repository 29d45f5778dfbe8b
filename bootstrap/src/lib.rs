pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod guard;
pub mod memory;
pub mod target;

// Re-export error types for convenience
pub use error::{Error, Result};

pub use app::{App, Mounted, initialize};
pub use config::MountConfig;
pub use document::{Attach, HostDocument};
pub use guard::{MountGuard, MountState, PROCESS_GUARD};
pub use target::MountTarget;
