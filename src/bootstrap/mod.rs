//! Process bootstrap: data directory, configuration, tracing and dependency wiring.

pub mod app_dirs;
pub mod config;
pub mod tracing;
pub mod wiring;

pub use app_dirs::resolve_data_dir;
pub use config::{load_config, resolve_config};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, AppRuntime, HostPorts, WiringError};
