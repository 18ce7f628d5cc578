//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `at-app` and the
//! adapters in `at-infra` (HTTP API, local key-value storage) or the host
//! shell (alerts, media picker, navigation events).

pub mod api;
mod clock;
pub mod errors;
mod events;
mod picker;
pub mod storage;
mod ui;

pub use api::{
    AdminPort, AuthPort, Credentials, InvestorDetailsPort, MediaUploadPort, PostsPort,
    ProfilePort, ReelsPort, Registration, StartupDetailsPort,
};
pub use clock::ClockPort;
pub use errors::{ApiError, PickerError, StorageError};
pub use events::{SetupEventPort, VerificationEventPort};
pub use picker::{MediaKind, MediaPickerPort};
pub use storage::KeyValueStorePort;
pub use ui::{alert_message, AlertPort, GENERIC_ALERT_MESSAGE};
