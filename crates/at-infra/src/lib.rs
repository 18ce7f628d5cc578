pub mod http;
pub mod storage;
pub mod time;

pub use http::{ApiClient, ApiClientConfig};
pub use storage::FileKeyValueStore;
pub use time::SystemClock;
