pub mod errors;
pub mod types;

pub use errors::{ChattyError, ConfigError, PlatformError};
pub use types::{Rect, ServiceId, SurfaceId};

pub type Result<T> = std::result::Result<T, ChattyError>;
