pub mod errors;
pub mod types;

pub use errors::{ConfigError, GlobeError};
pub use types::{Color, CursorPosition, Viewport};

pub type Result<T> = std::result::Result<T, GlobeError>;
