pub mod actions;
pub mod errors;
pub mod types;

pub use actions::{Action, ActionQueue};
pub use errors::{AssetError, BoxesError, ConfigError};
pub use types::{Color, NudgeDirection, PointerButtons, ViewPos};

pub type Result<T> = std::result::Result<T, BoxesError>;
