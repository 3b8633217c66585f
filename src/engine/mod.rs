pub mod classifier;
pub mod config;
pub mod error;

pub use classifier::Classifier;
pub use config::{CharClass, SeparatorMode, TokenizerConfig};
pub use error::{ConfigError, RestoreError};
