pub mod engine;
pub mod restore;
pub mod scan;

#[cfg(test)]
mod test_utils;

pub use engine::classifier::Classifier;
pub use engine::config::{CharClass, SeparatorMode, TokenizerConfig};
pub use engine::error::{ConfigError, RestoreError};
pub use restore::{restore, RestoringTokenizer, SeparatorTrace, Tokenized, TraceEntry};
pub use scan::Tokenizer;
