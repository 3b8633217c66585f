use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Separator set is empty")]
    EmptySeparatorSet,

    #[error("Character class list is empty")]
    EmptyClassList,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    /// The token list does not match the partition the trace was recorded against.
    #[error("Inconsistent restore input: {tokens} tokens for {runs} separator runs")]
    InconsistentInput { tokens: usize, runs: usize },
}
