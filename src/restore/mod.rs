pub mod session;
pub mod trace;

pub use session::RestoringTokenizer;
pub use trace::{restore, SeparatorTrace, Tokenized, TraceEntry};
