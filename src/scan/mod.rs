pub mod cut_map;
pub mod scanner;

pub use cut_map::CutMap;
pub use scanner::Tokenizer;
