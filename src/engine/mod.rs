pub mod ai_matcher;
pub mod apply;
pub mod autofill;
pub mod error;
pub mod keyword;
