pub mod ast;
pub mod check;
pub mod fmt;
pub mod get;
pub mod merge;
pub mod source_loader;
