pub mod loader;
pub mod tables;
pub mod types;

pub use loader::*;
pub use tables::*;
pub use types::*;
