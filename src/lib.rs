pub mod cli;
pub mod error;
pub mod parser;
pub mod reference;
pub mod report;
pub mod ui;

pub use cli::{Cli, Commands};
pub use error::FormatError;
pub use parser::{parse, validate, validation_message, ParsedRecord};
pub use reference::{builtin, CodedValue, ReferenceData, ReferenceTable};
pub use ui::{FormState, UiApp};
