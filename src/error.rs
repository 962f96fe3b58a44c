use thiserror::Error;

/// Structural problems that stop a UWP string from being parsed.
///
/// The `Display` text is the message shown next to the input field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid UWP string provided.")]
    Empty,

    #[error("UWP string format is incorrect. Expected format like 'A865AB7-C'.")]
    CoreTooShort { code: String },

    #[error("UWP string format is incorrect. Expected format like 'A865AB7-C'.")]
    MissingSeparator { code: String, found: char },
}

impl FormatError {
    /// Core code that failed the check, if there was one
    pub fn core_code(&self) -> Option<&str> {
        match self {
            FormatError::Empty => None,
            FormatError::CoreTooShort { code } | FormatError::MissingSeparator { code, .. } => {
                Some(code)
            }
        }
    }
}
