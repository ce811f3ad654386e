//! Error types for the sheet engine boundary.
//!
//! Stat calculations themselves are infallible. Errors only arise when
//! text from outside the engine (key names, JSON blobs) has to be turned
//! into typed records.

use thiserror::Error;

/// Errors that can occur when parsing sheet data.
///
/// # Examples
///
/// ```rust
/// use essence_sheet::{Attribute, SheetError};
///
/// let err = "charisma".parse::<Attribute>().unwrap_err();
/// assert_eq!(err, SheetError::UnknownAttribute("charisma".to_string()));
/// println!("{}", err); // "Unknown attribute: charisma"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SheetError {
    /// The name does not match any of the three attributes.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The name does not match any of the fourteen abilities.
    #[error("Unknown ability: {0}")]
    UnknownAbility(String),

    /// The name does not match any Exalt type.
    #[error("Unknown exalt type: {0}")]
    UnknownExaltType(String),

    /// The JSON text could not be read as a character record.
    ///
    /// Carries the underlying parser message.
    #[error("Invalid character data: {0}")]
    InvalidCharacter(String),
}

impl From<serde_json::Error> for SheetError {
    fn from(err: serde_json::Error) -> Self {
        SheetError::InvalidCharacter(err.to_string())
    }
}
