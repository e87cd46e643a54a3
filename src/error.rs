use thiserror::Error;

/// Error types for `StrPack` operations
///
/// Every variant is a synchronous argument-validation failure raised
/// before any buffer mutation takes place, so a failed operation never
/// leaves the pack partially modified.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrPackError {
    /// Delimiter was empty at construction or in `set_delimiter`
    #[error("Invalid delimiter: must be a non-empty string")]
    EmptyDelimiter,
    /// An item or query argument was empty
    #[error("Invalid argument to `{operation}`: must be a non-empty string")]
    EmptyItem {
        /// Operation that rejected the argument
        operation: &'static str,
    },
}
