use thiserror::Error;

/// Errors reported by the strict address parsing path.
///
/// The default lookup never produces these; malformed input degrades to an
/// empty result there. Only `OuiPrefix` parsing signals them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OuiError {
    #[error("invalid hardware address format: {0}")]
    InvalidAddressFormat(String),
}
