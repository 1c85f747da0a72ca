use std::fmt;

/// Result type for stocklet-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Item field rejected by save validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
    Price,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Quantity => "quantity",
            Field::Price => "price",
        }
    }
}

/// Error types that can occur in the domain layer
///
/// Everything except `Storage` is recovered locally by the controller
/// and surfaced as a warning on the active screen.
#[derive(Debug)]
pub enum Error {
    /// A checkout quantity was submitted with no item selected
    NoItemSelected,

    /// The checkout quantity did not parse as a non-negative integer
    InvalidQuantity,

    /// An edit-dialog field failed validation
    InvalidField(Field),

    /// Requested checkout quantity exceeds available stock
    InsufficientStock,

    /// No inventory row with this id
    NotFound(i64),

    /// Applying the cart would drive a row's stock below zero
    WouldGoNegative {
        id: i64,
        available: i64,
        requested: i64,
    },

    /// Underlying storage failed
    Storage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoItemSelected => write!(f, "No item selected"),
            Error::InvalidQuantity => write!(f, "Enter a whole-number quantity"),
            Error::InvalidField(field) => write!(f, "Invalid {}", field.as_str()),
            Error::InsufficientStock => write!(f, "Not enough inventory is available"),
            Error::NotFound(id) => write!(f, "No item with id {}", id),
            Error::WouldGoNegative {
                id,
                available,
                requested,
            } => write!(
                f,
                "Not enough inventory is available: item {} has {} in stock, cart needs {}",
                id, available, requested
            ),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
