//! Unified error codes for the Estoque workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Product / stock errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the JSON API and the
/// HTML layer agree on a single numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,

    // ==================== 6xxx: Product ====================
    /// Product not found for the given code
    ProductNotFound = 6001,
    /// Product name is empty
    ProductNameEmpty = 6002,
    /// Price is not a finite non-negative number
    InvalidPrice = 6003,
    /// Quantity is not an acceptable integer
    InvalidQuantity = 6004,
    /// Product code is not a positive integer
    InvalidProductCode = 6005,
    /// Not enough stock to complete a sale
    InsufficientStock = 6006,
    /// Stock would exceed the representable maximum
    StockOverflow = 6007,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Seed document could not be loaded
    SeedLoadFailed = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductNameEmpty => "Product name must not be empty",
            ErrorCode::InvalidPrice => "Invalid price",
            ErrorCode::InvalidQuantity => "Invalid quantity",
            ErrorCode::InvalidProductCode => "Invalid product code",
            ErrorCode::InsufficientStock => "Insufficient stock",
            ErrorCode::StockOverflow => "Stock quantity out of range",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::SeedLoadFailed => "Failed to load seed data",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductNameEmpty),
            6003 => Ok(ErrorCode::InvalidPrice),
            6004 => Ok(ErrorCode::InvalidQuantity),
            6005 => Ok(ErrorCode::InvalidProductCode),
            6006 => Ok(ErrorCode::InsufficientStock),
            6007 => Ok(ErrorCode::StockOverflow),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9101 => Ok(ErrorCode::SeedLoadFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::InsufficientStock.code(), 6006);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::SeedLoadFailed.code(), 9101);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::InsufficientStock).unwrap();
        assert_eq!(json, "6006");

        let json = serde_json::to_string(&ErrorCode::Success).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("6001").unwrap();
        assert_eq!(code, ErrorCode::ProductNotFound);

        let code: ErrorCode = serde_json::from_str("9101").unwrap();
        assert_eq!(code, ErrorCode::SeedLoadFailed);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("3");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("4001");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip_every_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ProductNotFound,
            ErrorCode::ProductNameEmpty,
            ErrorCode::InvalidPrice,
            ErrorCode::InvalidQuantity,
            ErrorCode::InvalidProductCode,
            ErrorCode::InsufficientStock,
            ErrorCode::StockOverflow,
            ErrorCode::DatabaseError,
            ErrorCode::SeedLoadFailed,
        ];

        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::InvalidPrice), "6003");
        assert_eq!(ErrorCode::InvalidPrice.message(), "Invalid price");
        assert_eq!(
            format!("{}", InvalidErrorCode(42)),
            "invalid error code: 42"
        );
    }
}
