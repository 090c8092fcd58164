//! Inventory operation errors
//!
//! `Display` 即展示给操作员的 pt-BR 提示文本。

use shared::{AppError, ErrorCode, ProductCode};
use thiserror::Error;

use crate::seed::SeedError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Nome do produto não pode ser vazio.")]
    EmptyName,

    #[error("Preço inválido.")]
    InvalidPrice,

    #[error("Quantidade inválida.")]
    InvalidQuantity,

    #[error("Código inválido.")]
    InvalidCode,

    /// Sell / restock against a code that is not in the record set
    #[error("Código não existe.")]
    UnknownCode(ProductCode),

    /// Query miss
    #[error("Produto não encontrado.")]
    ProductNotFound(ProductCode),

    #[error("Estoque insuficiente. Em estoque: {available}.")]
    InsufficientStock { available: u32, requested: u32 },

    #[error("Quantidade excede o limite de estoque.")]
    StockOverflow,

    #[error("Não há mais códigos disponíveis.")]
    CodesExhausted,

    #[error("Falha ao salvar os dados.")]
    Storage(#[from] StorageError),

    #[error("Falha ao carregar os dados iniciais.")]
    Seed(#[from] SeedError),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

impl InventoryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyName => ErrorCode::ProductNameEmpty,
            Self::InvalidPrice => ErrorCode::InvalidPrice,
            Self::InvalidQuantity => ErrorCode::InvalidQuantity,
            Self::InvalidCode | Self::CodesExhausted => ErrorCode::InvalidProductCode,
            Self::UnknownCode(_) | Self::ProductNotFound(_) => ErrorCode::ProductNotFound,
            Self::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            Self::StockOverflow => ErrorCode::StockOverflow,
            Self::Storage(_) => ErrorCode::DatabaseError,
            Self::Seed(_) => ErrorCode::SeedLoadFailed,
        }
    }

    /// Convert to the unified API error, keeping the operator message
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::with_message(self.code(), self.to_string());
        match self {
            Self::UnknownCode(code) | Self::ProductNotFound(code) => {
                err.with_detail("code", code.get())
            }
            Self::InsufficientStock {
                available,
                requested,
            } => err
                .with_detail("available", *available)
                .with_detail("requested", *requested),
            Self::Storage(source) => err.with_detail("source", source.to_string()),
            Self::Seed(source) => err.with_detail("source", source.to_string()),
            _ => err,
        }
    }
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        err.to_app_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_messages() {
        assert_eq!(
            InventoryError::EmptyName.to_string(),
            "Nome do produto não pode ser vazio."
        );
        assert_eq!(
            InventoryError::InsufficientStock {
                available: 2,
                requested: 5
            }
            .to_string(),
            "Estoque insuficiente. Em estoque: 2."
        );
        let code = ProductCode::new(99).unwrap();
        assert_eq!(InventoryError::UnknownCode(code).to_string(), "Código não existe.");
        assert_eq!(
            InventoryError::ProductNotFound(code).to_string(),
            "Produto não encontrado."
        );
    }

    #[test]
    fn test_app_error_mapping() {
        let err = InventoryError::InsufficientStock {
            available: 2,
            requested: 5,
        }
        .to_app_error();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.http_status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.details.unwrap()["available"], 2);

        let err = AppError::from(InventoryError::InvalidPrice);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Preço inválido.");
    }
}
