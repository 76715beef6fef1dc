use super::super::storage::StorageError;
use shared::{CommandError, CommandErrorCode, UnknownStatus};
use thiserror::Error;

/// Manager errors
///
/// Everything except `Storage` is a caller input problem; `Storage` means
/// the state could not be saved and nothing was changed.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("No table selected")]
    NoTableSelected,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order already completed: {0}")]
    TerminalState(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ManagerError {
    /// True when the failure came from persistence rather than caller input
    pub fn is_storage(&self) -> bool {
        matches!(self, ManagerError::Storage(_))
    }
}

impl From<UnknownStatus> for ManagerError {
    fn from(err: UnknownStatus) -> Self {
        ManagerError::InvalidStatus(err.0)
    }
}

/// 将存储错误转换为错误码（前端负责本地化）
fn classify_storage_error(e: &StorageError) -> CommandErrorCode {
    if let StorageError::Serialization(_) = e {
        return CommandErrorCode::StorageCorrupted;
    }

    // redb / io / backend errors are classified by message
    let err_str = e.to_string().to_lowercase();

    if err_str.contains("no space")
        || err_str.contains("disk full")
        || err_str.contains("enospc")
        || err_str.contains("quota")
    {
        return CommandErrorCode::StorageFull;
    }

    if err_str.contains("out of memory") || err_str.contains("cannot allocate") {
        return CommandErrorCode::OutOfMemory;
    }

    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return CommandErrorCode::StorageCorrupted;
    }

    // Database/Transaction/Table/Storage/Commit errors, lock contention
    CommandErrorCode::SystemBusy
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let code = match &err {
            ManagerError::Storage(e) => {
                let code = classify_storage_error(e);
                tracing::error!(error = %e, error_code = ?code, "Storage error occurred");
                code
            }
            ManagerError::InvalidQuantity(_) => CommandErrorCode::InvalidQuantity,
            ManagerError::InvalidPrice(_) => CommandErrorCode::InvalidPrice,
            ManagerError::ItemNotFound(_) => CommandErrorCode::ItemNotFound,
            ManagerError::EmptyCart => CommandErrorCode::EmptyCart,
            ManagerError::NoTableSelected => CommandErrorCode::NoTableSelected,
            ManagerError::OrderNotFound(_) => CommandErrorCode::OrderNotFound,
            ManagerError::TerminalState(_) => CommandErrorCode::TerminalState,
            ManagerError::InvalidStatus(_) => CommandErrorCode::InvalidStatus,
        };
        CommandError::new(code, err.to_string())
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
