//! Error types for the map model

use super::symbols::SymbolType;
use thiserror::Error;
use uuid::Uuid;

/// Violations of store identity or cross-reference integrity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// An item with this id is already in the store
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: Uuid },

    /// No item with this id is in the store
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    /// Store position outside the current bounds
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Named layer does not exist
    #[error("unknown layer '{0}'")]
    UnknownLayer(String),

    /// A colour reference does not resolve in the map's colour store
    #[error("{owner} references colour {colour} which is not in the map")]
    UnresolvedColour { owner: Uuid, colour: Uuid },

    /// An instance's symbol does not resolve in the map's symbol store
    #[error("instance {instance} references symbol {symbol} which is not in the map")]
    UnresolvedSymbol { instance: Uuid, symbol: Uuid },

    /// An instance variant was paired with the wrong kind of symbol
    #[error("instance {instance} needs a {expected:?} symbol but {symbol} is a {found:?} symbol")]
    SymbolKindMismatch {
        instance: Uuid,
        symbol: Uuid,
        expected: SymbolType,
        found: SymbolType,
    },

    /// Symbol number text is not "a-b-c"
    #[error("invalid symbol number '{0}' (expected a-b-c)")]
    InvalidSymbolNumber(String),
}
