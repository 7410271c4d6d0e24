//! Error types for the rendering pipeline

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// A known gap: text, object-tiled fills, mid-style marker placement
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// A shape's colour is not in the map's colour stack
    #[error("Colour {0} is not in the colour store")]
    UnresolvedColour(Uuid),

    #[error("Instance {instance} references missing symbol {symbol}")]
    UnresolvedSymbol { instance: Uuid, symbol: Uuid },

    /// The instance variant does not fit its symbol variant
    #[error("Instance {instance} cannot be drawn with symbol {symbol}")]
    SymbolKindMismatch { instance: Uuid, symbol: Uuid },
}

pub type Result<T> = std::result::Result<T, RenderError>;
