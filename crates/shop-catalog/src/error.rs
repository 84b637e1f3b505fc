use shop_core::Name;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product asset {0:?}")]
    DuplicateProduct(Name),

    #[error("duplicate structure asset {0:?}")]
    DuplicateStructure(Name),

    #[error("unknown shelf kind {0:?}")]
    UnknownShelfKind(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
