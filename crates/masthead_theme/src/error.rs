use std::path::PathBuf;

use masthead_tokens::{LoadError, Unresolved};
use thiserror::Error;

use crate::brand::Brand;

/// Failure to build a theme catalog
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no token document named {stem} in {}", .dir.display())]
    MissingDocument { dir: PathBuf, stem: String },

    #[error("{brand}: role {role} did not resolve ({unresolved})")]
    UnresolvedRole {
        brand: Brand,
        role: &'static str,
        unresolved: Unresolved,
    },

    #[error("{brand}: spacing scale {value:?} is not a positive number")]
    InvalidSpacing { brand: Brand, value: String },

    #[error("unknown brand: {0}")]
    UnknownBrand(String),
}
