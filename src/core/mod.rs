pub mod engine;
pub mod filter;

pub use crate::domain::model::{FilterOptions, FilteredPathways, GeneSetLibrary, PathwayReport};
pub use crate::domain::ports::{LibrarySource, Storage};
pub use crate::utils::error::Result;
