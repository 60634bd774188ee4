pub mod assembler;
pub mod engine;
pub mod page;

pub use crate::domain::model::{EmbedDocument, ResourceSet};
pub use crate::domain::ports::{Assembler, ConfigProvider, EmbedSurface, ResourceStore};
pub use crate::utils::error::Result;
