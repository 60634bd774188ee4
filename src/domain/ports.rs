use crate::domain::model::{EmbedDocument, ResourceSet};
use crate::utils::error::Result;

pub trait ResourceStore: Send + Sync {
    fn read_text(&self, name: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn assets_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_title(&self) -> &str;
    fn page_description(&self) -> &str;
    fn height(&self) -> u32;
    fn scrolling(&self) -> bool;
}

pub trait Assembler: Send + Sync {
    fn gather(&self) -> Result<ResourceSet>;
    fn sanitize(&self, resources: ResourceSet) -> Result<ResourceSet>;
    fn compose(&self, resources: ResourceSet) -> Result<EmbedDocument>;
}

pub trait EmbedSurface: Send + Sync {
    fn present(&self, document: &EmbedDocument) -> Result<String>;
}
