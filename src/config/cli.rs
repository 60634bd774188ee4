use crate::core::page;
use crate::domain::model::EmbedDocument;
use crate::domain::ports::{EmbedSurface, ResourceStore};
use crate::utils::error::{EmbedError, Result};
use std::fs;
use std::path::Path;

/// Filesystem resource store rooted at the PWA's asset directory.
#[derive(Debug, Clone)]
pub struct AssetDir {
    base_path: String,
}

impl AssetDir {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ResourceStore for AssetDir {
    fn read_text(&self, name: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(name);

        let bytes = fs::read(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => EmbedError::NotFound {
                path: full_path.display().to_string(),
            },
            _ => EmbedError::IoError(e),
        })?;

        String::from_utf8(bytes).map_err(|e| EmbedError::Decode {
            path: full_path.display().to_string(),
            source: e,
        })
    }
}

/// Embed surface that wraps the document in the shell page and writes it to disk.
#[derive(Debug, Clone)]
pub struct PageFile {
    output_path: String,
    title: String,
    description: String,
}

impl PageFile {
    pub fn new(output_path: String, title: String, description: String) -> Self {
        Self {
            output_path,
            title,
            description,
        }
    }
}

impl EmbedSurface for PageFile {
    fn present(&self, document: &EmbedDocument) -> Result<String> {
        let shell = page::render_shell(document, &self.title, &self.description);

        let full_path = Path::new(&self.output_path);
        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(full_path, shell)?;
        Ok(self.output_path.clone())
    }
}
