use crate::core::{FlowView, Result, Storage};
use crate::site::content::SiteContent;
use crate::site::render::render_document;

/// Renders the page and hands the document to a storage backend.
pub struct PagePublisher<S: Storage> {
    storage: S,
    content: SiteContent,
    filename: String,
}

impl<S: Storage> PagePublisher<S> {
    pub fn new(storage: S, content: SiteContent, filename: impl Into<String>) -> Self {
        Self {
            storage,
            content,
            filename: filename.into(),
        }
    }

    pub async fn publish(&self, view: &FlowView, year: i32) -> Result<String> {
        tracing::debug!("Rendering page for {}", self.content.brand);
        let document = render_document(&self.content, view, year);

        tracing::debug!("Writing {} ({} bytes)", self.filename, document.len());
        self.storage
            .write_file(&self.filename, document.as_bytes())
            .await?;

        Ok(self.filename.clone())
    }
}
