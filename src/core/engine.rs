use crate::domain::ports::{Assembler, EmbedSurface};
use crate::utils::error::Result;

pub struct EmbedEngine<A: Assembler, E: EmbedSurface> {
    assembler: A,
    surface: E,
}

impl<A: Assembler, E: EmbedSurface> EmbedEngine<A, E> {
    pub fn new(assembler: A, surface: E) -> Self {
        Self { assembler, surface }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting demo page assembly");

        let resources = self.assembler.gather()?;
        tracing::info!(
            "Gathered assets ({} + {} + {} bytes)",
            resources.markup.len(),
            resources.stylesheet.len(),
            resources.script.len()
        );

        let resources = self.assembler.sanitize(resources)?;
        tracing::info!("Sanitized assets");

        let document = self.assembler.compose(resources)?;
        tracing::info!("Composed document ({} bytes)", document.html.len());

        let location = self.surface.present(&document)?;
        tracing::info!("Presented document at: {}", location);

        Ok(location)
    }
}
