/// The three asset texts in flight between pipeline stages.
#[derive(Debug, Clone)]
pub struct ResourceSet {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

/// The assembled HTML plus the display parameters handed to the embed surface.
#[derive(Debug, Clone)]
pub struct EmbedDocument {
    pub html: String,
    pub height: u32,
    pub scrolling: bool,
}
