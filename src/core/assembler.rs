use crate::domain::model::{EmbedDocument, ResourceSet};
use crate::domain::ports::{Assembler, ConfigProvider, ResourceStore};
use crate::utils::error::Result;
use regex::Regex;

pub const MARKUP_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "style.css";
pub const SCRIPT_FILE: &str = "app.js";

// Exact literals as they appear in the PWA's index.html. Any deviation in
// attributes, quoting or whitespace means the strip is a no-op.
const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="./style.css" />"#;
const MODULE_SCRIPT: &str = r#"<script type="module" src="./app.js"></script>"#;

// Bounded on the next semicolon, so only the first registration statement is
// covered; `[^;]` spans newlines and picks up the multi-line builder chain.
const SERVICE_WORKER_PATTERN: &str = r"navigator\.serviceWorker[^;]*;";
const SERVICE_WORKER_PLACEHOLDER: &str = "// service worker registration removed;";

/// Remove the first occurrence of the stylesheet link and module script tags.
/// The targets are inlined later, so a leftover reference stays harmless.
pub fn strip_asset_references(markup: &str) -> String {
    let markup = markup.replacen(STYLESHEET_LINK, "", 1);
    markup.replacen(MODULE_SCRIPT, "", 1)
}

/// Replace the first service-worker registration statement with a comment.
/// The embedding frame does not support service workers.
pub fn strip_service_worker(script: &str) -> String {
    let re = Regex::new(SERVICE_WORKER_PATTERN).unwrap();
    re.replace(script, SERVICE_WORKER_PLACEHOLDER).into_owned()
}

/// Insert the stylesheet in a style block before the first `</head>`.
/// Without that anchor the insertion is skipped and the stylesheet is dropped.
pub fn inline_stylesheet(markup: &str, stylesheet: &str) -> String {
    markup.replacen(
        "</head>",
        &format!("<style>{}</style>\n</head>", stylesheet),
        1,
    )
}

/// Insert the script in a script block before the first `</body>`.
/// Without that anchor the insertion is skipped and the script is dropped.
pub fn inline_script(markup: &str, script: &str) -> String {
    markup.replacen(
        "</body>",
        &format!("<script>{}</script>\n</body>", script),
        1,
    )
}

pub struct InlineAssembler<S: ResourceStore, C: ConfigProvider> {
    store: S,
    config: C,
}

impl<S: ResourceStore, C: ConfigProvider> InlineAssembler<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self { store, config }
    }
}

impl<S: ResourceStore, C: ConfigProvider> Assembler for InlineAssembler<S, C> {
    fn gather(&self) -> Result<ResourceSet> {
        tracing::debug!("Reading markup asset: {}", MARKUP_FILE);
        let markup = self.store.read_text(MARKUP_FILE)?;

        tracing::debug!("Reading stylesheet asset: {}", STYLESHEET_FILE);
        let stylesheet = self.store.read_text(STYLESHEET_FILE)?;

        tracing::debug!("Reading script asset: {}", SCRIPT_FILE);
        let script = self.store.read_text(SCRIPT_FILE)?;

        Ok(ResourceSet {
            markup,
            stylesheet,
            script,
        })
    }

    fn sanitize(&self, resources: ResourceSet) -> Result<ResourceSet> {
        let markup = strip_asset_references(&resources.markup);
        let script = strip_service_worker(&resources.script);

        Ok(ResourceSet {
            markup,
            stylesheet: resources.stylesheet,
            script,
        })
    }

    fn compose(&self, resources: ResourceSet) -> Result<EmbedDocument> {
        let html = inline_stylesheet(&resources.markup, &resources.stylesheet);
        let html = inline_script(&html, &resources.script);

        Ok(EmbedDocument {
            html,
            height: self.config.height(),
            scrolling: self.config.scrolling(),
        })
    }
}
