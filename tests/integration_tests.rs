use pwa_embed::utils::validation::Validate;
use pwa_embed::{
    AssetDir, CliConfig, EmbedEngine, EmbedError, InlineAssembler, PageFile, TomlConfig,
};
use tempfile::TempDir;

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>MentePyme</title>
<link rel="stylesheet" href="./style.css" />
</head>
<body>
<main id="app"></main>
<script type="module" src="./app.js"></script>
</body>
</html>
"#;

const STYLE_CSS: &str = "body { background: #f5f5f5; }";

const APP_JS: &str = r#"if ('serviceWorker' in navigator) {
  window.addEventListener('load', () => {
    navigator.serviceWorker
      .register('/service-worker.js')
      .catch((err) => console.error('registration failed', err));
  });
}
console.log('app ready');
"#;

fn write_assets(dir: &TempDir, markup: &str, stylesheet: &str, script: &str) {
    std::fs::write(dir.path().join("index.html"), markup).unwrap();
    std::fs::write(dir.path().join("style.css"), stylesheet).unwrap();
    std::fs::write(dir.path().join("app.js"), script).unwrap();
}

fn config_for(assets: &TempDir, out_path: &str) -> CliConfig {
    CliConfig {
        assets_dir: Some(assets.path().to_str().unwrap().to_string()),
        out: Some(out_path.to_string()),
        height: Some(640),
        no_scrolling: false,
        title: Some("MentePyme Demo".to_string()),
        description: Some("Demo de prueba".to_string()),
        config: None,
        verbose: false,
    }
}

fn run_engine(config: CliConfig) -> pwa_embed::Result<String> {
    let store = AssetDir::new(config.assets_dir().to_string());
    let surface = PageFile::new(
        config.output_path().to_string(),
        config.page_title().to_string(),
        config.page_description().to_string(),
    );
    let assembler = InlineAssembler::new(store, config);
    let engine = EmbedEngine::new(assembler, surface);
    engine.run()
}

#[test]
fn test_end_to_end_assembly_with_real_assets() {
    let assets = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("demo.html");

    write_assets(&assets, INDEX_HTML, STYLE_CSS, APP_JS);

    let config = config_for(&assets, out_path.to_str().unwrap());
    let result = run_engine(config);

    assert!(result.is_ok());
    assert!(out_path.exists());

    let written = std::fs::read_to_string(&out_path).unwrap();

    // Shell page carries the configured title, description and frame parameters.
    assert!(written.contains("<title>MentePyme Demo</title>"));
    assert!(written.contains("<p>Demo de prueba</p>"));
    assert!(written.contains(r#"height="640""#));
    assert!(written.contains(r#"scrolling="yes""#));

    // The stylesheet and script are inlined into the embedded document
    // (escaped inside the srcdoc attribute).
    assert!(written.contains("&lt;style&gt;body { background: #f5f5f5; }&lt;/style&gt;"));
    assert!(written.contains("console.log('app ready');"));

    // The external references are gone along with the service worker call.
    assert!(!written.contains("./style.css"));
    assert!(!written.contains("./app.js"));
    assert!(!written.contains("navigator.serviceWorker"));
    assert!(written.contains("// service worker registration removed;"));
}

#[test]
fn test_missing_stylesheet_fails_with_not_found() {
    let assets = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("demo.html");

    std::fs::write(assets.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(assets.path().join("app.js"), APP_JS).unwrap();
    // style.css intentionally absent

    let config = config_for(&assets, out_path.to_str().unwrap());
    let result = run_engine(config);

    assert!(matches!(result, Err(EmbedError::NotFound { .. })));
    assert!(!out_path.exists());
}

#[test]
fn test_no_scrolling_disables_frame_scrolling() {
    let assets = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("demo.html");

    write_assets(&assets, INDEX_HTML, STYLE_CSS, APP_JS);

    let mut config = config_for(&assets, out_path.to_str().unwrap());
    config.no_scrolling = true;
    let result = run_engine(config);

    assert!(result.is_ok());
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains(r#"scrolling="no""#));
}

#[test]
fn test_markup_without_anchors_drops_inlined_content() {
    let assets = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("demo.html");

    write_assets(&assets, "<div>sin estructura</div>", STYLE_CSS, APP_JS);

    let config = config_for(&assets, out_path.to_str().unwrap());
    let result = run_engine(config);

    assert!(result.is_ok());
    let written = std::fs::read_to_string(&out_path).unwrap();

    // No </head> or </body> anchor: nothing is inlined, the markup passes through.
    assert!(written.contains("&lt;div&gt;sin estructura&lt;/div&gt;"));
    assert!(!written.contains("&lt;style&gt;"));
    assert!(!written.contains("console.log('app ready');"));
}

#[test]
fn test_toml_page_config_end_to_end() {
    let assets = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("demo.html");

    write_assets(&assets, INDEX_HTML, STYLE_CSS, APP_JS);

    let config_path = out_dir.path().join("page.toml");
    std::fs::write(
        &config_path,
        r#"
[page]
title = "Titulo del archivo"
description = "Descripcion del archivo"

[embed]
height = 480
scrolling = false
"#,
    )
    .unwrap();

    let mut config = CliConfig {
        assets_dir: Some(assets.path().to_str().unwrap().to_string()),
        out: Some(out_path.to_str().unwrap().to_string()),
        height: None,
        no_scrolling: false,
        title: None,
        description: None,
        config: Some(config_path.to_str().unwrap().to_string()),
        verbose: false,
    };

    let file = TomlConfig::from_file(&config_path).unwrap();
    file.validate().unwrap();
    config.apply_toml(&file);

    let result = run_engine(config);

    assert!(result.is_ok());
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("<title>Titulo del archivo</title>"));
    assert!(written.contains(r#"height="480""#));
    assert!(written.contains(r#"scrolling="no""#));
}
