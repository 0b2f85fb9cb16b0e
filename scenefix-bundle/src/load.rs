use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use scenefix_rehome::{FsAssetView, rehome_for_file};
use scenefix_types::bundle::{BundleKind, SourceExport};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// A parsed bundle export.
#[derive(Debug, Clone)]
pub struct LoadedBundle {
    /// Where the bundle came from; `None` for clipboard text.
    pub path: Option<Utf8PathBuf>,
    pub kind: BundleKind,
    pub document: Map<String, Value>,
}

impl LoadedBundle {
    /// Tolerant views of the saved sources in a scene bundle. Empty for
    /// exports that carry no `sources` array. Entries that fail to parse are
    /// dropped from the view; the underlying document keeps them.
    pub fn sources(&self) -> Vec<SourceExport> {
        let Some(Value::Array(items)) = self.document.get("sources") else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect()
    }
}

#[derive(Debug, Error, Clone)]
pub enum BundleLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },

    #[error("not a json object at the top level")]
    NotAnObject,
}

/// Parse clipboard text as a bundle. No path repair happens here: pasted text
/// has no originating location to rehome against.
pub fn parse_bundle_text(text: &str) -> Result<LoadedBundle, BundleLoadError> {
    let value: Value = serde_json::from_str(text).map_err(|e| BundleLoadError::Json {
        message: e.to_string(),
    })?;
    let Value::Object(document) = value else {
        return Err(BundleLoadError::NotAnObject);
    };

    let kind = BundleKind::classify(&document);
    debug!(?kind, "parsed bundle");

    Ok(LoadedBundle {
        path: None,
        kind,
        document,
    })
}

/// Read a bundle export from disk and rehome its asset paths against the
/// file's location before handing it back.
pub fn load_bundle_file(path: &Utf8Path) -> Result<LoadedBundle, BundleLoadError> {
    let text = fs::read_to_string(path).map_err(|e| BundleLoadError::Io {
        message: e.to_string(),
    })?;

    let mut bundle = parse_bundle_text(&text)?;
    rehome_for_file(&mut bundle.document, path.as_str(), &FsAssetView);
    bundle.path = Some(path.to_path_buf());

    debug!(path = %path, ?bundle.kind, "loaded bundle");
    Ok(bundle)
}

/// Write a bundle document back as pretty-printed JSON.
pub fn write_bundle_file(path: &Utf8Path, document: &Map<String, Value>) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(document).context("serialize bundle")?;
    fs::write(path, text).with_context(|| format!("write {}", path))?;
    Ok(())
}
