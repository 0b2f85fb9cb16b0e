use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tolerant view of one saved source inside a bundle.
///
/// The host writes many more fields (mixers, sync offsets, private data);
/// scenefix only names the ones it inspects and carries the rest verbatim in
/// `extra` so a re-serialized source loses nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceExport {
    #[serde(default)]
    pub name: String,

    /// Source type id, e.g. `ffmpeg_source`.
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Canvas the source was saved from, when the host supports multiple
    /// canvases. Empty or absent for the main canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What kind of export a parsed document looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
    /// A scene or group export: a `sources` array with the scene itself last.
    SceneCollection,

    /// A single source wrapped as `{ "source": { ... } }`.
    WrappedSource,

    /// A bare source export: `id` and `settings` at the top level.
    Source,

    /// A scene item transform export.
    Transform,

    Unknown,
}

impl BundleKind {
    /// Best-effort classification, mirroring the order the host consumes these
    /// shapes: a `sources` array wins, then a wrapped `source` object, then a
    /// bare source, then a transform.
    pub fn classify(doc: &Map<String, Value>) -> Self {
        if doc.get("sources").is_some_and(Value::is_array) {
            return BundleKind::SceneCollection;
        }
        if doc.get("source").is_some_and(Value::is_object) {
            return BundleKind::WrappedSource;
        }
        if doc.get("id").is_some_and(Value::is_string)
            && doc.get("settings").is_some_and(Value::is_object)
        {
            return BundleKind::Source;
        }
        if doc.contains_key("pos") && doc.contains_key("scale") && doc.contains_key("rot") {
            return BundleKind::Transform;
        }
        BundleKind::Unknown
    }
}
