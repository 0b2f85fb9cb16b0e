use serde::{Deserialize, Serialize};

/// A 2D vector as the host serializes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A scene item transform export.
///
/// Field names are schema-exact: the host reads this document back field by
/// field, and every field defaults when absent, so a partial transform is
/// still loadable. Crop edges live at the top level alongside the geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformExport {
    #[serde(default)]
    pub crop_to_bounds: bool,

    #[serde(default)]
    pub pos: Vec2,

    #[serde(default)]
    pub scale: Vec2,

    #[serde(default)]
    pub rot: f64,

    #[serde(default)]
    pub alignment: i64,

    #[serde(default)]
    pub bounds_type: i64,

    #[serde(default)]
    pub bounds: Vec2,

    #[serde(default)]
    pub bounds_alignment: i64,

    #[serde(default)]
    pub top: i64,

    #[serde(default)]
    pub bottom: i64,

    #[serde(default)]
    pub left: i64,

    #[serde(default)]
    pub right: i64,
}
