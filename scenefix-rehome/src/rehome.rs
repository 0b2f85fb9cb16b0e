use crate::ports::AssetView;
use serde_json::{Map, Value};
use tracing::debug;

/// Literal marker some exporters leave in place of a machine-specific
/// directory. Substituted with the base directory verbatim, before any other
/// repair is attempted.
pub const PATH_PLACEHOLDER: &str = "[U_COMBOBULATOR_PATH]";

/// Strings at least this long are never treated as repairable paths.
const MAX_PATH_LEN: usize = 260;

/// Derive the base directories to try for a bundle loaded from `file_name`.
///
/// The containing folder is always tried. When the file name has an extension,
/// the sibling folder named after the file's stem (`MyScene/` next to
/// `MyScene.json`) is tried first, so assets bundled into that folder win.
/// Every derived directory ends with a separator and is later concatenated
/// verbatim with candidate suffixes.
pub fn base_dirs(file_name: &str) -> Vec<String> {
    let mut dirs = Vec::new();
    match file_name.rfind(['/', '\\']) {
        Some(slash) => {
            if let Some(dot) = file_name.rfind('.') {
                if dot > slash {
                    dirs.push(format!("{}/", &file_name[..dot]));
                }
            }
            dirs.push(file_name[..slash + 1].to_string());
        }
        // No separator to split on; keep the name as-is and let the per-value
        // existence checks sort it out.
        None => dirs.push(file_name.to_string()),
    }
    dirs
}

/// Repair `doc` against every base directory derived from `file_name`, in
/// preference order. This is the entry point for file imports; clipboard
/// imports have no originating location and are never rehomed.
pub fn rehome_for_file(doc: &mut Map<String, Value>, file_name: &str, assets: &dyn AssetView) {
    for dir in base_dirs(file_name) {
        rehome_in_place(doc, &dir, assets);
    }
}

/// Walk `doc` and repair string values against `dir`.
///
/// Mutates in place and never fails: a value that cannot be repaired is left
/// unchanged. Keys are never added, removed, or reordered, and container
/// shapes are preserved; only leaf strings change.
pub fn rehome_in_place(doc: &mut Map<String, Value>, dir: &str, assets: &dyn AssetView) {
    // Snapshot the keys so a rewrite cannot disturb the iteration; every key
    // is visited exactly once.
    let keys: Vec<String> = doc.keys().cloned().collect();
    for key in keys {
        match doc.get_mut(&key) {
            Some(Value::String(s)) => {
                if let Some(repaired) = repair_string(s, dir, assets) {
                    debug!(key = %key, from = %s, to = %repaired, "rehomed path");
                    *s = repaired;
                }
            }
            Some(Value::Object(obj)) => rehome_in_place(obj, dir, assets),
            Some(Value::Array(items)) => {
                for item in items.iter_mut() {
                    if let Value::Object(obj) = item {
                        rehome_in_place(obj, dir, assets);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Apply the repair rule to a single string value. Returns the replacement
/// value when anything changed, `None` when the value should stay as-is.
fn repair_string(s: &str, dir: &str, assets: &dyn AssetView) -> Option<String> {
    let mut value = s.to_string();
    let mut changed = false;

    if let Some(at) = value.find(PATH_PLACEHOLDER) {
        value.replace_range(at..at + PATH_PLACEHOLDER.len(), dir);
        changed = true;
    }

    let (body, is_url) = match value.strip_prefix("file://") {
        Some(rest) => (rest, true),
        None => (value.as_str(), false),
    };

    // Already valid, or not path-shaped at all.
    if body.len() >= MAX_PATH_LEN || !body.contains(['/', '\\']) || assets.exists(body) {
        return changed.then_some(value);
    }

    if let Some(repaired) = search_ancestors(body, dir, is_url, assets) {
        return Some(repaired);
    }

    changed.then_some(value)
}

/// Try successively longer filename suffixes of `stale` against `dir`,
/// starting with the bare file name after the last separator and growing
/// toward the start of the string. A candidate without a `.` is a directory
/// name, not a file, and ends the search.
fn search_ancestors(
    stale: &str,
    dir: &str,
    is_url: bool,
    assets: &dyn AssetView,
) -> Option<String> {
    let seps: Vec<usize> = stale.match_indices(['/', '\\']).map(|(i, _)| i).collect();

    let mut suffixes: Vec<&str> = seps.iter().rev().map(|&i| &stale[i + 1..]).collect();
    // Root candidate: the whole string, unless it is rooted at a separator.
    if !stale.starts_with(['/', '\\']) {
        suffixes.push(stale);
    }

    for suffix in suffixes {
        if !suffix.contains('.') {
            return None;
        }

        let candidate = format!("{dir}{suffix}");
        if !assets.exists(&candidate) {
            continue;
        }
        debug!(candidate = %candidate, "found relocated asset");

        let resolved = assets
            .absolute(&candidate)
            .map(|abs| abs.as_str().replace('\\', "/"));

        let repaired = if is_url {
            match resolved {
                Some(abs) => format!("file://{abs}"),
                None => "file://".to_string(),
            }
        } else {
            resolved.unwrap_or_default()
        };
        return Some(repaired);
    }

    None
}
