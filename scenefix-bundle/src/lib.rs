//! Bundle ingestion.
//!
//! scenefix consumes JSON exports produced by a live-production host. It is
//! intentionally tolerant here: classification is best effort, unknown fields
//! pass through untouched, and the only mutation ever applied is path
//! rehoming on file imports. Pasted text has no originating location, so it
//! is parsed as-is.

mod load;

pub use load::{
    BundleLoadError, LoadedBundle, load_bundle_file, parse_bundle_text, write_bundle_file,
};
