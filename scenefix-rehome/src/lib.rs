//! Asset path repair for relocated scene bundles.
//!
//! A bundle export references media by the absolute paths it had on the
//! machine that exported it. When the bundle is copied elsewhere (typically as
//! `MyScene.json` plus a `MyScene/` folder of assets), those paths go stale.
//! This crate walks the bundle's JSON and rewrites path-shaped string values
//! so they point at files relocated next to the bundle, when such files exist.
//!
//! Repairs are best effort by contract: a value that cannot be repaired is
//! left unchanged, and no error ever reaches the caller. The walk only ever
//! rewrites leaf string values; keys, ordering, and nesting are untouched.

mod ports;
mod rehome;

pub use ports::{AssetView, FsAssetView};
pub use rehome::{PATH_PLACEHOLDER, base_dirs, rehome_for_file, rehome_in_place};
