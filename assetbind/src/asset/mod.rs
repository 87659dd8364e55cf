//! Asset paths and the names derived from them.
//!
//! An [`AssetPath`] is a file discovered under a category root, stored as
//! its UTF-8 segments relative to that root. Everything the generator writes
//! is derived from it:
//!
//! - [`Identifier`]: the flat binding name (`ocean_deep_angler_sprite`)
//! - [`GroupKey`]: the flattened directory chain used for group lists (`ocean_deep`)
//!
//! All naming lives in [`naming`] so the emitter and the tests agree on a
//! single set of rules.

mod naming;
mod path;

pub use naming::{group_key, normalize_segment, synthesize, GroupKey, Identifier, SEPARATOR};
pub use path::{without_cur_dir, AssetPath, AssetPathError};
