//! AssetBind - Embedded asset bindings for game projects
//!
//! This library scans directories of binary assets (fonts, sprite images),
//! derives stable identifiers for every file, aggregates them into
//! directory groups and writes a generated source file that embeds each
//! asset as a named binding. It also ships the archive redistributor used to
//! unpack per-species sprite frame bundles into the sprite tree.

pub mod asset;
pub mod category;
pub mod config;
pub mod discovery;
pub mod emit;
pub mod group;
pub mod logging;
pub mod redistribute;
