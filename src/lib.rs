//! Traitforge generates one composite raster image from a chain of
//! rarity-weighted random traits, plus a metadata attribute record that
//! mirrors the chosen chain.
//!
//! # Pipeline overview
//!
//! 1. **List**: enumerate candidate assets per category from an [`AssetStore`]
//!    in natural sort order
//! 2. **Select**: one weighted draw per category; dependent categories are
//!    re-listed from disk scoped under their parent's resolved asset
//! 3. **Composite**: decode each resolved layer and draw it source-over onto
//!    a fixed-size premultiplied RGBA8 canvas
//! 4. **Assemble**: emit one attribute record per choice, in category order
//!
//! Evaluation is deterministic for a given RNG: the generator never owns a
//! hidden random source, callers thread a [`rand::Rng`] handle through
//! [`Generator::generate_with_rng`].
#![forbid(unsafe_code)]

pub mod catalog;
pub mod compose;
pub mod composite_cpu;
pub mod decode;
pub mod encode;
pub mod error;
pub mod generate;
pub mod metadata;
pub mod rarity;
pub mod select;
pub mod store;
pub mod variant;

pub use catalog::{display_label, format_label, list_assets, natural_cmp, resolve, Asset};
pub use compose::{composite_layers, FrameRgba};
pub use error::{TraitforgeError, TraitforgeResult};
pub use generate::{Generator, TraitChoice};
pub use metadata::{assemble, Attribute, NftRecord};
pub use rarity::{RarityTable, WeightedOption};
pub use select::{seed_from_entropy, weighted_pick};
pub use store::{AssetStore, FsAssetStore};
pub use variant::{CanvasSize, Gender, TraitCategory, Variant, VariantConfig};
