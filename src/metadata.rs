use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    catalog,
    error::TraitforgeResult,
    generate::TraitChoice,
    variant::VariantConfig,
};

/// One metadata attribute, serialized as `{ "trait_type": ..., "value": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

/// Persisted metadata record written next to the output image.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NftRecord {
    pub id: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// Placeholder, string-replaced by tooling once the image is pinned.
    pub image: String,
    pub description: String,
}

impl NftRecord {
    pub fn new(id: usize, attributes: Vec<Attribute>) -> Self {
        Self {
            id: id.to_string(),
            name: format!("NFT Collection Title #{id}"),
            attributes,
            image: "{IPFS_IMAGE_URL}".to_string(),
            description: "Description".to_string(),
        }
    }
}

/// Convert the resolved trait chain into the attribute list, one record per
/// choice in category order, prepended with the variant's synthetic leading
/// record if it has one.
pub fn assemble(config: &VariantConfig, choices: &[TraitChoice]) -> Vec<Attribute> {
    let mut attributes = Vec::with_capacity(choices.len() + 1);

    if let Some((trait_type, value)) = &config.leading_attribute {
        attributes.push(Attribute {
            trait_type: trait_type.clone(),
            value: value.clone(),
        });
    }

    for choice in choices {
        let trait_type = config
            .categories
            .iter()
            .find(|spec| spec.category == choice.category)
            .map(|spec| spec.trait_type.clone())
            .unwrap_or_else(|| format!("{:?}", choice.category));

        attributes.push(Attribute {
            trait_type,
            value: catalog::format_label(&choice.label),
        });
    }

    attributes
}

/// Sibling metadata path: the image path with its extension replaced by
/// `.json`.
pub fn metadata_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("json")
}

/// Serialize and persist the record next to the output image.
pub fn write_record(record: &NftRecord, image_path: &Path) -> TraitforgeResult<()> {
    let path = metadata_path(image_path);
    let json = serde_json::to_vec_pretty(record)
        .context("serialize metadata record")
        .map_err(crate::TraitforgeError::from)?;
    std::fs::write(&path, json)
        .with_context(|| format!("write metadata '{}'", path.display()))?;
    Ok(())
}

/// Count existing `.png` outputs in `dir` to derive the next record id.
///
/// The one deliberately non-fatal failure in the system: an unreadable
/// directory logs a warning and the count defaults to 1.
pub fn count_png_outputs(dir: &Path) -> usize {
    let rd = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "could not count existing outputs");
            return 1;
        }
    };

    let mut count = 1;
    for entry in rd.flatten() {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("png") {
            count += 1;
        }
    }
    count
}
