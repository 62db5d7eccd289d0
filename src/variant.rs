use crate::{
    error::{TraitforgeError, TraitforgeResult},
    rarity::RarityTable,
};

/// Gender selector for the avatar variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Asset directory segment for this gender.
    pub fn dir(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Display value used for the leading metadata record.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Which generator variant to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Square avatar canvas, gendered trait set.
    Avatar(Gender),
    /// Wide banner canvas, background chain only.
    Banner,
}

impl Variant {
    /// Parse a CLI variant selector. Unrecognized input is a usage error.
    pub fn parse_selector(s: &str) -> TraitforgeResult<Self> {
        match s {
            "male" | "m" => Ok(Variant::Avatar(Gender::Male)),
            "female" | "f" => Ok(Variant::Avatar(Gender::Female)),
            "banner" | "b" => Ok(Variant::Banner),
            other => Err(TraitforgeError::unsupported_variant(format!(
                "'{other}' (expected male|m, female|f, or banner|b)"
            ))),
        }
    }
}

/// Layer role of one trait in the composite.
///
/// The declaration order here is the fixed total order used for both
/// selection (so every dependent category's parent is already resolved) and
/// compositing (later categories draw on top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraitCategory {
    BackgroundBase,
    BackgroundFill,
    BackgroundDetail,
    PrimaryFeature,
    DependentFeature,
    SecondaryFeature,
}

/// Fixed output dimensions for one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Where a category's candidate assets come from.
#[derive(Clone, Debug)]
pub enum CategorySource {
    /// Listed once from a fixed directory.
    Static { dir: String },
    /// Listed fresh from `base_dir/<parent stem>` after the parent category
    /// has been drawn and resolved.
    Dependent {
        parent: TraitCategory,
        base_dir: String,
    },
}

/// One category in a variant's chain.
#[derive(Clone, Debug)]
pub struct CategorySpec {
    pub category: TraitCategory,
    /// Human-readable attribute name, e.g. "Composite Trait One".
    pub trait_type: String,
    pub source: CategorySource,
}

impl CategorySpec {
    pub fn fixed(
        category: TraitCategory,
        trait_type: impl Into<String>,
        dir: impl Into<String>,
    ) -> Self {
        Self {
            category,
            trait_type: trait_type.into(),
            source: CategorySource::Static { dir: dir.into() },
        }
    }

    pub fn dependent(
        category: TraitCategory,
        trait_type: impl Into<String>,
        parent: TraitCategory,
        base_dir: impl Into<String>,
    ) -> Self {
        Self {
            category,
            trait_type: trait_type.into(),
            source: CategorySource::Dependent {
                parent,
                base_dir: base_dir.into(),
            },
        }
    }
}

/// Per-variant pipeline configuration: canvas size, ordered category chain,
/// rarity tables, and the optional leading metadata record.
///
/// Avatar and banner share the whole pipeline; only this configuration
/// differs between them.
#[derive(Clone, Debug)]
pub struct VariantConfig {
    pub variant: Variant,
    pub canvas: CanvasSize,
    /// Categories in selection order, which is also draw order.
    pub categories: Vec<CategorySpec>,
    pub rarity: RarityTable,
    /// Synthetic `(trait_type, value)` record prepended to the attribute
    /// list, if the variant has one.
    pub leading_attribute: Option<(String, String)>,
}

impl VariantConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Avatar(gender) => Self::avatar(gender),
            Variant::Banner => Self::banner(),
        }
    }

    fn avatar(gender: Gender) -> Self {
        let g = gender.dir();
        Self {
            variant: Variant::Avatar(gender),
            canvas: CanvasSize {
                width: 4000,
                height: 4000,
            },
            categories: vec![
                CategorySpec::fixed(
                    TraitCategory::BackgroundBase,
                    "Composite Trait One",
                    "backgrounds/composite-trait-one",
                ),
                CategorySpec::fixed(
                    TraitCategory::BackgroundFill,
                    "Composite Trait Two",
                    "backgrounds/composite-trait-two",
                ),
                CategorySpec::dependent(
                    TraitCategory::BackgroundDetail,
                    "Composite Trait Three",
                    TraitCategory::BackgroundFill,
                    "backgrounds/composite-trait-two",
                ),
                CategorySpec::fixed(
                    TraitCategory::PrimaryFeature,
                    "Trait One",
                    format!("{g}/trait-one-options"),
                ),
                CategorySpec::dependent(
                    TraitCategory::DependentFeature,
                    "Trait Two",
                    TraitCategory::PrimaryFeature,
                    format!("{g}/trait-one-dependent"),
                ),
                CategorySpec::fixed(
                    TraitCategory::SecondaryFeature,
                    "Trait Three",
                    format!("{g}/trait-three-options"),
                ),
            ],
            rarity: RarityTable::avatar(),
            leading_attribute: Some(("Gender".to_string(), gender.label().to_string())),
        }
    }

    fn banner() -> Self {
        Self {
            variant: Variant::Banner,
            canvas: CanvasSize {
                width: 1500,
                height: 500,
            },
            categories: vec![
                CategorySpec::fixed(
                    TraitCategory::BackgroundBase,
                    "Composite Trait One",
                    "banner/composite-trait-one",
                ),
                CategorySpec::fixed(
                    TraitCategory::BackgroundFill,
                    "Composite Trait Two",
                    "banner/composite-trait-two",
                ),
                CategorySpec::dependent(
                    TraitCategory::BackgroundDetail,
                    "Composite Trait Three",
                    TraitCategory::BackgroundFill,
                    "banner/composite-trait-two",
                ),
            ],
            rarity: RarityTable::banner(),
            leading_attribute: None,
        }
    }
}
