use std::collections::BTreeMap;

use crate::variant::TraitCategory;

/// Relative likelihood unit; higher weight = more common.
pub type Weight = u32;

pub const LEGENDARY: Weight = 1;
pub const EPIC: Weight = 2;
pub const RARE: Weight = 3;
pub const UNCOMMON: Weight = 5;
pub const COMMON: Weight = 10;

/// One candidate value with its rarity weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedOption {
    pub label: String,
    pub weight: Weight,
}

impl WeightedOption {
    pub fn new(label: impl Into<String>, weight: Weight) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// Static mapping from category (and, for dependent categories, from the
/// parent's chosen label) to a weighted option set.
///
/// There is no fallback for an unrecognized parent label: the lookup
/// returns an empty set, which the selector treats as a caller error.
#[derive(Clone, Debug, Default)]
pub struct RarityTable {
    base: BTreeMap<TraitCategory, Vec<WeightedOption>>,
    dependent: BTreeMap<TraitCategory, BTreeMap<String, Vec<WeightedOption>>>,
}

impl RarityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_options(&mut self, category: TraitCategory, options: Vec<WeightedOption>) {
        self.base.insert(category, options);
    }

    pub fn set_dependent_options(
        &mut self,
        category: TraitCategory,
        parent_label: impl Into<String>,
        options: Vec<WeightedOption>,
    ) {
        self.dependent
            .entry(category)
            .or_default()
            .insert(parent_label.into(), options);
    }

    /// Options for an independent category; empty if the category is
    /// unmapped.
    pub fn options(&self, category: TraitCategory) -> &[WeightedOption] {
        self.base
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Options for a dependent category under `parent_label`; empty if
    /// either the category or the parent label is unmapped.
    pub fn dependent_options(
        &self,
        category: TraitCategory,
        parent_label: &str,
    ) -> &[WeightedOption] {
        self.dependent
            .get(&category)
            .and_then(|by_parent| by_parent.get(parent_label))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Rarity tables for the avatar variant. Weights are carried over
    /// verbatim from the production trait sheets.
    pub fn avatar() -> Self {
        let mut table = Self::new();

        table.set_options(
            TraitCategory::BackgroundBase,
            weighted(&[
                ("Option 1", EPIC),
                ("Option 2", COMMON),
                ("Option 3", RARE),
                ("Option 4", COMMON),
                ("Option 5", RARE),
                ("Option 6", COMMON),
                ("Option 7", COMMON),
            ]),
        );

        table.set_options(
            TraitCategory::BackgroundFill,
            weighted(&[
                ("Option 1", COMMON),
                ("Option 2", COMMON),
                ("Option 3", COMMON),
            ]),
        );
        set_nested_sub_tables(&mut table, TraitCategory::BackgroundDetail);

        table.set_options(
            TraitCategory::PrimaryFeature,
            weighted(&[
                ("Option 1", RARE),
                ("Option 2", UNCOMMON),
                ("Option 3", EPIC),
                ("Option 4", COMMON),
                ("Option 5", UNCOMMON),
                ("Option 6", COMMON),
                ("Option 7", UNCOMMON),
            ]),
        );
        set_nested_sub_tables(&mut table, TraitCategory::DependentFeature);

        table.set_options(
            TraitCategory::SecondaryFeature,
            weighted(&[
                ("Trait Three Option 1", COMMON),
                ("Trait Three Option 2", UNCOMMON),
                ("Trait Three Option 3", UNCOMMON),
                ("Trait Three Option 4", RARE),
                ("Trait Three Option 5", COMMON),
                ("Trait Three Option 6", COMMON),
                ("Trait Three Option 7", LEGENDARY),
                ("Trait Three Option 8", LEGENDARY),
                ("Trait Three Option 9", EPIC),
            ]),
        );

        table
    }

    /// Rarity tables for the banner variant: the background chain only.
    pub fn banner() -> Self {
        let mut table = Self::new();

        table.set_options(
            TraitCategory::BackgroundBase,
            weighted(&[
                ("Option 1", EPIC),
                ("Option 2", COMMON),
                ("Option 3", RARE),
                ("Option 4", COMMON),
                ("Option 5", RARE),
                ("Option 6", COMMON),
                ("Option 7", COMMON),
            ]),
        );

        table.set_options(
            TraitCategory::BackgroundFill,
            weighted(&[
                ("Option 1", COMMON),
                ("Option 2", COMMON),
                ("Option 3", COMMON),
            ]),
        );
        set_nested_sub_tables(&mut table, TraitCategory::BackgroundDetail);

        table
    }
}

fn weighted(pairs: &[(&str, Weight)]) -> Vec<WeightedOption> {
    pairs
        .iter()
        .map(|(label, weight)| WeightedOption::new(*label, *weight))
        .collect()
}

// Nested rarity: each background/feature fill exposes its own sub-table
// keyed by the parent's chosen label.
fn set_nested_sub_tables(table: &mut RarityTable, category: TraitCategory) {
    table.set_dependent_options(
        category,
        "Option 1",
        weighted(&[
            ("Option 1a", COMMON),
            ("Option 2a", COMMON),
            ("Option 3a", COMMON),
        ]),
    );
    table.set_dependent_options(
        category,
        "Option 2",
        weighted(&[
            ("Option 2a", COMMON),
            ("Option 2b", COMMON),
            ("Option 2c", COMMON),
        ]),
    );
    table.set_dependent_options(
        category,
        "Option 3",
        weighted(&[
            ("Option 3a", COMMON),
            ("Option 3b", COMMON),
            ("Option 3c", COMMON),
        ]),
    );
}
