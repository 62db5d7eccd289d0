use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    catalog,
    compose::{self, FrameRgba},
    error::{TraitforgeError, TraitforgeResult},
    metadata::{self, Attribute},
    select,
    store::AssetStore,
    variant::{CategorySource, TraitCategory, Variant, VariantConfig},
};

/// Result of one selection: the category, the drawn label, and the concrete
/// asset path it resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitChoice {
    pub category: TraitCategory,
    pub label: String,
    pub asset_path: String,
}

/// One-shot generator for a single variant over a single asset store.
///
/// Each generation call is fully sequential and owns its canvas; callers
/// running generations concurrently give each call its own RNG.
pub struct Generator<'a, S: AssetStore> {
    store: &'a S,
    config: VariantConfig,
}

impl<'a, S: AssetStore> Generator<'a, S> {
    pub fn new(store: &'a S, variant: Variant) -> Self {
        Self {
            store,
            config: VariantConfig::for_variant(variant),
        }
    }

    /// Build a generator over an explicit configuration (custom category
    /// chains, canvas sizes, or rarity tables).
    pub fn with_config(store: &'a S, config: VariantConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Generate one image and its attribute list with a self-seeded RNG.
    pub fn generate(&self) -> TraitforgeResult<(FrameRgba, Vec<Attribute>)> {
        let mut rng = StdRng::seed_from_u64(select::seed_from_entropy());
        self.generate_with_rng(&mut rng)
    }

    /// Generate one image and its attribute list, drawing every trait from
    /// the provided RNG. Deterministic for a fixed seed and store.
    pub fn generate_with_rng(
        &self,
        rng: &mut impl Rng,
    ) -> TraitforgeResult<(FrameRgba, Vec<Attribute>)> {
        let choices = self.select_traits(rng)?;

        let layer_paths: Vec<String> = choices.iter().map(|c| c.asset_path.clone()).collect();
        let frame = compose::composite_layers(self.store, self.config.canvas, &layer_paths)?;

        let attributes = metadata::assemble(&self.config, &choices);
        Ok((frame, attributes))
    }

    /// Draw one label per category, in the configured order.
    ///
    /// Dependent categories are handled strictly after their parent: the
    /// parent label is drawn, its asset path resolved, and only then is the
    /// dependent option set listed fresh from the store under a path scoped
    /// to the parent's asset stem.
    pub fn select_traits(&self, rng: &mut impl Rng) -> TraitforgeResult<Vec<TraitChoice>> {
        let mut choices: Vec<TraitChoice> = Vec::with_capacity(self.config.categories.len());

        for spec in &self.config.categories {
            let (assets, options) = match &spec.source {
                CategorySource::Static { dir } => {
                    let assets = catalog::list_assets(self.store, dir)?;
                    let options = self.config.rarity.options(spec.category);
                    (assets, options)
                }
                CategorySource::Dependent { parent, base_dir } => {
                    let parent_choice = choices
                        .iter()
                        .find(|c| c.category == *parent)
                        .ok_or_else(|| {
                            TraitforgeError::no_options(format!(
                                "category {:?} drawn before its parent {:?}",
                                spec.category, parent
                            ))
                        })?;

                    let scoped_dir = format!(
                        "{base_dir}/{}",
                        catalog::file_stem(&parent_choice.asset_path).to_lowercase()
                    );
                    let assets = catalog::list_assets(self.store, &scoped_dir)?;
                    let options = self
                        .config
                        .rarity
                        .dependent_options(spec.category, &parent_choice.label);
                    (assets, options)
                }
            };

            if options.is_empty() {
                return Err(TraitforgeError::no_options(format!(
                    "no weighted options for category {:?}",
                    spec.category
                )));
            }

            let label = select::weighted_pick(rng, options)?.to_string();
            let asset = catalog::resolve(&assets, &label)?;
            tracing::debug!(category = ?spec.category, label = %label, path = %asset.path, "selected trait");

            choices.push(TraitChoice {
                category: spec.category,
                label,
                asset_path: asset.path.clone(),
            });
        }

        Ok(choices)
    }
}
