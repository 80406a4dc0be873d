//! The validated set of layers and chapters.

use crate::{Chapter, Layer};
use codehouse_error::{ConfigError, ConfigErrorKind, ConfigResult};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, instrument};

static HOUSE: LazyLock<Catalog> = LazyLock::new(Catalog::house);

/// Ordered layers and chapters that drive both the live page and the static export.
///
/// Every catalog built through [`Catalog::new`] satisfies:
/// - layer ids are non-empty and unique
/// - preset keys are non-empty and unique
/// - every chapter layer id names a declared layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct Catalog {
    /// Layers in display order
    layers: Vec<Layer>,
    /// Chapters in display order
    chapters: Vec<Chapter>,
}

impl Catalog {
    /// Builds a catalog after checking its invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use codehouse_core::{Catalog, Chapter, Layer};
    ///
    /// let catalog = Catalog::new(
    ///     vec![Layer::new("a", "A", true)],
    ///     vec![Chapter::new("Base", "base", "", ["a"])],
    /// )
    /// .unwrap();
    /// assert_eq!(catalog.default_chapter().unwrap().preset_key(), "base");
    ///
    /// let dangling = Catalog::new(
    ///     vec![Layer::new("a", "A", true)],
    ///     vec![Chapter::new("Base", "base", "", ["b"])],
    /// );
    /// assert!(dangling.is_err());
    /// ```
    #[instrument(skip_all, fields(layers = layers.len(), chapters = chapters.len()))]
    pub fn new(layers: Vec<Layer>, chapters: Vec<Chapter>) -> ConfigResult<Self> {
        let catalog = Self { layers, chapters };
        catalog.validate()?;
        debug!("Catalog validated");
        Ok(catalog)
    }

    /// The built-in house catalog.
    pub fn house() -> Self {
        let layers = vec![
            Layer::new("environment-layer", "Environment", true),
            Layer::new("house-structure", "House Structure", true),
            Layer::new("html-tags-layer", "HTML Tags", false),
            Layer::new("structure-layer", "HTML Structure", false),
            Layer::new("css-design-layer", "CSS Design", false),
            Layer::new("interactive-layer", "JavaScript Interactivity", false),
            Layer::new("systems-layer", "Backend Systems", false),
        ];

        let chapters = vec![
            Chapter::new(
                "Base House",
                "base",
                "The complete house with all visual elements",
                ["environment-layer", "house-structure"],
            ),
            Chapter::new(
                "Chapter 1: HTML Tags",
                "html-tags",
                "The blueprint layer showing HTML tags",
                ["environment-layer", "house-structure", "html-tags-layer"],
            ),
            Chapter::new(
                "Chapter 2: HTML Structure",
                "html-structure",
                "The structural framing of the house",
                ["environment-layer", "structure-layer"],
            ),
            Chapter::new(
                "Chapter 3: CSS Design",
                "css-design",
                "The design layer with visual styling",
                ["environment-layer", "house-structure", "css-design-layer"],
            ),
            Chapter::new(
                "Chapter 4: JavaScript",
                "javascript",
                "The interactive elements that respond to events",
                ["environment-layer", "house-structure", "interactive-layer"],
            ),
            Chapter::new(
                "Chapter 5: Backend",
                "backend",
                "The internal systems that power the house",
                ["environment-layer", "house-structure", "systems-layer"],
            ),
        ];

        Self { layers, chapters }
    }

    /// Shared instance of the built-in house catalog.
    pub fn shared() -> &'static Catalog {
        &HOUSE
    }

    /// Checks the catalog invariants, reporting the first violation found.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut layer_ids = HashSet::new();
        for (position, layer) in self.layers.iter().enumerate() {
            if layer.id().is_empty() {
                return Err(ConfigError::new(ConfigErrorKind::EmptyLayerId(position)));
            }
            if !layer_ids.insert(layer.id().as_str()) {
                return Err(ConfigError::new(ConfigErrorKind::DuplicateLayer(
                    layer.id().clone(),
                )));
            }
        }

        let mut presets = HashSet::new();
        for (position, chapter) in self.chapters.iter().enumerate() {
            if chapter.preset_key().is_empty() {
                return Err(ConfigError::new(ConfigErrorKind::EmptyPresetKey(position)));
            }
            if !presets.insert(chapter.preset_key().as_str()) {
                return Err(ConfigError::new(ConfigErrorKind::DuplicatePreset(
                    chapter.preset_key().clone(),
                )));
            }
            if let Some(unknown) = chapter
                .layer_ids()
                .iter()
                .find(|id| !layer_ids.contains(id.as_str()))
            {
                return Err(ConfigError::new(ConfigErrorKind::UnknownLayer {
                    preset: chapter.preset_key().clone(),
                    layer: unknown.clone(),
                }));
            }
        }

        Ok(())
    }

    /// Looks up a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    /// Looks up a chapter by preset key.
    pub fn chapter(&self, preset_key: &str) -> Option<&Chapter> {
        self.chapters
            .iter()
            .find(|chapter| chapter.preset_key() == preset_key)
    }

    /// Ids of the layers shown before any chapter is selected, in display order.
    pub fn default_layer_ids(&self) -> Vec<&str> {
        self.layers
            .iter()
            .filter(|layer| layer.default_visible())
            .map(|layer| layer.id().as_str())
            .collect()
    }

    /// The first chapter whose layer set equals the default-visible layer set.
    pub fn default_chapter(&self) -> Option<&Chapter> {
        let defaults: HashSet<&str> = self.default_layer_ids().into_iter().collect();
        self.chapters.iter().find(|chapter| {
            let selected: HashSet<&str> = chapter.layer_ids().iter().map(String::as_str).collect();
            selected == defaults
        })
    }

    /// Whether the given chapter is the default chapter.
    pub fn is_default_chapter(&self, chapter: &Chapter) -> bool {
        self.default_chapter()
            .is_some_and(|default| default.preset_key() == chapter.preset_key())
    }

    /// Expected asset filename for every layer, in display order.
    pub fn asset_filenames(&self) -> Vec<String> {
        self.layers.iter().map(Layer::asset_filename).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::house()
    }
}

/// Layers of the built-in house catalog.
pub fn get_layers() -> &'static [Layer] {
    Catalog::shared().layers()
}

/// Chapters of the built-in house catalog.
pub fn get_chapters() -> &'static [Chapter] {
    Catalog::shared().chapters()
}
