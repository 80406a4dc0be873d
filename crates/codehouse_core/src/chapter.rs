//! Chapter presets selecting a subset of layers.

use serde::Serialize;

/// A named preset that switches on an ordered set of layers.
///
/// # Examples
///
/// ```
/// use codehouse_core::Chapter;
///
/// let chapter = Chapter::new(
///     "Chapter 3: CSS Design",
///     "css-design",
///     "The design layer with visual styling",
///     ["environment-layer", "css-design-layer"],
/// );
///
/// assert_eq!(chapter.preset_key(), "css-design");
/// assert!(chapter.includes("css-design-layer"));
/// assert!(!chapter.includes("systems-layer"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Chapter {
    /// Human-readable chapter title
    display_name: String,
    /// Unique token used as UI and query identifier
    preset_key: String,
    /// Prose shown under the preset button
    #[builder(default)]
    description: String,
    /// Ordered layer ids switched on by this preset
    #[builder(default)]
    layer_ids: Vec<String>,
}

impl Chapter {
    /// Creates a new chapter.
    pub fn new<I, S>(
        display_name: impl Into<String>,
        preset_key: impl Into<String>,
        description: impl Into<String>,
        layer_ids: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            display_name: display_name.into(),
            preset_key: preset_key.into(),
            description: description.into(),
            layer_ids: layer_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a builder for constructing a Chapter.
    pub fn builder() -> ChapterBuilder {
        ChapterBuilder::default()
    }

    /// Whether this preset switches on the given layer.
    pub fn includes(&self, layer_id: &str) -> bool {
        self.layer_ids.iter().any(|id| id == layer_id)
    }

    /// Layer ids joined by spaces, as carried in the preset button's data attribute.
    pub fn layer_list(&self) -> String {
        self.layer_ids.join(" ")
    }
}
