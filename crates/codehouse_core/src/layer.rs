//! Togglable visual layers of the house illustration.

use serde::Serialize;

/// A togglable visual group of the house illustration.
///
/// The `id` doubles as the DOM key and as the base filename of the layer's SVG asset.
///
/// # Examples
///
/// ```
/// use codehouse_core::Layer;
///
/// let layer = Layer::new("css-design-layer", "CSS Design", false);
///
/// assert_eq!(layer.asset_filename(), "css-design-layer.svg");
/// assert_eq!(layer.placeholder_label(), "Css Design Layer");
/// assert!(!layer.default_visible());
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
pub struct Layer {
    /// Stable kebab-case identifier
    id: String,
    /// Human-readable label
    display_name: String,
    /// Whether the layer is shown before any chapter is selected
    #[builder(default)]
    #[getter(skip)]
    default_visible: bool,
}

impl Layer {
    /// Creates a new layer.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        default_visible: bool,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            default_visible,
        }
    }

    /// Returns a builder for constructing a Layer.
    pub fn builder() -> LayerBuilder {
        LayerBuilder::default()
    }

    /// Whether the layer is shown before any chapter is selected.
    pub fn default_visible(&self) -> bool {
        self.default_visible
    }

    /// Filename of the SVG asset backing this layer.
    pub fn asset_filename(&self) -> String {
        format!("{}.svg", self.id)
    }

    /// Label used when the layer's asset has to be synthesized.
    pub fn placeholder_label(&self) -> String {
        title_case_id(&self.id)
    }
}

/// Turns a kebab-case id into space separated title case.
///
/// Each word keeps its first character uppercased and the rest lowercased.
pub fn title_case_id(id: &str) -> String {
    id.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_splits_on_hyphens() {
        assert_eq!(title_case_id("environment-layer"), "Environment Layer");
        assert_eq!(title_case_id("house-structure"), "House Structure");
        assert_eq!(title_case_id("HTML-tags"), "Html Tags");
        assert_eq!(title_case_id("roof"), "Roof");
    }

    #[test]
    fn title_case_ignores_empty_segments() {
        assert_eq!(title_case_id("a--b"), "A B");
        assert_eq!(title_case_id(""), "");
    }

    #[test]
    fn builder_defaults_to_hidden() {
        let layer = Layer::builder()
            .id("attic")
            .display_name("Attic")
            .build()
            .expect("valid layer");
        assert!(!layer.default_visible());
        assert_eq!(layer.id(), "attic");
    }
}
