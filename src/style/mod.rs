//! Visual styling derived from word frequency.
//!
//! The style constants form process-wide configuration, carried as an
//! explicit immutable [`StyleConfig`] value passed into the serializer
//! rather than ambient global state, so tests can supply alternate styles.

use serde::{Deserialize, Serialize};

/// Styling for node labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Font family for the word label
    pub font_family: String,

    /// Label text color
    pub text_color: String,

    /// Ratio of circle diameter to font size
    pub divisor: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            font_family: "Source Sans Pro Semibold".to_string(),
            text_color: "#993300".to_string(),
            divisor: 5.0,
        }
    }
}

/// Styling for graph nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Diameter of a node whose word occurs once
    pub base_diameter: f64,

    /// Fill color of the ellipse
    pub fill_color: String,

    /// Border color of the ellipse
    pub border_color: String,

    /// Border width of the ellipse
    pub border_width: f64,

    /// Label styling
    pub label: LabelStyle,
}

impl Default for NodeStyle {
    fn default() -> Self {
        NodeStyle {
            base_diameter: 50.0,
            fill_color: "#FFCC00".to_string(),
            border_color: "#FF9900".to_string(),
            border_width: 1.0,
            label: LabelStyle::default(),
        }
    }
}

impl NodeStyle {
    /// Calculate a node diameter based on the frequency of its word.
    ///
    /// The square-root curve keeps visual area, not diameter, closer to
    /// linear in frequency. Strictly increasing in `frequency`, and equal
    /// to `base_diameter` when the word occurs once.
    pub fn diameter(&self, frequency: u64) -> f64 {
        self.base_diameter * (frequency as f64).sqrt()
    }

    /// Calculate the label font size for a word of the given frequency.
    pub fn font_size(&self, frequency: u64) -> u32 {
        (self.diameter(frequency) / self.label.divisor).floor() as u32
    }
}

/// Styling for graph edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    /// Line color
    pub color: String,

    /// Line width
    pub width: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        EdgeStyle {
            color: "#333333".to_string(),
            width: 1.0,
        }
    }
}

/// Complete visual configuration for the output document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Node styling
    pub node: NodeStyle,

    /// Edge styling
    pub edge: EdgeStyle,
}
