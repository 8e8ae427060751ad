use ahash::AHashMap;

/// Default fill colors per normalized step type (ColorBrewer Paired).
const DEFAULT_TYPE_COLORS: [(&str, &str); 4] = [
    ("ApiCallerStep", "#1f78b4"),
    ("ContextConfiguratorStep", "#33a02c"),
    ("DecideStep", "#ff7f00"),
    ("MessageSenderStep", "#e31a1c"),
];

/// Fill color for step types without a registration.
const FALLBACK_COLOR: &str = "#a6cee3";

const NODE_SHAPE: &str = "box";

const CONDITIONAL_EDGE_COLOR: &str = "#ffa500";

/// Display attribute registry consulted while decorating a graph.
///
/// The default palette covers the four built-in step types; hosts with
/// custom step types register their colors through [`StylePalette::with_type_color`]:
///
/// ```
/// use keiro::render::StylePalette;
///
/// let palette = StylePalette::default().with_type_color("AuditStep", "#6a3d9a");
/// assert_eq!(palette.color_for("AuditStep"), "#6a3d9a");
/// assert_eq!(palette.color_for("SomethingElse"), "#a6cee3");
/// ```
#[derive(Debug, Clone)]
pub struct StylePalette {
    type_colors: AHashMap<String, String>,
    fallback_color: String,
    node_shape: String,
    conditional_edge_color: String,
}

impl Default for StylePalette {
    fn default() -> Self {
        let type_colors = DEFAULT_TYPE_COLORS
            .iter()
            .map(|(step_type, color)| (step_type.to_string(), color.to_string()))
            .collect();

        Self {
            type_colors,
            fallback_color: FALLBACK_COLOR.to_string(),
            node_shape: NODE_SHAPE.to_string(),
            conditional_edge_color: CONDITIONAL_EDGE_COLOR.to_string(),
        }
    }
}

impl StylePalette {
    /// Registers (or overrides) the fill color for a normalized step type.
    pub fn with_type_color(mut self, step_type: &str, color: &str) -> Self {
        self.type_colors
            .insert(step_type.to_string(), color.to_string());
        self
    }

    /// Replaces the color used for unregistered step types.
    pub fn with_fallback_color(mut self, color: &str) -> Self {
        self.fallback_color = color.to_string();
        self
    }

    /// Fill color for a normalized step type.
    pub fn color_for(&self, normalized_type: &str) -> &str {
        self.type_colors
            .get(normalized_type)
            .map(String::as_str)
            .unwrap_or(&self.fallback_color)
    }

    pub fn node_shape(&self) -> &str {
        &self.node_shape
    }

    pub fn conditional_edge_color(&self) -> &str {
        &self.conditional_edge_color
    }
}
