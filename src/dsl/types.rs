use indexmap::IndexMap;
use serde::Deserialize;

/// Delimiter used by authoring tools to encode a two-line node label.
const LABEL_DELIMITER: &str = " - ";

/// A complete workflow definition, as authored in the DSL JSON format.
///
/// The metadata fields (`version`, `release_version`, `data_type`) are opaque
/// to the analysis: they are carried for host display only and never
/// interpreted.
#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowDocument {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Version")]
    pub version: serde_json::Value,
    #[serde(alias = "ReleaseVersion")]
    pub release_version: serde_json::Value,
    #[serde(alias = "DataType")]
    pub data_type: serde_json::Value,
    /// Steps in authoring order. The order is irrelevant to graph shape but
    /// is preserved so that derived node/edge sequences are deterministic.
    #[serde(alias = "Steps")]
    pub steps: Vec<Step>,
}

/// A single typed step in the workflow.
#[derive(Debug, Deserialize, Clone)]
pub struct Step {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    /// Qualified runtime type name, e.g.
    /// `"Flows.Steps.DecideStep, Flows.Runtime, Version=1.0"`. See
    /// [`crate::graph::normalize_step_type`] for the display form.
    #[serde(alias = "StepType")]
    pub step_type: String,
    /// Unconditional successor. Absent means the step is terminal.
    #[serde(default, alias = "NextStepId")]
    pub next_step_id: Option<String>,
    /// Conditional successors: target step id mapped to an opaque condition
    /// expression. Iteration order is the authoring order.
    #[serde(default, alias = "SelectNextStep")]
    pub select_next_step: Option<IndexMap<String, String>>,
    #[serde(default, alias = "Inputs")]
    pub inputs: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, alias = "Outputs")]
    pub outputs: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Step {
    /// The unconditional successor id, if one is configured.
    ///
    /// An empty string counts as "not configured": authoring tools emit
    /// `"NextStepId": ""` for terminal steps.
    pub fn next_step(&self) -> Option<&str> {
        self.next_step_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Conditional transitions in authoring order, empty if none exist.
    pub fn conditional_transitions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.select_next_step
            .iter()
            .flatten()
            .map(|(target, condition)| (target.as_str(), condition.as_str()))
    }

    /// Multi-line display label: step names encode up to two label lines
    /// separated by `" - "`. Names without the delimiter are used whole.
    pub fn display_label(&self) -> String {
        self.name.split(LABEL_DELIMITER).collect::<Vec<_>>().join("\n")
    }
}
