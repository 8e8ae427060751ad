//! Common test utilities for building workflow documents.
use indexmap::IndexMap;
use keiro::prelude::*;

/// Creates a step with no outgoing transitions.
#[allow(dead_code)]
pub fn step(id: &str, name: &str, step_type: &str) -> Step {
    Step {
        id: id.to_string(),
        name: name.to_string(),
        step_type: step_type.to_string(),
        next_step_id: None,
        select_next_step: None,
        inputs: None,
        outputs: None,
    }
}

/// Creates a step with an unconditional successor.
#[allow(dead_code)]
pub fn step_to(id: &str, name: &str, step_type: &str, next: &str) -> Step {
    Step {
        next_step_id: Some(next.to_string()),
        ..step(id, name, step_type)
    }
}

/// Attaches conditional transitions, preserving the given order.
#[allow(dead_code)]
pub fn with_branches(mut step: Step, branches: &[(&str, &str)]) -> Step {
    let mut select = IndexMap::new();
    for (target, condition) in branches {
        select.insert(target.to_string(), condition.to_string());
    }
    step.select_next_step = Some(select);
    step
}

/// Wraps steps in a document with fixed metadata.
#[allow(dead_code)]
pub fn document(steps: Vec<Step>) -> WorkflowDocument {
    WorkflowDocument {
        id: "test-flow".to_string(),
        version: serde_json::json!(3),
        release_version: serde_json::json!("1.4.0"),
        data_type: serde_json::json!("Order"),
        steps,
    }
}

/// A linear three-step document: A -> B -> C via `NextStepId` only.
#[allow(dead_code)]
pub fn linear_document() -> WorkflowDocument {
    document(vec![
        step_to("A", "Fetch - Inventory", "Flows.Steps.ApiCallerStep, Flows.Runtime", "B"),
        step_to(
            "B",
            "Configure - Context",
            "Flows.Steps.ContextConfiguratorStep, Flows.Runtime",
            "C",
        ),
        step("C", "Notify - Customer", "Flows.Steps.MessageSenderStep, Flows.Runtime"),
    ])
}

/// A realistic raw DSL document exercising every input feature: metadata,
/// direct and conditional transitions, inputs/outputs, and one dangling
/// conditional target (`escalate`).
#[allow(dead_code)]
pub const SAMPLE_WORKFLOW_JSON: &str = r#"{
    "Id": "order-flow",
    "Version": 3,
    "ReleaseVersion": "1.4.0",
    "DataType": "Order",
    "Steps": [
        {
            "Id": "check",
            "Name": "Check Stock - Warehouse",
            "StepType": "Flows.Steps.ApiCallerStep, Flows.Runtime, Version=1.0",
            "NextStepId": "decide",
            "Inputs": { "Sku": "ctx.Order.Sku" },
            "Outputs": { "InStock": "ctx.InStock" }
        },
        {
            "Id": "decide",
            "Name": "Decide - Availability",
            "StepType": "Flows.Steps.DecideStep, Flows.Runtime, Version=1.0",
            "NextStepId": "confirm",
            "SelectNextStep": {
                "notify": "ctx.InStock == false",
                "escalate": "ctx.Retries > 3"
            }
        },
        {
            "Id": "confirm",
            "Name": "Confirm - Order",
            "StepType": "Flows.Steps.ContextConfiguratorStep, Flows.Runtime, Version=1.0",
            "NextStepId": "notify"
        },
        {
            "Id": "notify",
            "Name": "Notify - Customer",
            "StepType": "Flows.Steps.MessageSenderStep, Flows.Runtime, Version=1.0",
            "NextStepId": ""
        }
    ]
}"#;
