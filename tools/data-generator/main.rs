use clap::Parser;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde_json::{Map, Value, json};
use std::fs;

/// A CLI tool to generate synthetic workflow definitions for testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// The number of steps to generate
    #[arg(long, default_value_t = 12)]
    steps: usize,

    /// Probability (0.0 - 1.0) that a decide step grows conditional branches
    #[arg(long, default_value_t = 0.35)]
    branch: f64,

    /// Probability (0.0 - 1.0) that a transition targets an undefined step
    #[arg(long, default_value_t = 0.0)]
    dangling: f64,
}

const STEP_TYPES: [&str; 4] = [
    "Flows.Steps.ApiCallerStep, Flows.Runtime, Version=1.0",
    "Flows.Steps.ContextConfiguratorStep, Flows.Runtime, Version=1.0",
    "Flows.Steps.DecideStep, Flows.Runtime, Version=1.0",
    "Flows.Steps.MessageSenderStep, Flows.Runtime, Version=1.0",
];

const NAME_SUBJECTS: [&str; 6] = [
    "Inventory",
    "Customer",
    "Payment",
    "Shipment",
    "Invoice",
    "Escalation",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.steps == 0 {
        eprintln!("Error: --steps must be at least 1");
        std::process::exit(1);
    }
    for (flag, value) in [("--branch", cli.branch), ("--dangling", cli.dangling)] {
        if !(0.0..=1.0).contains(&value) {
            eprintln!("Error: {} ({}) must be between 0.0 and 1.0", flag, value);
            std::process::exit(1);
        }
    }

    println!(
        "Generating workflow with {} step(s) (branch p={}, dangling p={})...",
        cli.steps, cli.branch, cli.dangling
    );

    let workflow = generate_workflow(&mut rng, cli.steps, cli.branch, cli.dangling);
    let json_output = serde_json::to_string_pretty(&workflow)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_workflow(rng: &mut ThreadRng, count: usize, branch: f64, dangling: f64) -> Value {
    let steps: Vec<Value> = (0..count)
        .map(|i| generate_step(rng, i, count, branch, dangling))
        .collect();

    json!({
        "Id": format!("generated-{:04}", rng.random_range(0..10_000)),
        "Version": rng.random_range(1..20),
        "ReleaseVersion": format!("1.{}.0", rng.random_range(0..10)),
        "DataType": "SyntheticOrder",
        "Steps": steps,
    })
}

fn generate_step(rng: &mut ThreadRng, i: usize, count: usize, branch: f64, dangling: f64) -> Value {
    let step_type = STEP_TYPES[rng.random_range(0..STEP_TYPES.len())];
    let subject = NAME_SUBJECTS[rng.random_range(0..NAME_SUBJECTS.len())];

    let mut step = Map::new();
    step.insert("Id".to_string(), json!(step_id(i)));
    step.insert(
        "Name".to_string(),
        json!(format!("Step {:02} - {}", i + 1, subject)),
    );
    step.insert("StepType".to_string(), json!(step_type));

    // Chain every step to its successor; the last step stays terminal.
    if i + 1 < count {
        step.insert(
            "NextStepId".to_string(),
            json!(transition_target(rng, i + 1, count, dangling)),
        );
    }

    if step_type.contains("DecideStep") && rng.random_bool(branch) {
        let mut branches = Map::new();
        let branch_count = rng.random_range(1..=3);
        for b in 0..branch_count {
            let pick = rng.random_range(0..count);
            let target = transition_target(rng, pick, count, dangling);
            branches.insert(
                target,
                json!(format!("ctx.Flag{} == {}", b, rng.random_bool(0.5))),
            );
        }
        step.insert("SelectNextStep".to_string(), Value::Object(branches));
    }

    step.insert(
        "Inputs".to_string(),
        json!({ "Subject": subject, "Attempt": rng.random_range(1..4) }),
    );
    step.insert("Outputs".to_string(), json!({ "Status": "Pending" }));

    Value::Object(step)
}

fn step_id(i: usize) -> String {
    format!("step-{:03}", i + 1)
}

/// Picks a transition target, occasionally swapping in an id that no step
/// defines so integrity diagnostics have something to find.
fn transition_target(rng: &mut ThreadRng, preferred: usize, count: usize, dangling: f64) -> String {
    if dangling > 0.0 && rng.random_bool(dangling) {
        format!("ghost-{:03}", rng.random_range(0..1000))
    } else {
        step_id(preferred.min(count - 1))
    }
}
