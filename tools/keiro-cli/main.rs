use clap::Parser;
use itertools::Itertools;
use keiro::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A workflow DSL analysis and graph model CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow definition JSON file
    workflow_path: Option<String>,

    /// Path the render model JSON is written to
    #[arg(short, long, default_value = "render_model.json")]
    out: String,

    /// Print a per-step analysis of the workflow
    #[arg(short, long)]
    steps: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn run_analysis(workflow_path: String, output_path: String, step_report: bool) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let workflow_json = fs::read_to_string(&workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &workflow_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Schema Validation ---
    let parse_start = Instant::now();
    let document = WorkflowDocument::from_json(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)));
    let parse_duration = parse_start.elapsed();

    println!("\nWorkflow '{}' loaded.", document.id);
    println!("  -> Version:         {}", document.version);
    println!("  -> Release Version: {}", document.release_version);
    println!("  -> Data Type:       {}", document.data_type);

    // --- 3. Graph Construction ---
    let build_start = Instant::now();
    let builder = GraphBuilder::new(&document)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to index workflow steps: {}", e)));
    let (graph, diagnostics) = builder.build();
    let build_duration = build_start.elapsed();

    let direct_edges = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Direct)
        .count();
    println!(
        "Graph built: {} nodes, {} edges ({} direct, {} conditional).",
        graph.node_count(),
        graph.edge_count(),
        direct_edges,
        graph.edge_count() - direct_edges
    );

    if !diagnostics.is_clean() {
        let missing = diagnostics.missing_references.iter().sorted().join(", ");
        println!(
            "Warning: the following steps are referenced but not defined in the workflow: {}",
            missing
        );
    }

    // --- 4. Render Model Assembly ---
    let decorate_start = Instant::now();
    let model = RenderModel::decorate(&graph, &StylePalette::default());
    let model_json = model
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize render model: {}", e)));
    let decorate_duration = decorate_start.elapsed();

    fs::write(&output_path, model_json).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to write render model to '{}': {}",
            &output_path, e
        ))
    });
    println!("  -> Wrote render model to '{}'", output_path);

    if step_report {
        print_step_report(&document, &builder);
    }

    // --- 5. Summary ---
    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:          {:?}", load_duration);
    println!("Parse and Validation:  {:?}", parse_duration);
    println!("Graph Construction:    {:?}", build_duration);
    println!("Render Decoration:     {:?}", decorate_duration);
    println!("---------------------------");
    println!("Total Execution:       {:?}", total_duration);
    println!();
}

/// Prints the per-step analysis: type, direct successor, and conditional
/// transitions with the successor display names resolved through the index.
fn print_step_report(document: &WorkflowDocument, builder: &GraphBuilder) {
    println!("\n--- Workflow Steps ---");
    for step in &document.steps {
        println!("\n{} ({})", step.name, step.id);
        println!("  Type: {}", normalize_step_type(&step.step_type));

        match step.next_step() {
            Some(target) => match builder.index().name_of(target) {
                Some(name) => println!("  Next Step: {} ({})", name, target),
                None => println!("  Next Step: {} (undefined!)", target),
            },
            None => {
                if step.select_next_step.is_some() {
                    println!("  Next Step: see conditional transitions");
                } else {
                    println!("  Next Step: none (end of workflow)");
                }
            }
        }

        for (target, condition) in step.conditional_transitions() {
            let target_name = builder.index().name_of(target).unwrap_or("Unknown");
            println!(
                "  - Next Step: {} ({}), Condition: `{}`",
                target_name, target, condition
            );
        }
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let workflow_path = cli.workflow_path.unwrap_or_else(|| {
        exit_with_error("Workflow path is required in non-interactive mode.");
    });

    run_analysis(workflow_path, cli.out, cli.steps);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Keiro Interactive Mode ---");

    let workflow_path = prompt_for_input("Enter workflow path", Some("data/workflow.json"));
    let output_path = prompt_for_input("Enter render model output path", Some(&cli.out));

    let step_report = loop {
        let choice = prompt_for_input("Print per-step analysis? (y/n)", Some("y"));
        match choice.trim() {
            "y" | "Y" => break true,
            "n" | "N" => break false,
            _ => println!("Invalid choice. Please enter y or n."),
        }
    };

    run_analysis(workflow_path, output_path, step_report);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
