use itertools::Itertools;
use keiro::prelude::*;
use std::env;
use std::fs;

fn main() {
    // Create output directory
    const TMP_DIR: &str = "tmp";
    if let Err(e) = fs::create_dir_all(TMP_DIR) {
        eprintln!("Failed to create tmp directory: {}", e);
        std::process::exit(1);
    }

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/workflow.json> [path/to/model.json]");
        std::process::exit(1);
    }

    let workflow_path = &args[1];
    let default_output = format!("{}/render_model.json", TMP_DIR);
    let output_path = args.get(2).unwrap_or(&default_output);

    println!("Loading workflow from: {}", workflow_path);
    let workflow_json = match fs::read_to_string(workflow_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read workflow file '{}': {}", workflow_path, e);
            std::process::exit(1);
        }
    };

    // Loading and validation phase
    let document = match WorkflowDocument::from_json(&workflow_json) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Failed to load workflow: {}", e);
            std::process::exit(1);
        }
    };

    println!("\nWorkflow Details");
    println!("  -> Id:              {}", document.id);
    println!("  -> Version:         {}", document.version);
    println!("  -> Release Version: {}", document.release_version);
    println!("  -> Data Type:       {}", document.data_type);
    println!("  -> Steps:           {}", document.steps.len());

    // Graph construction phase
    let builder = match GraphBuilder::new(&document) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Failed to index workflow steps: {}", e);
            std::process::exit(1);
        }
    };
    let (graph, diagnostics) = builder.build();

    println!("\nGraph Built!");
    println!("  -> Nodes: {}", graph.node_count());
    println!("  -> Edges: {}", graph.edge_count());

    if !diagnostics.is_clean() {
        let missing = diagnostics.missing_references.iter().sorted().join(", ");
        println!(
            "Warning: the following steps are referenced but not defined in the workflow: {}",
            missing
        );
    }

    // Render model assembly phase
    let model = RenderModel::decorate(&graph, &StylePalette::default());
    let model_json = match model.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Failed to serialize render model: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::write(output_path, model_json) {
        eprintln!("Failed to write render model to '{}': {}", output_path, e);
        std::process::exit(1);
    }
    println!("  -> Wrote render model to '{}'", output_path);
    println!();
}
