//! Demo command
//!
//! Usage: cmdtree demo [--target <NAME>] [--command <TEXT>] [--json]

use clap::Args;
use cmdtree_core::propagation::{
    propagate, sample_influence_graph, SAMPLE_COMMAND, SAMPLE_ISSUER, SAMPLE_TARGET,
};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Person the issuer commands directly
    #[arg(short, long, default_value = SAMPLE_TARGET)]
    pub target: String,

    /// Command handed to the target
    #[arg(short, long, default_value = SAMPLE_COMMAND)]
    pub command: String,

    /// Print the propagation tree as JSON instead of an outline
    #[arg(long)]
    pub json: bool,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let graph = sample_influence_graph();
    let tree = propagate(&graph, SAMPLE_ISSUER, &args.target, &args.command);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        println!("Geass Command Tree:");
        print!("{}", tree.render());
    }

    Ok(())
}
