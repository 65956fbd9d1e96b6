//! Run command
//!
//! Usage: cmdtree run [--input <FILE>] [--tree] [--json]

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use cmdtree_core::render::{render_hierarchy, snapshot_json};
use cmdtree_core::script::run_script_tagged;
use cmdtree_core::{ExError, HierarchyError, HierarchyStore};
use cmdtree_core_types::RequestId;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Script file to read (default: stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the resulting hierarchy as an indented outline after the answers
    #[arg(long)]
    pub tree: bool,

    /// Print the resulting hierarchy as a JSON snapshot after the answers
    #[arg(long)]
    pub json: bool,
}

/// Execute run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request_id = RequestId::new();
    let tag = |e: HierarchyError| ExError::from(e).with_request_id(request_id.clone());

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| tag(HierarchyError::io("open_script", e)))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut store = HierarchyStore::new();
    let summary = run_script_tagged(&mut store, reader, &mut out, &request_id).map_err(tag)?;
    tracing::info!(
        request_id = request_id.as_str(),
        malformed = summary.malformed,
        nodes = store.len(),
        "script finished"
    );

    if args.tree {
        out.write_all(render_hierarchy(&mut store).as_bytes())
            .map_err(|e| tag(HierarchyError::io("write_tree", e)))?;
    }

    if args.json {
        let json = snapshot_json(&mut store).map_err(tag)?;
        writeln!(out, "{}", json).map_err(|e| tag(HierarchyError::io("write_json", e)))?;
    }

    out.flush()
        .map_err(|e| tag(HierarchyError::io("write_answer", e)))?;

    Ok(())
}
