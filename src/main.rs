use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod error;
mod logging;
mod patch;
mod site;
mod splice;
mod templates;

use patch::{PatchTarget, Patcher};

fn main() -> Result<()> {
    let args = cli::RootArgs::parse();
    logging::init(args.verbose);

    let mut target = PatchTarget::pages_workflow(args.workflow.clone());
    target.anchor = args.anchor().to_string();
    target.end_marker = args.end_marker().to_string();

    let outcome = Patcher::new(target)
        .dry_run(args.dry_run)
        .run()
        .with_context(|| format!("patch {}", args.workflow.display()))?;

    if args.json {
        let text = serde_json::to_string_pretty(&outcome).context("serialize patch outcome")?;
        println!("{text}");
    } else if outcome.dry_run {
        println!("Would patch {}", outcome.path.display());
    } else {
        println!("Patched {}", outcome.path.display());
    }
    Ok(())
}
