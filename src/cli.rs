//! CLI argument parsing for the Pages workflow patcher.
//!
//! Every flag defaults to the fixed Pages literals, so running with no
//! arguments patches `.github/workflows/pages.yml` in the current directory.
use crate::site::{NEXT_STEP_MARKER, PAGES_WORKFLOW_REL, PREPARE_SITE_ANCHOR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pages-patch",
    version,
    about = "Rewrite the Prepare site folder step of a Pages workflow",
    after_help = "Examples:\n  pages-patch\n  pages-patch --workflow ci/pages.yml --dry-run --json\n  pages-patch --anchor 'ANCHOR\\n' --end-marker '\\n\\nNEXT:'"
)]
pub struct RootArgs {
    /// Workflow file to patch in place
    #[arg(long, value_name = "PATH", default_value = PAGES_WORKFLOW_REL)]
    pub workflow: PathBuf,

    /// Literal marking the start of the replaced region (\n and \t are unescaped)
    #[arg(long, value_name = "TEXT", value_parser = parse_literal)]
    pub anchor: Option<String>,

    /// Literal where the untouched tail resumes (\n and \t are unescaped)
    #[arg(long, value_name = "TEXT", value_parser = parse_literal)]
    pub end_marker: Option<String>,

    /// Locate and splice without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the patch outcome as JSON instead of the confirmation line
    #[arg(long)]
    pub json: bool,

    /// Emit debug logs to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl RootArgs {
    pub fn anchor(&self) -> &str {
        self.anchor.as_deref().unwrap_or(PREPARE_SITE_ANCHOR)
    }

    pub fn end_marker(&self) -> &str {
        self.end_marker.as_deref().unwrap_or(NEXT_STEP_MARKER)
    }
}

/// Unescape `\n`, `\t`, and `\\` so multi-line literals fit on a command line.
fn parse_literal(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    if out.is_empty() {
        return Err("literal must not be empty".to_string());
    }
    Ok(out)
}
