//! Fixed literals for the Pages workflow's "Prepare site folder" step.
//!
//! The step is rewritten to rebuild `site/`, copy the bundle output into it,
//! and drop a demo page that loads the bundle.
use crate::templates::DEMO_INDEX_HTML;

/// Workflow file patched when no path is given.
pub const PAGES_WORKFLOW_REL: &str = ".github/workflows/pages.yml";

/// Start of the step body; the replaced region begins right after it.
pub const PREPARE_SITE_ANCHOR: &str = "- name: Prepare site folder\n        run: |\n";

/// Blank line followed by the next step in the job.
pub const NEXT_STEP_MARKER: &str = "\n\n      - name:";

/// Indentation of `run: |` body lines inside a job step.
const RUN_INDENT: &str = "          ";

const SITE_DIR: &str = "site";
const DIST_DIR: &str = "dist";
const HEREDOC_TAG: &str = "EOF";

/// Render the replacement `run` body for the Prepare site folder step.
///
/// The demo page is written through a quoted heredoc so the shell leaves
/// `$` and backticks in the HTML alone.
pub fn prepare_site_run() -> String {
    let mut script = vec![
        format!("rm -rf {SITE_DIR}"),
        format!("mkdir -p {SITE_DIR}"),
        format!("cp -R {DIST_DIR} {SITE_DIR}/{DIST_DIR}"),
        format!("cat > {SITE_DIR}/index.html << '{HEREDOC_TAG}'"),
    ];
    script.extend(DEMO_INDEX_HTML.lines().map(str::to_string));
    script.push(HEREDOC_TAG.to_string());

    let mut body = String::new();
    for line in script {
        if !line.is_empty() {
            body.push_str(RUN_INDENT);
            body.push_str(&line);
        }
        body.push('\n');
    }
    body
}
