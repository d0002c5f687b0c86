//! Read, splice, and write back a single workflow file.
use crate::error::PatchError;
use crate::site;
use crate::splice::splice;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Everything needed to patch one file.
#[derive(Debug, Clone)]
pub struct PatchTarget {
    pub path: PathBuf,
    pub anchor: String,
    pub end_marker: String,
    pub replacement: String,
}

impl PatchTarget {
    /// Target the Prepare site folder step of a Pages workflow at `path`.
    pub fn pages_workflow(path: PathBuf) -> Self {
        Self {
            path,
            anchor: site::PREPARE_SITE_ANCHOR.to_string(),
            end_marker: site::NEXT_STEP_MARKER.to_string(),
            replacement: site::prepare_site_run(),
        }
    }

    fn validate(&self) -> Result<(), PatchError> {
        if self.anchor.is_empty() {
            return Err(PatchError::InvalidLiteral { name: "anchor" });
        }
        if self.end_marker.is_empty() {
            return Err(PatchError::InvalidLiteral { name: "end marker" });
        }
        Ok(())
    }
}

/// Machine-readable summary of a patch run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub insert_at: usize,
    pub resume_at: usize,
    pub end_marker_found: bool,
    pub removed_bytes: usize,
    pub inserted_bytes: usize,
    /// False when the spliced text already matched the file.
    pub changed: bool,
    pub dry_run: bool,
}

pub struct Patcher {
    target: PatchTarget,
    dry_run: bool,
}

impl Patcher {
    pub fn new(target: PatchTarget) -> Self {
        Self {
            target,
            dry_run: false,
        }
    }

    /// Compute the outcome without writing the file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<PatchOutcome, PatchError> {
        let target = &self.target;
        target.validate()?;
        let document = read_document(&target.path)?;

        let spliced = splice(
            &document,
            &target.anchor,
            &target.end_marker,
            &target.replacement,
        )
        .ok_or_else(|| PatchError::AnchorNotFound {
            path: target.path.clone(),
        })?;
        let span = spliced.span;
        if !span.end_marker_found {
            tracing::warn!(
                path = %target.path.display(),
                removed_bytes = span.removed_len(),
                "end marker not found; replacing through end of file"
            );
        }

        let changed = spliced.text != document;
        tracing::debug!(
            path = %target.path.display(),
            insert_at = span.insert_at,
            resume_at = span.resume_at,
            changed,
            "located patch region"
        );

        if changed && !self.dry_run {
            fs::write(&target.path, spliced.text.as_bytes()).map_err(|source| {
                PatchError::WriteError {
                    path: target.path.clone(),
                    source,
                }
            })?;
            tracing::info!(path = %target.path.display(), "wrote patched workflow");
        }

        Ok(PatchOutcome {
            path: target.path.clone(),
            insert_at: span.insert_at,
            resume_at: span.resume_at,
            end_marker_found: span.end_marker_found,
            removed_bytes: span.removed_len(),
            inserted_bytes: target.replacement.len(),
            changed,
            dry_run: self.dry_run,
        })
    }
}

fn read_document(path: &Path) -> Result<String, PatchError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PatchError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PatchError::ReadError {
            path: path.to_path_buf(),
            source,
        },
    })
}
