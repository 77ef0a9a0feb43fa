use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every artifact the CLI writes.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_inputs<I, P>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.inputs
            .extend(inputs.into_iter().map(|p| p.as_ref().to_string_lossy().into_owned()));
        self
    }
}

/// Write `<stem>.<command>.provenance.json` next to `artifact` with the code
/// revision, callsite, params, inputs and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact, payload.command);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": code_rev(),
        "lib_version": lazysets::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

/// Provenance block for `report` (no artifact).
pub fn report_block() -> Value {
    json!({
        "code_rev": code_rev(),
        "lib_version": lazysets::VERSION,
        "commands": ["support", "difference", "hull", "contains"],
        "sidecar": "<stem>.<command>.provenance.json"
    })
}

/// Two commands writing into the same stem keep separate sidecars.
fn sidecar_path(artifact: &Path, command: &str) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from(command));
    name.push(format!(".{command}.provenance.json"));
    artifact.with_file_name(name)
}

/// `LAZYSETS_REV` wins; otherwise `git describe` of the checkout this binary
/// was built from, falling back to the library version.
fn code_rev() -> String {
    if let Some(rev) = std::env::var("LAZYSETS_REV").ok().filter(|r| !r.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("v{}", lazysets::VERSION))
}
