use crate::TableParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report; printed to stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Include per-line sampling evidence in the report.
    pub include_samples: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Grayscale edge mask produced by the upstream edge detector.
    pub edge_mask: PathBuf,
    /// JSON array of `{ "rho": .., "theta": .. }` lines from the Hough stage.
    pub lines: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: TableParams,
}

impl RuntimeConfig {
    /// Resolve relative input/output paths against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.edge_mask = join(self.edge_mask);
        self.lines = join(self.lines);
        self.output.json_out = self.output.json_out.map(join);
        self
    }
}

/// Load a runtime configuration; relative paths are taken relative to the
/// configuration file's directory.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base))
}
