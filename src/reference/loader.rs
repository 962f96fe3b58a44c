use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::tables::builtin;
use super::types::ReferenceData;

/// File name looked up in the per-user configuration directory
pub const USER_REFERENCE_FILE: &str = "reference.json";

/// Where the active reference data came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    /// Given explicitly on the command line
    File(PathBuf),
    /// Found in the per-user configuration directory
    UserConfig(PathBuf),
    Builtin,
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSource::File(path) => write!(f, "{}", path.display()),
            ReferenceSource::UserConfig(path) => write!(f, "{} (user config)", path.display()),
            ReferenceSource::Builtin => write!(f, "built-in tables"),
        }
    }
}

/// Reference data resolved for this process, borrowed from the built-in
/// store unless a file replaced it
#[derive(Debug, Clone)]
pub struct LoadedReference {
    data: Cow<'static, ReferenceData>,
    source: ReferenceSource,
}

impl LoadedReference {
    pub fn builtin() -> Self {
        Self {
            data: Cow::Borrowed(builtin()),
            source: ReferenceSource::Builtin,
        }
    }

    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    pub fn source(&self) -> &ReferenceSource {
        &self.source
    }
}

/// Parse reference data from JSON text
pub fn reference_from_json(json: &str) -> Result<ReferenceData> {
    serde_json::from_str(json).context("Failed to parse reference data JSON")
}

/// Load reference data from a JSON file
pub fn load_reference_file(path: &Path) -> Result<ReferenceData> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reference data: {:?}", path))?;
    reference_from_json(&text).with_context(|| format!("Invalid reference data in {:?}", path))
}

/// Path of the optional per-user reference file
pub fn user_reference_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "uwp-decoder")
        .map(|dirs| dirs.config_dir().join(USER_REFERENCE_FILE))
}

/// Resolve the reference data: explicit file, then user config, then built-in
pub fn resolve_reference(explicit: Option<&Path>) -> Result<LoadedReference> {
    resolve_reference_with(explicit, user_reference_path())
}

/// [`resolve_reference`] with the user config location supplied by the caller
pub fn resolve_reference_with(
    explicit: Option<&Path>,
    user_path: Option<PathBuf>,
) -> Result<LoadedReference> {
    if let Some(path) = explicit {
        let data = load_reference_file(path)?;
        info!("Loaded reference data from {:?}", path);
        return Ok(LoadedReference {
            data: Cow::Owned(data),
            source: ReferenceSource::File(path.to_path_buf()),
        });
    }

    if let Some(path) = user_path.filter(|p| p.is_file()) {
        let data = load_reference_file(&path)?;
        info!("Loaded reference data from {:?}", path);
        return Ok(LoadedReference {
            data: Cow::Owned(data),
            source: ReferenceSource::UserConfig(path),
        });
    }

    debug!("Using built-in reference data");
    Ok(LoadedReference::builtin())
}
