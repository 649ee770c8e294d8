//! Profile storage for persisting login state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use super::Profile;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Get the profile file path.
pub fn profile_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "twilio").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join("profile.json"))
}

/// Save a profile to disk, readable by the owner only.
pub fn save_profile(profile: &Profile) -> Result<PathBuf> {
    let path = profile_path()?;
    write_profile(&path, profile)?;
    Ok(path)
}

/// Load the stored profile, if there is one.
pub fn load_profile() -> Result<Option<Profile>> {
    read_profile(&profile_path()?)
}

/// Remove the stored profile. Returns false if there was none.
pub fn clear_profile() -> Result<bool> {
    let path = profile_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove profile file")?;
    debug!(path = %path.display(), "profile removed");
    Ok(true)
}

fn write_profile(path: &Path, profile: &Profile) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, &json).context("Failed to write profile file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    debug!(path = %path.display(), "profile saved");
    Ok(())
}

fn read_profile(path: &Path) -> Result<Option<Profile>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read profile file")?;
    let profile = serde_json::from_str(&json).context("Invalid profile file")?;
    Ok(Some(profile))
}
