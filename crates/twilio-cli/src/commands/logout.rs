//! Logout command implementation.

use anyhow::{Context, Result};

use crate::output;
use crate::profile;

pub fn run() -> Result<()> {
    if profile::clear_profile().context("Failed to clear profile")? {
        output::success("Logged out");
    } else {
        output::success("No stored profile");
    }
    Ok(())
}
