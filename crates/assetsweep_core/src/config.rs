use anyhow::{Result, anyhow};
use log::{debug, trace};
use path_clean::clean;
use std::{
    env,
    path::{Path, PathBuf},
};

pub fn find_git_root() -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}

/// Clean a user-supplied directory path, canonicalizing it when it exists.
///
/// Paths that do not exist are returned cleaned but otherwise untouched so
/// callers can report them as missing.
pub fn resolve_dir(path: &Path) -> PathBuf {
    let cleaned = clean(path);
    match cleaned.canonicalize() {
        Ok(canonical) => {
            trace!("Resolved {:?} to {:?}", path, canonical);
            canonical
        }
        Err(_) => {
            trace!("{:?} does not resolve, keeping cleaned path {:?}", path, cleaned);
            cleaned
        }
    }
}
