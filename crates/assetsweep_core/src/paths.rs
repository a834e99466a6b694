use log::{debug, trace};
use std::{
    env,
    path::{Component, Path, PathBuf},
};

/// Render `path` relative to `base` with `/` between components.
///
/// Reference strings found in markup always use `/`, so inventory entries and
/// referencing files are rendered the same way on every platform. Returns
/// `None` when `path` is not under `base`.
pub fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(p) => Some(p.to_string_lossy()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Relativize a root-relative path to the current working directory for clickable links
pub fn relativize_to_cwd(root: &Path, relative_to_root: &str) -> String {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => {
            debug!("Failed to get current directory");
            return relative_to_root.to_string();
        }
    };
    trace!("Relativizing '{}' from root {:?} to cwd {:?}", relative_to_root, root, cwd);

    let abs_path = root.join(relative_to_root);
    match make_relative(&abs_path, &cwd) {
        Some(rel_path) => rel_path.to_string_lossy().to_string(),
        None => relative_to_root.to_string(),
    }
}

/// Create a relative path from `base` to `target`
pub fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let mut target_components = target.components();
    let mut base_components = base.components();

    let mut common_prefix_len = 0;
    let mut target_parts = Vec::new();
    let mut base_parts = Vec::new();

    loop {
        match (target_components.next(), base_components.next()) {
            (Some(t), Some(b)) if t == b => {
                common_prefix_len += 1;
            }
            (Some(t), Some(b)) => {
                target_parts.push(t);
                base_parts.push(b);
                break;
            }
            (Some(t), None) => {
                target_parts.push(t);
                break;
            }
            (None, _) => return Some(PathBuf::from(".")),
        }
    }

    target_parts.extend(target_components);
    base_parts.extend(base_components);

    // Paths on different roots (e.g. different drives) have no relative form.
    if common_prefix_len == 0 && target.components().next() != base.components().next() {
        return None;
    }

    let mut result = PathBuf::new();
    for _ in &base_parts {
        result.push("..");
    }
    for component in target_parts {
        match component {
            Component::Normal(p) => result.push(p),
            Component::ParentDir => result.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}
