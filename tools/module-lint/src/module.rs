use std::path::{Component, Path};

/// Whether a file belongs to a family module: true iff any path segment
/// starts with the family prefix.
pub fn is_family_module(path: &Path, family_prefix: &str) -> bool {
    path.components().any(|c| match c {
        Component::Normal(segment) => segment
            .to_str()
            .is_some_and(|s| s.starts_with(family_prefix)),
        _ => false,
    })
}

/// Name of the module a file belongs to: the nearest ancestor directory
/// that contains the descriptor file.
pub fn module_name(path: &Path, manifest_filename: &str) -> Option<String> {
    let start = if path.is_file() { path.parent()? } else { path };
    for dir in start.ancestors() {
        if dir.join(manifest_filename).exists() {
            return dir.file_name()?.to_str().map(|s| s.to_string());
        }
    }
    None
}

/// Whether a path sits inside a directory that holds a descriptor file.
pub fn is_module_path(path: &Path, manifest_filename: &str) -> bool {
    module_name(path, manifest_filename).is_some()
}
