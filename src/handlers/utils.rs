use std::path::{Component, Path, PathBuf};

/// Drop a leading `./` so discovered paths read the way users type them.
/// The result still resolves against the current directory.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    while components.peek() == Some(&Component::CurDir) {
        components.next();
    }
    let cleaned: PathBuf = components.collect();
    if cleaned.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        cleaned
    }
}
