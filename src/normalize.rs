use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and resolve `..` against
/// the accumulated prefix, without touching the filesystem.
///
/// `..` never climbs above the root, so a target like `../../etc` declared
/// against `/project` stops at `/`. Leading `..` segments of a relative
/// path are kept, since there is nothing to resolve them against.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::ParentDir) | None => out.push(".."),
                // RootDir / Prefix: already at the top, drop the `..`.
                _ => {}
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
