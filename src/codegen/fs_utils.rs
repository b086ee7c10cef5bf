//! Filesystem utilities for writing generated sources

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write content to a file, creating parent directories if needed
pub fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, contents)
}

/// Resolve the output path for a generated class.
///
/// A directory (existing, or given with a trailing separator) receives
/// `<ClassName>.java`; anything else is used as the file path itself.
pub fn resolve_output_path(output: &Path, class_name: &str) -> PathBuf {
    let looks_like_dir = output.is_dir()
        || output
            .to_str()
            .map(|s| s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR))
            .unwrap_or(false);

    if looks_like_dir {
        output.join(format!("{}.java", class_name))
    } else {
        output.to_path_buf()
    }
}
