use crate::error::{PreviewError, Result};
use crate::preview::FileDescriptor;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 把本地路径转换成文件选择，顺序与参数顺序一致
///
/// Directories are skipped unless `recursive` is set, in which case their
/// regular files are added in sorted walk order.
pub fn select_paths<P: AsRef<Path>>(paths: &[P], recursive: bool) -> Result<Vec<FileDescriptor>> {
    let mut selection = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PreviewError::PathNotFound(path.to_path_buf()));
        }

        let metadata = fs::metadata(path)?;
        if metadata.is_file() {
            selection.push(describe(path, &metadata));
        } else if metadata.is_dir() {
            if !recursive {
                warn!(path = %path.display(), "skipping directory, use --recursive to include it");
                continue;
            }
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    PreviewError::Io(e.into_io_error().unwrap_or_else(|| {
                        std::io::Error::other("filesystem loop detected")
                    }))
                })?;
                if entry.file_type().is_file() {
                    let metadata = entry.metadata().map_err(|e| {
                        PreviewError::Io(
                            e.into_io_error()
                                .unwrap_or_else(|| std::io::Error::other("metadata unavailable")),
                        )
                    })?;
                    selection.push(describe(entry.path(), &metadata));
                }
            }
        }
    }

    debug!(files = selection.len(), "built selection from paths");
    Ok(selection)
}

fn describe(path: &Path, metadata: &fs::Metadata) -> FileDescriptor {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let descriptor = FileDescriptor::new(name, metadata.len());
    match metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
    {
        Some(d) => descriptor.with_modified(d.as_secs() as i64),
        None => descriptor,
    }
}
