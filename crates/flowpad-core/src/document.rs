//! Reading and writing diagram files for the host application.
//!
//! The widget never owns the text; these helpers exist for whoever does.

use std::path::Path;

use crate::CoreResult;

/// Reads a diagram file. A file that does not exist yet reads as empty, so
/// `flowpad new.mmd` starts a fresh document that is created on first save.
pub fn load(path: impl AsRef<Path>) -> CoreResult<String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::info!("Loaded {} ({} bytes)", path.display(), text.len());
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("{} does not exist yet, starting empty", path.display());
            Ok(String::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes `text` to `path`, creating parent directories.
pub fn save(path: impl AsRef<Path>, text: &str) -> CoreResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;
    tracing::info!("Saved {} ({} bytes)", path.display(), text.len());
    Ok(())
}
