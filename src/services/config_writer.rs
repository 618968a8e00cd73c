use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use crate::errors::{FormError, FormResult};

/// Mode requested for a brand new config file; the process umask still applies.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Persists rendered configs.
///
/// Content goes to a temporary file next to the target and is renamed over it
/// only after a successful write and sync, so the target is either the old file
/// or the complete new one. The temporary file is removed on every failure path.
///
/// An existing target keeps its permission bits. A new one gets the same mode a
/// plain `File::create` would give it.
pub struct ConfigWriter;

impl ConfigWriter {
    pub fn write(path: &Path, content: &str) -> FormResult<()> {
        let display = path.display().to_string();
        let to_write_error = |e: std::io::Error| FormError::write_error(&display, &e.to_string());

        let existing = fs::metadata(path).ok();
        if let Some(metadata) = &existing {
            if metadata.is_dir() {
                return Err(FormError::write_error(&display, "Path is a directory"));
            }
            if metadata.permissions().readonly() {
                return Err(FormError::write_error(&display, "Permission denied: file is read-only"));
            }
        }

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = Self::create_temp(directory).map_err(to_write_error)?;
        if let Some(metadata) = existing {
            temp.as_file().set_permissions(metadata.permissions()).map_err(to_write_error)?;
        }
        temp.write_all(content.as_bytes()).map_err(to_write_error)?;
        temp.as_file().sync_all().map_err(to_write_error)?;
        temp.persist(path).map_err(|e| to_write_error(e.error))?;

        log::info!("✅ Wrote {} bytes to {}", content.len(), display);
        Ok(())
    }

    #[cfg(unix)]
    fn create_temp(directory: &Path) -> std::io::Result<NamedTempFile> {
        use std::os::unix::fs::PermissionsExt;

        Builder::new()
            .permissions(fs::Permissions::from_mode(NEW_FILE_MODE))
            .tempfile_in(directory)
    }

    #[cfg(not(unix))]
    fn create_temp(directory: &Path) -> std::io::Result<NamedTempFile> {
        Builder::new().tempfile_in(directory)
    }
}
