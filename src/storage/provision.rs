//! Data-directory provisioning.
//!
//! # Responsibilities
//! - Create the data directory and any missing parents
//! - Accept an already-existing directory silently
//! - Refuse paths that exist but are not usable directories

use std::fs;
use std::path::Path;

use crate::error::StorageProvisioningError;

/// Outcome of a successful provisioning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    /// The directory was created by this call.
    Created,
    /// The directory was already present.
    Existing,
}

/// Ensure `path` exists as a directory this process can write to.
///
/// Idempotent: a second call on the same path returns `Provisioned::Existing`.
pub fn provision(path: &Path) -> Result<Provisioned, StorageProvisioningError> {
    let outcome = match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Provisioned::Existing,
        Ok(_) => {
            return Err(StorageProvisioningError::NotADirectory {
                path: path.to_path_buf(),
            })
        }
        Err(_) => {
            fs::create_dir_all(path).map_err(|source| StorageProvisioningError::Create {
                path: path.to_path_buf(),
                source,
            })?;
            Provisioned::Created
        }
    };

    ensure_writable(path)?;

    tracing::debug!(path = %path.display(), ?outcome, "Data directory ready");
    Ok(outcome)
}

fn ensure_writable(path: &Path) -> Result<(), StorageProvisioningError> {
    let meta = fs::metadata(path).map_err(|source| StorageProvisioningError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    if !meta.is_dir() {
        return Err(StorageProvisioningError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    if !writable(path, &meta) {
        return Err(StorageProvisioningError::ReadOnly {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Whether this process may create entries in `path`.
#[cfg(unix)]
fn writable(path: &Path, _meta: &fs::Metadata) -> bool {
    use nix::unistd::{access, AccessFlags};

    match access(path, AccessFlags::W_OK) {
        Ok(()) => true,
        Err(errno) => {
            tracing::debug!(path = %path.display(), %errno, "Write access denied");
            false
        }
    }
}

#[cfg(not(unix))]
fn writable(_path: &Path, meta: &fs::Metadata) -> bool {
    !meta.permissions().readonly()
}
