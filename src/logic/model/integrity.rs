//! Asset Integrity Guard
//!
//! A model file may ship with a `<name>.sha256` sidecar containing the
//! expected digest (first whitespace-separated token, `sha256sum` format).
//! When present, the digest is verified at load time; a mismatch means the
//! asset is corrupt and loading fails. Without a sidecar the check is a
//! no-op.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use super::AssetError;

/// Verify `path` against its `.sha256` sidecar, if one exists
pub fn verify_sidecar(path: &Path) -> Result<(), AssetError> {
    let sidecar = sidecar_path(path);
    if !sidecar.exists() {
        return Ok(());
    }

    let raw = std::fs::read_to_string(&sidecar).map_err(|source| AssetError::Io {
        path: sidecar.display().to_string(),
        source,
    })?;
    let expected = raw.split_whitespace().next().unwrap_or("").to_lowercase();

    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let actual = hex::encode(Sha256::digest(&bytes));

    if expected != actual {
        return Err(AssetError::ChecksumMismatch(path.display().to_string()));
    }

    tracing::debug!("Checksum verified for {}", path.display());
    Ok(())
}

fn sidecar_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".sha256");
    PathBuf::from(os)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_no_sidecar_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("model.onnx");
        fs::write(&asset, b"model bytes").unwrap();

        assert!(verify_sidecar(&asset).is_ok());
    }

    #[test]
    fn test_matching_sidecar_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("model.onnx");
        fs::write(&asset, b"model bytes").unwrap();

        let digest = hex::encode(Sha256::digest(b"model bytes"));
        fs::write(
            dir.path().join("model.onnx.sha256"),
            format!("{}  model.onnx\n", digest),
        )
        .unwrap();

        assert!(verify_sidecar(&asset).is_ok());
    }

    #[test]
    fn test_mismatching_sidecar_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let asset = dir.path().join("model.onnx");
        fs::write(&asset, b"model bytes").unwrap();
        fs::write(
            dir.path().join("model.onnx.sha256"),
            format!("{}\n", hex::encode(Sha256::digest(b"other bytes"))),
        )
        .unwrap();

        let err = verify_sidecar(&asset).unwrap_err();
        assert!(matches!(err, AssetError::ChecksumMismatch(_)));
    }
}
