//! Site rebuild trigger
//!
//! Shells out to the website's bundler. The build is a black-box external
//! collaborator: it shares no state with the document store, and the only
//! contract is an exit status plus captured output.

use std::path::Path;
use std::process::Command;

use crate::error::{EditorError, Result};

/// Captured output of a completed build
#[derive(Debug)]
pub struct BuildOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run the build command from the project root.
///
/// Fails fast when the expected `client/` directory is absent, and carries
/// the child's captured stderr when it exits non-zero.
pub fn rebuild_site(project_root: &Path, command: &str) -> Result<BuildOutput> {
    let client_dir = project_root.join("client");
    if !client_dir.is_dir() {
        return Err(EditorError::NotFound(client_dir));
    }

    tracing::info!(command, root = %project_root.display(), "rebuilding static site");

    #[cfg(windows)]
    let spawned = Command::new("cmd")
        .args(["/C", command])
        .current_dir(project_root)
        .output();

    #[cfg(not(windows))]
    let spawned = Command::new("sh")
        .args(["-c", command])
        .current_dir(project_root)
        .output();

    let output = spawned.map_err(|source| EditorError::Io {
        path: project_root.to_path_buf(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(EditorError::Subprocess {
            status: output.status,
            stderr,
        });
    }

    tracing::info!("build completed");
    Ok(BuildOutput { stdout, stderr })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("client")).unwrap();
        dir
    }

    #[test]
    fn test_missing_client_dir_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            rebuild_site(dir.path(), "echo hi").unwrap_err(),
            EditorError::NotFound(_)
        ));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_successful_build_captures_stdout() {
        let dir = project_root();
        let output = rebuild_site(dir.path(), "echo built").unwrap();
        assert_eq!(output.stdout.trim(), "built");
    }

    #[test]
    #[cfg(not(windows))]
    fn test_failing_build_carries_stderr() {
        let dir = project_root();
        let err = rebuild_site(dir.path(), "echo broken >&2; exit 3").unwrap_err();
        match err {
            EditorError::Subprocess { status, stderr } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr.trim(), "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
