use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use crate::error::CommandError;

/// Run `MegaCli -PDList -a0` and return its stdout as text.
///
/// MegaCli occasionally emits stray non-UTF-8 bytes, so stdout is decoded
/// lossily rather than rejected.
pub async fn run_pdlist(cli_path: &Path) -> Result<String, CommandError> {
    let path = cli_path.display().to_string();
    debug!("Running {} -PDList -a0", path);

    let output = Command::new(cli_path)
        .arg("-PDList")
        .arg("-a0")
        .output()
        .await
        .map_err(|source| CommandError::Spawn {
            path: path.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            path,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
