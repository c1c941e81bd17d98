//! Post-generation shell hook

use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum HookError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

fn shell(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Run `command` in the host shell and wait for it.
///
/// Output is captured, not forwarded; it shows up only at debug level.
pub fn run_post_generate(command: &str) -> Result<(), HookError> {
    info!("Running post-generate command: {}", command);

    let output = shell(command)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| HookError::Spawn {
            command: command.to_string(),
            source,
        })?;

    debug!(
        stdout = %String::from_utf8_lossy(&output.stdout),
        stderr = %String::from_utf8_lossy(&output.stderr),
        "post-generate output"
    );

    if output.status.success() {
        Ok(())
    } else {
        Err(HookError::Failed {
            command: command.to_string(),
            status: output.status,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command() {
        assert!(run_post_generate("true").is_ok());
    }

    #[test]
    fn test_failing_command() {
        let err = run_post_generate("exit 3").unwrap_err();
        assert!(matches!(err, HookError::Failed { .. }));
    }
}
