use crate::error::LocateError;
use std::process::Command;
use tracing::{debug, warn};

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout:  String,
    pub success: bool,
}

/// Seam between the parsers and the processes they read from.
pub trait ToolRunner {
    fn run(&self, program: &str, args: &[&str]) -> ToolOutput;
}

/// Runs tools as blocking child processes.
///
/// A tool that cannot be spawned or exits non-zero is reported as a
/// `ToolInvocation` warning, and whatever stdout it produced is still returned.
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> ToolOutput {
        let command = command_line(program, args);
        debug!(%command, "running");

        let out = match Command::new(program).args(args).output() {
            Ok(o)  => o,
            Err(e) => {
                let err = LocateError::ToolInvocation {
                    command,
                    status: "not started".to_string(),
                    stderr: e.to_string(),
                };
                warn!("{err}");
                return ToolOutput::default();
            }
        };

        let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
        if !out.status.success() {
            let err = LocateError::ToolInvocation {
                command,
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            };
            warn!("{err}");
        }
        ToolOutput { stdout, success: out.status.success() }
    }
}

pub fn command_line(program: &str, args: &[&str]) -> String {
    let mut s = program.to_string();
    for a in args {
        s.push(' ');
        s.push_str(a);
    }
    s
}
