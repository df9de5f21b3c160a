//! External command backend
//!
//! Targets without a built-in emitter run an external command. The job is
//! written to its stdin as JSON; it answers with `{"filesWritten": N}` on
//! stdout and exits 0.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::domain::ports::{GenerationBackend, GenerationJob};
use crate::domain::value_objects::Target;
use crate::error::{GenError, GenResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Reply {
    files_written: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    /// `command` is split on whitespace into program and arguments
    pub fn new(command: &str) -> GenResult<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| GenError::generation("backend command is empty"))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// The conventional emitter for `target`: `gqlgen-emit-<target>` on PATH
    pub fn for_target(target: Target) -> Self {
        Self {
            program: default_command(target),
            args: Vec::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

pub fn default_command(target: Target) -> String {
    format!("gqlgen-emit-{}", target.as_str())
}

impl GenerationBackend for CommandBackend {
    fn name(&self) -> &str {
        &self.program
    }

    fn generate(&self, job: &GenerationJob<'_>) -> GenResult<usize> {
        let payload =
            serde_json::to_vec(job).map_err(|e| GenError::generation(e.to_string()))?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(job.project_root)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => GenError::generation(format!(
                    "backend command '{}' not found; install it or pass --backend-command",
                    self.program
                )),
                _ => GenError::generation(format!("failed to start '{}': {}", self.program, e)),
            })?;

        // Feed stdin from another thread so a chatty emitter can't block on a
        // full stdout pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            std::thread::spawn(move || {
                let _ = stdin.write_all(&payload);
            })
        });

        let output = child
            .wait_with_output()
            .map_err(|e| GenError::generation(format!("'{}': {}", self.program, e)))?;
        if let Some(writer) = writer {
            let _ = writer.join();
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GenError::generation(format!(
                "'{}' failed ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let reply: Reply = serde_json::from_slice(&output.stdout).map_err(|e| {
            GenError::generation(format!(
                "'{}' printed an unexpected reply ({}); expected {{\"filesWritten\": N}}",
                self.program, e
            ))
        })?;
        Ok(reply.files_written)
    }
}
