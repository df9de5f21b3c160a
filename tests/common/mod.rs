//! Common test utilities for gqlgen CLI tests.
//!
//! Provides `TestProject`: an isolated project directory plus an isolated
//! user config directory, with helpers to run the built binary.

#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

pub const SCHEMA: &str = r#"
type Query {
  me: User
  user(id: ID!): User
}

type Mutation {
  rename(name: String!): User
}

type User {
  id: ID!
  name: String
}
"#;

pub const ME_QUERY: &str = r#"
query Me {
  me {
    ...UserParts
  }
}

fragment UserParts on User {
  id
  name
}
"#;

/// Result of running the gqlgen binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub struct TestProject {
    pub dir: TempDir,
    config_home: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with `schema.graphql` and `src/me.graphql`
    pub fn with_schema_and_query() -> Self {
        let project = Self::new();
        project.write("schema.graphql", SCHEMA);
        project.write("src/me.graphql", ME_QUERY);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gqlgen"));
        cmd.current_dir(self.root())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("GQLGEN_SCHEMA")
            .env_remove("GQLGEN_TAG_NAME")
            .env_remove("GQLGEN_BACKEND_COMMAND")
            .env_remove("GQLGEN_DEBOUNCE_MS")
            .stdin(Stdio::null());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command().args(args).output().unwrap();
        TestResult::from_output(output)
    }

    /// Start a headless watch session with NDJSON output
    pub fn spawn_watch(&self, args: &[&str]) -> WatchProcess {
        let mut child = self
            .command()
            .args(args)
            .arg("--watch")
            .arg("--json")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();

        let stdout = child.stdout.take().unwrap();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        WatchProcess {
            child,
            lines: rx,
            seen: Vec::new(),
        }
    }
}

/// A running `generate --watch --json` process
pub struct WatchProcess {
    child: Child,
    lines: Receiver<String>,
    pub seen: Vec<String>,
}

impl WatchProcess {
    /// Wait until a line for `event` arrives, returning it
    pub fn wait_for_event(&mut self, event: &str, timeout: Duration) -> Option<serde_json::Value> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let line = self.lines.recv_timeout(remaining).ok()?;
            self.seen.push(line.clone());
            let Ok(value) = serde_json::from_str::<serde_json::Value>(&line) else {
                continue;
            };
            if value["event"] == event {
                return Some(value);
            }
        }
    }

    pub fn transcript(&self) -> String {
        self.seen.join("\n")
    }
}

impl Drop for WatchProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
