//! Error types for relver with contextual messages and exit codes
//!
//! Resolution failures are ordinary error values. A hosting command decides
//! whether to terminate; nothing in this crate aborts the process.

use std::fmt;
use std::io;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for hosts that surface relver failures from a CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (missing strategy, bad configuration)
  User = 1,
  /// System error (git subprocess, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relver
#[derive(Debug)]
pub enum Error {
  /// Git operation errors
  Git(GitError),

  /// No latest-version strategy was configured on the resolver
  StrategyMissing,

  /// Failure raised by an injected latest-version strategy, passed
  /// through verbatim
  Strategy(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a strategy failure
  pub fn strategy(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    Error::Strategy(err.into())
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      Error::Git(_) => ExitCode::System,
      Error::StrategyMissing => ExitCode::User,
      Error::Strategy(_) => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      Error::Git(e) => e.help_message(),
      Error::StrategyMissing => {
        Some("Configure an IsLatestStrategy on the resolver before calling is_latest".to_string())
      }
      Error::Strategy(_) => None,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::Git(e) => write!(f, "{}", e),
      Error::StrategyMissing => write!(f, "no latest-version strategy configured"),
      Error::Strategy(e) => write!(f, "latest-version strategy failed: {}", e),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Git(e) => e.source(),
      Error::Strategy(e) => Some(e.as_ref()),
      _ => None,
    }
  }
}

impl From<GitError> for Error {
  fn from(err: GitError) -> Self {
    Error::Git(err)
  }
}

/// Git subprocess errors, naming which lookup failed
#[derive(Debug)]
pub enum GitError {
  /// Spawning the git binary failed
  Spawn { command: String, source: io::Error },

  /// `git describe` exited non-zero
  Describe { stderr: String },

  /// `git ls-remote` exited non-zero
  LsRemote { remote: String, stderr: String },
}

impl GitError {
  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GitError::Spawn { .. } => Some("Check that git is installed and on PATH".to_string()),
      GitError::Describe { .. } => {
        Some("Run from inside a git checkout with at least one commit".to_string())
      }
      GitError::LsRemote { remote, .. } => {
        Some(format!("Check that remote '{}' exists and is reachable", remote))
      }
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::Spawn { command, source } => {
        write!(f, "failed to run {}: {}", command, source)
      }
      GitError::Describe { stderr } => {
        write!(f, "git describe failed: {}", stderr)
      }
      GitError::LsRemote { remote, stderr } => {
        write!(f, "git ls-remote against '{}' failed: {}", remote, stderr)
      }
    }
  }
}

impl std::error::Error for GitError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GitError::Spawn { source, .. } => Some(source),
      _ => None,
    }
  }
}
