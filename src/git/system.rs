//! System git adapter - shells out to the installed git binary
//!
//! Read-only operations: describe the working copy, list tags on a remote.
//! Commands run with an isolated environment so user-level git config
//! cannot change their behavior.

use std::path::PathBuf;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{Remote, Repository};
use crate::error::{Error, GitError, Result};
use crate::strings::Set;

// One `ls-remote --tags` line: commit hash, whitespace, a tag ref, and an
// optional peeled marker for annotated tags. The capture excludes the
// marker, so peeled entries collapse onto their tag name.
static REMOTE_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[0-9a-f]{7,}\s+refs/tags/([^^]+)(\^\{\})?$").expect("remote tag pattern")
});

/// Git adapter using the system git binary.
pub struct SystemGit {
  remote: Remote,
  work_dir: PathBuf,
}

impl SystemGit {
  /// Adapter bound to a remote, operating on the current directory
  pub fn new(remote: Remote) -> Self {
    Self::at(".", remote)
  }

  /// Adapter operating on a specific working copy
  pub fn at(work_dir: impl Into<PathBuf>, remote: Remote) -> Self {
    Self { remote, work_dir: work_dir.into() }
  }

  /// Create a safe git command with an isolated environment
  ///
  /// - Sets working directory via `-C`
  /// - Clears environment variables, whitelisting only PATH and HOME
  /// - Forces protocol v2 regardless of user config
  fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.work_dir);

    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("protocol.version=2");

    cmd
  }
}

impl Repository for SystemGit {
  fn describe(&self) -> Result<String> {
    debug!(work_dir = %self.work_dir.display(), "running git describe");
    let output = self
      .git_cmd()
      .args(["describe", "--always", "--tags", "--dirty"])
      .output()
      .map_err(|source| GitError::Spawn { command: "git describe".to_string(), source })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      return Err(Error::Git(GitError::Describe { stderr }));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }

  fn tags(&self) -> Result<Vec<String>> {
    let address = self.remote.address().to_string();
    debug!(remote = %address, "listing remote tags");
    let output = self
      .git_cmd()
      .args(["ls-remote", "--tags", &address])
      .output()
      .map_err(|source| GitError::Spawn { command: "git ls-remote".to_string(), source })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      return Err(Error::Git(GitError::LsRemote { remote: address, stderr }));
    }

    let listing = String::from_utf8_lossy(&output.stdout);
    let tags = parse_ls_remote_tags(&listing);
    debug!(remote = %address, count = tags.len(), "parsed remote tags");
    Ok(tags.into_vec())
  }
}

/// Extract deduplicated tag names from `ls-remote --tags` output.
///
/// Non-tag lines such as `HEAD` are skipped without error.
fn parse_ls_remote_tags(output: &str) -> Set {
  let mut tags = Set::new();
  for line in output.lines() {
    let Some(captures) = REMOTE_TAG_PATTERN.captures(line.trim_end()) else {
      continue;
    };
    if let Some(name) = captures.get(1) {
      tags.add(name.as_str());
    }
  }
  tags
}
