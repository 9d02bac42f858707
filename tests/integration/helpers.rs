//! Test helpers for integration tests

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch git repository with configurable history
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create a repository with a single initial commit
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    git(&path, &["init", "--initial-branch=main"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;
    git(&path, &["config", "commit.gpgsign", "false"])?;
    git(&path, &["config", "tag.gpgsign", "false"])?;

    std::fs::write(path.join("README.md"), "# test repo\n")?;
    git(&path, &["add", "."])?;
    git(&path, &["commit", "-m", "Initial commit"])?;

    Ok(Self { _root: root, path })
  }

  /// Append to a file and commit the change
  pub fn commit(&self, message: &str) -> Result<()> {
    let file = self.path.join("CHANGELOG.md");
    let mut contents = std::fs::read_to_string(&file).unwrap_or_default();
    contents.push_str(message);
    contents.push('\n');
    std::fs::write(&file, contents)?;

    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;
    Ok(())
  }

  /// Create a lightweight tag at HEAD
  pub fn tag(&self, name: &str) -> Result<()> {
    git(&self.path, &["tag", name])?;
    Ok(())
  }

  /// Create an annotated tag at HEAD. Annotated tags produce peeled `^{}`
  /// entries in ls-remote output.
  pub fn tag_annotated(&self, name: &str) -> Result<()> {
    git(&self.path, &["tag", "-a", name, "-m", name])?;
    Ok(())
  }

  /// Remote addressing this repository by filesystem path
  pub fn as_remote(&self) -> relver::Remote {
    relver::Remote::with_url("origin", self.path.display().to_string())
  }
}

/// Run a git command in a directory, failing on non-zero exit
pub fn git(dir: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git").arg("-C").arg(dir).args(args).output()?;
  if !output.status.success() {
    anyhow::bail!("git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
  }
  Ok(output)
}
