//! Version resolution against git source control
//!
//! The seam between the resolver and git is the [`Repository`] trait.
//! [`SystemGit`] is the installed-binary adapter; tests and other hosts can
//! inject anything else that satisfies the trait.

mod resolver;
mod system;

pub use resolver::{IsLatestStrategy, ResolverCache, VersionResolver, VersionResolverBuilder};
pub use system::SystemGit;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Remote name used when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// A remote repository name and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remote {
  /// Remote name, `"origin"` by default
  pub name: String,
  /// Optional explicit address; takes precedence over `name` when set
  pub url: Option<String>,
}

impl Remote {
  /// Remote addressed by name
  pub fn named(name: impl Into<String>) -> Self {
    Self { name: name.into(), url: None }
  }

  /// Remote addressed by an explicit URL
  pub fn with_url(name: impl Into<String>, url: impl Into<String>) -> Self {
    Self { name: name.into(), url: Some(url.into()) }
  }

  /// Address used on the wire: a non-empty URL wins over the name.
  pub fn address(&self) -> &str {
    match self.url.as_deref() {
      Some(url) if !url.is_empty() => url,
      _ => &self.name,
    }
  }
}

impl Default for Remote {
  fn default() -> Self {
    Self::named(DEFAULT_REMOTE)
  }
}

/// Capability interface over a version-control remote.
pub trait Repository: Send + Sync {
  /// Describe the current checkout relative to its nearest tag, with a
  /// dirty marker when the working tree has uncommitted changes.
  fn describe(&self) -> Result<String>;

  /// List tag names present on the remote.
  fn tags(&self) -> Result<Vec<String>>;
}
