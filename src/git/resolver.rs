//! Version resolver composing a repository, a cache, and a latest-version
//! policy
//!
//! `version()` and `tags()` go through the cache, so each git lookup runs
//! at most once per run no matter how many build steps ask. `is_latest()`
//! delegates to an injected policy, which may call back into the resolver.

use std::sync::Arc;

use tracing::debug;

use super::{Remote, Repository, SystemGit};
use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::strings::Set;

const VERSION_KEY: &str = "version";

/// Memoized lookup results shared between resolvers, one cache per key
/// family so a stored value always has the shape its caller expects.
#[derive(Default)]
pub struct ResolverCache {
  versions: Cache<String, String>,
  tags: Cache<String, Vec<String>>,
}

impl ResolverCache {
  pub fn new() -> Self {
    Self::default()
  }
}

/// Policy deciding whether a version range is satisfied by the latest
/// known release.
///
/// The resolver hands itself to the policy, so an implementation can call
/// back into [`VersionResolver::version`] and [`VersionResolver::tags`].
/// Plain closures of the same shape implement this trait.
pub trait IsLatestStrategy: Send + Sync {
  fn evaluate(&self, resolver: &VersionResolver, version_range: &str) -> Result<bool>;
}

impl<F> IsLatestStrategy for F
where
  F: Fn(&VersionResolver, &str) -> Result<bool> + Send + Sync,
{
  fn evaluate(&self, resolver: &VersionResolver, version_range: &str) -> Result<bool> {
    self(resolver, version_range)
  }
}

/// Resolves the version of the current build from git history.
pub struct VersionResolver {
  cache: Arc<ResolverCache>,
  repository: Option<Box<dyn Repository>>,
  remote: Option<Remote>,
  is_latest: Option<Box<dyn IsLatestStrategy>>,
}

impl VersionResolver {
  pub fn builder() -> VersionResolverBuilder {
    VersionResolverBuilder::default()
  }

  /// Resolver with all defaults: own cache, system git against `origin`
  pub fn new() -> Self {
    Self::builder().build()
  }

  /// Current version of the checkout, from `git describe`.
  ///
  /// Computed at most once per cache lifetime; a failed lookup is returned
  /// as an error and retried on the next call.
  pub fn version(&self) -> Result<String> {
    self.cache.versions.compute(VERSION_KEY.to_string(), || self.describe())
  }

  /// Evaluate the injected latest-version policy against `version_range`.
  pub fn is_latest(&self, version_range: &str) -> Result<bool> {
    let strategy = self.is_latest.as_ref().ok_or(Error::StrategyMissing)?;
    strategy.evaluate(self, version_range)
  }

  /// Deduplicated tag names on the resolved remote. Order is unspecified.
  pub fn tags(&self) -> Result<Vec<String>> {
    let remote = self.resolved_remote();
    let key = remote.address().to_string();
    self.cache.tags.compute(key, || self.list_tags(&remote))
  }

  fn describe(&self) -> Result<String> {
    match &self.repository {
      Some(repository) => repository.describe(),
      None => SystemGit::new(self.resolved_remote()).describe(),
    }
  }

  fn list_tags(&self, remote: &Remote) -> Result<Vec<String>> {
    let listed = match &self.repository {
      Some(repository) => repository.tags()?,
      None => SystemGit::new(remote.clone()).tags()?,
    };
    // Injected repositories may report duplicates; the set drops them.
    let tags: Set = listed.into_iter().collect();
    debug!(remote = %remote.address(), count = tags.len(), "resolved remote tags");
    Ok(tags.into_vec())
  }

  // Defaulting is checked on every call, never memoized.
  fn resolved_remote(&self) -> Remote {
    self.remote.clone().unwrap_or_default()
  }
}

impl Default for VersionResolver {
  fn default() -> Self {
    Self::new()
  }
}

/// Builder for [`VersionResolver`]. Every part is optional; see the
/// defaulting rules on the resolver methods.
#[derive(Default)]
pub struct VersionResolverBuilder {
  cache: Option<Arc<ResolverCache>>,
  repository: Option<Box<dyn Repository>>,
  remote: Option<Remote>,
  is_latest: Option<Box<dyn IsLatestStrategy>>,
}

impl VersionResolverBuilder {
  /// Share a cache with other resolvers
  pub fn cache(mut self, cache: Arc<ResolverCache>) -> Self {
    self.cache = Some(cache);
    self
  }

  /// Inject a repository instead of the system git adapter
  pub fn repository(mut self, repository: impl Repository + 'static) -> Self {
    self.repository = Some(Box::new(repository));
    self
  }

  pub fn remote(mut self, remote: Remote) -> Self {
    self.remote = Some(remote);
    self
  }

  pub fn is_latest_strategy(mut self, strategy: impl IsLatestStrategy + 'static) -> Self {
    self.is_latest = Some(Box::new(strategy));
    self
  }

  /// Build the resolver. A resolver without an injected cache owns a fresh
  /// one, constructed here once rather than looked up ambiently.
  pub fn build(self) -> VersionResolver {
    VersionResolver {
      cache: self.cache.unwrap_or_default(),
      repository: self.repository,
      remote: self.remote,
      is_latest: self.is_latest,
    }
  }
}
