//! End-to-end version resolution against scratch repositories

use anyhow::Result;

use crate::helpers::TestRepo;
use relver::{FloatDirection, Remote, SystemGit, VersionResolver, float_to_release};

fn resolver_for(repo: &TestRepo) -> VersionResolver {
  VersionResolver::builder().repository(SystemGit::at(&repo.path, Remote::default())).build()
}

#[test]
fn test_resolves_exact_tag_at_head() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;

  let resolver = resolver_for(&repo);
  assert_eq!(resolver.version()?, "v1.0.0");
  Ok(())
}

#[test]
fn test_describe_past_tag_floats_to_release_boundaries() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag_annotated("v1.0.0")?;
  repo.commit("feature work")?;

  let resolver = resolver_for(&repo);
  let version = resolver.version()?;
  assert!(version.starts_with("v1.0.0-1-g"), "unexpected describe output: {version}");

  let up = float_to_release("registry.local/ci", "app", "/", &version, FloatDirection::Up);
  assert_eq!(up, "registry.local/ci/app:v1.1");

  let down = float_to_release("registry.local/ci", "app", "/", &version, FloatDirection::Down);
  assert_eq!(down, "registry.local/ci/app:v1.0");
  Ok(())
}

#[test]
fn test_version_is_memoized_for_the_run() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v2.0.0")?;

  let resolver = resolver_for(&repo);
  assert_eq!(resolver.version()?, "v2.0.0");

  // New history after the first lookup must not change the answer: the
  // second call is served from the cache, not a fresh describe.
  repo.commit("post-release work")?;
  assert_eq!(resolver.version()?, "v2.0.0");
  Ok(())
}

#[test]
fn test_untagged_repository_describes_by_commit_hash() -> Result<()> {
  let repo = TestRepo::new()?;

  let resolver = resolver_for(&repo);
  let version = resolver.version()?;
  // --always falls back to an abbreviated commit hash.
  assert!(version.chars().all(|c| c.is_ascii_hexdigit()), "not a hash: {version}");
  Ok(())
}
