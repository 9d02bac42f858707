//! Remote tag listing over local path remotes

use anyhow::Result;

use crate::helpers::TestRepo;
use relver::{Error, GitError, Remote, Repository, SystemGit, VersionResolver};

#[test]
fn test_lists_tags_without_peeled_duplicates() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;
  repo.tag_annotated("v1.1.0")?;

  let git = SystemGit::at(&repo.path, repo.as_remote());
  let mut tags = git.tags()?;
  tags.sort();
  assert_eq!(tags, vec!["v1.0.0".to_string(), "v1.1.0".to_string()]);
  Ok(())
}

#[test]
fn test_tag_listing_is_cached_per_run() -> Result<()> {
  let repo = TestRepo::new()?;
  repo.tag("v1.0.0")?;

  let resolver = VersionResolver::builder()
    .repository(SystemGit::at(&repo.path, repo.as_remote()))
    .remote(repo.as_remote())
    .build();
  assert_eq!(resolver.tags()?.len(), 1);

  // A tag pushed mid-run is not picked up; the listing is memoized.
  repo.tag("v1.1.0")?;
  assert_eq!(resolver.tags()?.len(), 1);
  Ok(())
}

#[test]
fn test_unreachable_remote_is_an_ls_remote_error() -> Result<()> {
  let repo = TestRepo::new()?;
  let missing = repo.path.join("no-such-remote").display().to_string();

  let git = SystemGit::at(&repo.path, Remote::with_url("origin", missing));
  let err = git.tags().unwrap_err();
  assert!(matches!(err, Error::Git(GitError::LsRemote { .. })), "unexpected error: {err}");
  Ok(())
}
