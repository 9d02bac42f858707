//! Resolve release versions from git history and float them into
//! publishable image tags.
//!
//! `relver` is the version-resolution core of a CI release pipeline. It
//! answers three questions:
//!
//! - what version is this checkout? (`git describe`, memoized per run)
//! - which release tags already exist on the remote? (`git ls-remote`,
//!   deduplicated and memoized per run)
//! - what tag should a published artifact carry? (the floating algorithm,
//!   which shifts pre-release versions to the nearest release boundary)
//!
//! The git seam is a trait, so hosts can swap the installed-binary adapter
//! for anything else, and the "is this the latest release" policy is
//! injected rather than baked in.

pub mod cache;
pub mod error;
pub mod git;
pub mod image;
pub mod strings;
pub mod version;

pub use error::{Error, GitError, Result};
pub use git::{Remote, Repository, ResolverCache, SystemGit, VersionResolver};
pub use image::{FloatDirection, float_to_release};
