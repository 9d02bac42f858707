//! Image tag construction from resolved versions
//!
//! Handles the floating of non-release versions to a release boundary and
//! the assembly of the final image reference from basename, image name, and
//! separator.

use path_clean::clean;
use serde::{Deserialize, Serialize};

use crate::version::{is_release, parse_tolerant};

/// Prefix applied to normalized versions.
pub const VERSION_PREFIX: &str = "v";

/// How a non-release version is shifted to a release boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatDirection {
  /// Increment the minor number: forecast the next minor release
  Up,
  /// Keep the minor number, drop the patch: the latest release within the
  /// current minor line
  Down,
}

/// Build a full image reference from basename, name, separator, and version.
///
/// A release version is rewritten to canonical `vX.Y.Z` form. A non-release
/// version (pre-release identifiers or build metadata present) floats to
/// `vX.Y`, with the minor number bumped when `direction` is
/// [`FloatDirection::Up`]. Strings that are not semantic versions pass
/// through verbatim.
///
/// `name` contributes only its final path segment, so an importpath-like
/// name such as `knative.dev/serving/cmd/controller` yields `controller`.
pub fn float_to_release(
  basename: &str,
  name: &str,
  separator: &str,
  version: &str,
  direction: FloatDirection,
) -> String {
  let version = match parse_tolerant(version) {
    Some(ver) if is_release(&ver) => {
      format!("{}{}.{}.{}", VERSION_PREFIX, ver.major, ver.minor, ver.patch)
    }
    Some(ver) => {
      let minor = match direction {
        FloatDirection::Up => ver.minor + 1,
        FloatDirection::Down => ver.minor,
      };
      format!("{}{}.{}", VERSION_PREFIX, ver.major, minor)
    }
    None => version.to_string(),
  };
  format!("{}:{}", join(&[basename, base_segment(name)], separator), version)
}

/// Final path segment of an importpath-like name.
fn base_segment(name: &str) -> &str {
  let trimmed = name.trim_end_matches('/');
  trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Join components with the separator, skipping leading empty components,
/// then path-clean the result. All-empty input joins to the empty string.
fn join(components: &[&str], separator: &str) -> String {
  for (idx, component) in components.iter().enumerate() {
    if !component.is_empty() {
      let joined = components[idx..].join(separator);
      return clean(joined).display().to_string();
    }
  }
  String::new()
}
