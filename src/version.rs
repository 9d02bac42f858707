//! Tolerant semantic version parsing
//!
//! Tags and describe output are not guaranteed to be strict semver: a
//! leading `v` prefix and short `1` / `1.2` forms are common. Parsing here
//! accepts those; anything else is simply "not a semver" rather than an
//! error, since not every tag is expected to be one.

use semver::Version;

/// Parse a freeform version string, tolerating a `v`/`V` prefix and short
/// forms padded with zeros (`"v1.2"` parses as `1.2.0`).
///
/// Short forms carrying pre-release or build metadata are ambiguous and
/// rejected. Returns `None` for anything that is not a semantic version.
pub fn parse_tolerant(version: &str) -> Option<Version> {
  let trimmed = version.trim();
  let bare = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

  let parts: Vec<&str> = bare.splitn(3, '.').collect();
  if parts.len() == 3 {
    return Version::parse(bare).ok();
  }
  if parts.last()?.contains(['-', '+']) {
    return None;
  }
  let padded = match parts.as_slice() {
    [major] => format!("{}.0.0", major),
    [major, minor] => format!("{}.{}.0", major, minor),
    _ => unreachable!("splitn(3) yields at most three parts"),
  };
  Version::parse(&padded).ok()
}

/// A release version has no pre-release identifiers and no build metadata.
pub fn is_release(version: &Version) -> bool {
  version.pre.is_empty() && version.build.is_empty()
}
