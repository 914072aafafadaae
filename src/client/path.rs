//! Resource paths for the `/apps` API, relative to the configured base.
//!
//! Marathon identifiers are path-like (`/group/web`). Leading and trailing
//! slashes are trimmed before an identifier is placed in a path, so `/web`
//! and `web` address the same resource. Each segment is limited to lowercase
//! ASCII letters, digits, `-` and `.`, which keeps identifiers and version
//! labels from adding query strings or walking out of their resource.

use crate::error::{Error, Result};

/// Listing and creation endpoint.
pub const APPS: &str = "/apps";

/// Validate an application identifier and return its canonical form.
///
/// Fails with [`Error::InvalidArgument`] when the identifier is empty (after
/// trimming slashes), has an empty or dot-only segment, or contains a
/// character outside `[a-z0-9-.]`.
pub fn normalize(id: &str) -> Result<&str> {
    let trimmed = id.trim_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(
            "application id must not be empty".into(),
        ));
    }
    for segment in trimmed.split('/') {
        if is_dot_segment(segment) {
            return Err(Error::InvalidArgument(format!(
                "application id has an empty or relative segment: {id:?}"
            )));
        }
        if !segment.chars().all(is_id_char) {
            return Err(Error::InvalidArgument(format!(
                "application id may only contain [a-z0-9-.] segments: {id:?}"
            )));
        }
    }
    Ok(trimmed)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.'
}

fn is_dot_segment(segment: &str) -> bool {
    segment.is_empty() || segment == "." || segment == ".."
}

/// Validate a version label for use as a single path segment.
fn version_label(version: &str) -> Result<&str> {
    if version.trim().is_empty() {
        return Err(Error::InvalidArgument("version must not be empty".into()));
    }
    let reserved = |c: char| matches!(c, '/' | '?' | '#' | '%' | '\\') || c.is_whitespace();
    if is_dot_segment(version) || version.contains(reserved) {
        return Err(Error::InvalidArgument(format!(
            "version is not a single path segment: {version:?}"
        )));
    }
    Ok(version)
}

/// Whether two identifiers address the same application.
pub(crate) fn same_id(a: &str, b: &str) -> bool {
    a.trim_matches('/') == b.trim_matches('/')
}

/// `/apps/{id}`
pub fn app(id: &str) -> Result<String> {
    Ok(format!("{APPS}/{}", normalize(id)?))
}

/// `/apps/{id}/versions`
pub fn versions(id: &str) -> Result<String> {
    Ok(format!("{}/versions", app(id)?))
}

/// `/apps/{id}/versions/{version}`
pub fn version(id: &str, version: &str) -> Result<String> {
    Ok(format!("{}/versions/{}", app(id)?, version_label(version)?))
}

/// `/apps/{id}/restart?force={force}`
pub fn restart(id: &str, force: bool) -> Result<String> {
    Ok(format!("{}/restart?force={force}", app(id)?))
}
