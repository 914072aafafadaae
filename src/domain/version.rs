use serde::{Deserialize, Serialize};

/// Version history of an application, most recent first.
///
/// The order is whatever the orchestrator returned; it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApplicationVersions {
    #[serde(default)]
    pub versions: Vec<String>,
}

impl ApplicationVersions {
    #[must_use]
    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    /// Most recent label, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.versions.first().map(String::as_str)
    }
}

/// Request body selecting a historical configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationVersion {
    pub version: String,
}

impl ApplicationVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_upstream_order() {
        let versions: ApplicationVersions =
            serde_json::from_str(r#"{"versions":["b","c","a"]}"#).unwrap();
        assert_eq!(versions.versions, vec!["b", "c", "a"]);
        assert_eq!(versions.latest(), Some("b"));
        assert!(versions.contains("a"));
        assert!(!versions.contains("d"));
    }

    #[test]
    fn version_body_shape() {
        let body = serde_json::to_string(&ApplicationVersion::new("v1")).unwrap();
        assert_eq!(body, r#"{"version":"v1"}"#);
    }
}
