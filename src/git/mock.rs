use crate::error::{AutoverError, Result};
use crate::git::TagSource;

/// Mock tag source for testing without actual git operations
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: None,
        }
    }

    /// Create a mock source pre-populated with tag names
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a mock source whose listing always fails
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockTagSource {
    fn list_tag_names(&self, prefix: &str) -> Result<Vec<String>> {
        if let Some(message) = &self.failure {
            return Err(AutoverError::tag_source(message.clone()));
        }

        Ok(self
            .tags
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_empty() {
        let source = MockTagSource::default();
        assert!(source.list_tag_names("").unwrap().is_empty());
    }

    #[test]
    fn test_mock_source_filters_by_prefix() {
        let source = MockTagSource::with_tags(["v1.0.0", "v1.1.0", "release-2.0.0"]);

        let tags = source.list_tag_names("v").unwrap();
        assert_eq!(tags, vec!["v1.0.0".to_string(), "v1.1.0".to_string()]);

        let all = source.list_tag_names("").unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_mock_source_add_tag() {
        let mut source = MockTagSource::new();
        source.add_tag("v0.1.0");
        assert_eq!(source.list_tag_names("v").unwrap(), vec!["v0.1.0".to_string()]);
    }

    #[test]
    fn test_mock_source_failing() {
        let source = MockTagSource::failing("git tag exited with status 128");
        let err = source.list_tag_names("v").unwrap_err();
        assert!(err.to_string().contains("Tag source failed"));
    }
}
