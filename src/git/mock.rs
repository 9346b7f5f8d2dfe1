use crate::error::Result;
use crate::git::TagSource;

/// Mock tag source for testing without a git repository
#[derive(Debug, Clone, Default)]
pub struct MockTagSource {
    tags: Vec<String>,
}

impl MockTagSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockTagSource { tags: Vec::new() }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}
