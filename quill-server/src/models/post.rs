//! Post title and content validation

use super::ValidationError;

/// Maximum length for post titles (matches the posts.title column)
const MAX_TITLE_LEN: usize = 200;

/// Validated post title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    /// Create a new post title.
    ///
    /// # Rules
    /// - Non-empty
    /// - Max 200 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if s.len() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated post content (unbounded text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create new post content. Content length is unbounded.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "content" });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_max_length() {
        let title_200 = "t".repeat(200);
        assert!(PostTitle::new(&title_200).is_ok());

        let title_201 = "t".repeat(201);
        let err = PostTitle::new(&title_201).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 200, .. }));
    }

    #[test]
    fn title_rejects_empty() {
        let err = PostTitle::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "title" }));
    }

    #[test]
    fn content_is_unbounded() {
        let long = "c".repeat(100_000);
        assert!(PostContent::new(&long).is_ok());
    }

    #[test]
    fn content_rejects_empty() {
        let err = PostContent::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "content" }));
    }
}
