/// Name used in diagnostics when a document has none.
pub const DEFAULT_NAME: &str = "GraphQL";

/// A named GraphQL document body.
///
/// The body is kept exactly as given; every token offset is a byte
/// offset into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    body: String,
}

impl Source {
    /// Create a source. An empty `name` falls back to [`DEFAULT_NAME`].
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name
            },
            body: body.into(),
        }
    }

    /// Create a source carrying the default name.
    #[must_use]
    pub fn from_body(body: impl Into<String>) -> Self {
        Self::new(DEFAULT_NAME, body)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
