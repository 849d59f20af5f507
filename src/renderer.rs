//! Placeholder substitution for project files.
//! Replaces literal `@(Token)` placeholders with module metadata.
use crate::config::ModuleConfig;
use indexmap::IndexMap;

/// Result of rendering a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    /// Whether at least one placeholder was replaced
    pub modified: bool,
}

/// Trait for content renderers.
pub trait TemplateRenderer {
    /// Renders content, reporting whether anything changed.
    ///
    /// # Arguments
    /// * `content` - Text to render
    ///
    /// # Returns
    /// * `Rendered` - Rendered text and modification flag
    fn render(&self, content: &str) -> Rendered;
}

/// Ordered mapping from placeholder token to its replacement value.
#[derive(Debug, Clone, Default)]
pub struct TokenMap {
    tokens: IndexMap<String, String>,
}

impl TokenMap {
    /// Wraps a placeholder name in the token syntax, e.g. `@(ModuleName)`.
    pub fn token(name: &str) -> String {
        format!("@({})", name)
    }

    /// Appends a token; later insertions are applied after earlier ones.
    pub fn insert<S: Into<String>>(&mut self, name: &str, value: S) {
        self.tokens.insert(Self::token(name), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&ModuleConfig> for TokenMap {
    fn from(config: &ModuleConfig) -> Self {
        let mut map = TokenMap::default();
        map.insert("ModuleName", &config.name);
        map.insert("ModuleDisplayName", &config.display_name);
        map.insert("ModuleDescription", &config.description);
        map.insert("ModuleVersion", &config.version);
        map.insert("ModuleVersionCode", &config.version_code);
        map.insert("ModuleAuthorName", &config.author);
        map.insert("RepositoryName", &config.repository_name);
        map.insert("RepositoryOwner", &config.repository_owner);
        map
    }
}

/// Renderer performing flat literal token substitution.
///
/// Tokens are applied one after another in map order, each on the output of
/// the previous one. Matching is exact and case-sensitive.
pub struct TokenRenderer {
    tokens: TokenMap,
}

impl TokenRenderer {
    pub fn new(tokens: TokenMap) -> Self {
        Self { tokens }
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, content: &str) -> Rendered {
        let mut content = content.to_string();
        let mut modified = false;

        for (token, value) in self.tokens.iter() {
            if content.contains(token) {
                content = content.replace(token, value);
                modified = true;
            }
        }

        Rendered { content, modified }
    }
}
