use crate::*;

/// lexical category a rule gives to the text it matched
///
/// the set is flat, dotted display names only keep the naming convention
/// highlighting styles are used to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Category {
    Text,
    Comment,
    Keyword,
    #[serde(rename = "Name.Builtin")]
    NameBuiltin,
    #[serde(rename = "Name.Variable")]
    NameVariable,
    #[serde(rename = "Name.Attribute")]
    NameAttribute,
    String,
    #[serde(rename = "String.Backtick")]
    StringBacktick,
    Number,
    Operator,
    Error,
}

impl Category {
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Comment => "Comment",
            Category::Keyword => "Keyword",
            Category::NameBuiltin => "Name.Builtin",
            Category::NameVariable => "Name.Variable",
            Category::NameAttribute => "Name.Attribute",
            Category::String => "String",
            Category::StringBacktick => "String.Backtick",
            Category::Number => "Number",
            Category::Operator => "Operator",
            Category::Error => "Error",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// a classified piece of the source text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub category: Category,
    pub text: String,
    span: Span,
}

impl Token {
    pub fn new(category: Category, text: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            text: text.into(),
            span,
        }
    }

    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }
}

impl std::ops::Deref for Token {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.text.fmt(f)
    }
}

impl WithSpan for Token {
    #[inline]
    fn get_span(&self) -> Span {
        self.span
    }
}
