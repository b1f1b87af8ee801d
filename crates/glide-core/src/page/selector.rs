/// The selector forms page behaviors look elements up by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// bare tag name
    Tag(String),
}

impl Selector {
    /// Parse a selector; `None` for empty input or a bare `#` / `.`
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(id) = input.strip_prefix('#') {
            (!id.is_empty()).then(|| Selector::Id(id.to_string()))
        } else if let Some(class) = input.strip_prefix('.') {
            (!class.is_empty()).then(|| Selector::Class(class.to_string()))
        } else if !input.is_empty() && input.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            Some(Selector::Tag(input.to_string()))
        } else {
            None
        }
    }
}
