//! Declaration document composed from the profile fields

use super::ProfileFields;

/// Title line of every declaration
pub const DECLARATION_TITLE: &str = "Declaration";

/// Text of the exported declaration, one entry per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedDocument {
    title: String,
    lines: Vec<String>,
}

impl ComposedDocument {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Title followed by the body lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str()).chain(self.lines.iter().map(String::as_str))
    }

    /// Full text joined with newlines
    #[cfg(test)]
    pub fn body(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

/// Build the declaration for `fields` with an already computed `age`.
///
/// User text is interpolated exactly as typed. Nothing is escaped and
/// control characters are not stripped; writers receive the raw strings.
pub fn compose(fields: &ProfileFields, age: i32) -> ComposedDocument {
    ComposedDocument {
        title: DECLARATION_TITLE.to_string(),
        lines: vec![
            format!(
                "I am called {}, I am {} years old, I live at {}.",
                fields.name, age, fields.address
            ),
            format!(
                "My contacts: email {}, phone {}.",
                fields.email, fields.phone
            ),
        ],
    }
}
