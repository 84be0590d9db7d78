//! Form field value objects

use crate::profile::format_birth_date;

/// Identifies one of the profile form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Address,
    BirthDate,
    Phone,
    TermsAccepted,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Address,
        FieldName::BirthDate,
        FieldName::Phone,
        FieldName::TermsAccepted,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::BirthDate => "birth_date",
            Self::Phone => "phone",
            Self::TermsAccepted => "terms_accepted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Email => "Email",
            Self::Address => "Endereço",
            Self::BirthDate => "Data de Nascimento (DD/MM/AAAA)",
            Self::Phone => "Telefone",
            Self::TermsAccepted => "Aceito os termos",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Reformatting applied to the whole text after every edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMask {
    #[default]
    None,
    BirthDate,
}

impl InputMask {
    pub fn apply(self, raw: &str) -> String {
        match self {
            InputMask::None => raw.to_string(),
            InputMask::BirthDate => format_birth_date(raw),
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
    pub mask: InputMask,
    /// Maximum number of characters the raw text may reach
    pub max_len: Option<usize>,
}

impl FormField {
    /// Create a new, empty text field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Text(String::new()),
            mask: InputMask::None,
            max_len: None,
        }
    }

    /// Create a text field whose value is reformatted on every edit
    pub fn masked(name: FieldName, mask: InputMask, max_len: usize) -> Self {
        Self {
            mask,
            max_len: Some(max_len),
            ..Self::text(name)
        }
    }

    /// Create a new, unchecked toggle field
    pub fn toggle(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Toggle(false),
            mask: InputMask::None,
            max_len: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(_))
    }

    /// Get the text value (returns empty string for toggle fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Toggle(_) => "",
        }
    }

    /// Get the toggle state (returns false for text fields)
    pub fn as_toggle(&self) -> bool {
        match self.value {
            FieldValue::Toggle(checked) => checked,
            FieldValue::Text(_) => false,
        }
    }

    /// True when the field holds something: non-blank text or a checked toggle
    pub fn is_filled(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Toggle(checked) => *checked,
        }
    }

    /// Replace the value as-is, bypassing mask and length cap
    pub fn set(&mut self, value: FieldValue) {
        self.value = value;
    }

    /// Append a typed character, honouring the length cap and the mask
    pub fn push_char(&mut self, c: char) {
        let FieldValue::Text(s) = &self.value else {
            return;
        };
        if self
            .max_len
            .is_some_and(|max| s.chars().count() >= max)
        {
            return;
        }
        let mut raw = s.clone();
        raw.push(c);
        self.value = FieldValue::Text(self.mask.apply(&raw));
    }

    /// Remove the last character and re-apply the mask
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &self.value {
            let mut raw = s.clone();
            raw.pop();
            self.value = FieldValue::Text(self.mask.apply(&raw));
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Toggle(checked) => {
                let mark = if *checked { "[x]" } else { "[ ]" };
                format!("{mark} {}", self.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::BIRTH_DATE_MAX_LEN;

    fn birth_date_field() -> FormField {
        FormField::masked(FieldName::BirthDate, InputMask::BirthDate, BIRTH_DATE_MAX_LEN)
    }

    fn type_str(field: &mut FormField, input: &str) {
        for c in input.chars() {
            field.push_char(c);
        }
    }

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text(FieldName::Email);
        assert_eq!(field.as_text(), "");
        assert!(!field.is_toggle());
        assert!(!field.is_filled());
        assert_eq!(field.label(), "Email");
    }

    #[test]
    fn test_toggle_field_defaults() {
        let field = FormField::toggle(FieldName::TermsAccepted);
        assert!(field.is_toggle());
        assert!(!field.as_toggle());
        assert_eq!(field.display_value(), "[ ] Aceito os termos");
    }

    #[test]
    fn test_push_and_pop_plain_text() {
        let mut field = FormField::text(FieldName::Name);
        type_str(&mut field, "Ana");
        assert_eq!(field.as_text(), "Ana");
        field.pop_char();
        assert_eq!(field.as_text(), "An");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::text(FieldName::Name);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_birth_date_masks_while_typing() {
        let mut field = birth_date_field();
        let expected = [
            "1",
            "15",
            "15/0",
            "15/06",
            "15/06/2",
            "15/06/20",
            "15/06/200",
            "15/06/2000",
        ];
        for (c, want) in "15062000".chars().zip(expected) {
            field.push_char(c);
            assert_eq!(field.as_text(), want);
        }
    }

    #[test]
    fn test_birth_date_display_cap() {
        let mut field = birth_date_field();
        type_str(&mut field, "150620001234");
        assert_eq!(field.as_text(), "15/06/2000");
    }

    #[test]
    fn test_birth_date_ignores_letters() {
        let mut field = birth_date_field();
        type_str(&mut field, "1a5/");
        assert_eq!(field.as_text(), "15");
    }

    #[test]
    fn test_birth_date_backspace_drops_separator() {
        let mut field = birth_date_field();
        type_str(&mut field, "153");
        assert_eq!(field.as_text(), "15/3");
        field.pop_char();
        assert_eq!(field.as_text(), "15");
        field.pop_char();
        assert_eq!(field.as_text(), "1");
    }

    #[test]
    fn test_checked_toggle() {
        let mut field = FormField::toggle(FieldName::TermsAccepted);
        field.set(FieldValue::Toggle(true));
        assert!(field.as_toggle());
        assert!(field.is_filled());
        assert_eq!(field.display_value(), "[x] Aceito os termos");
    }

    #[test]
    fn test_typing_into_toggle_is_ignored() {
        let mut field = FormField::toggle(FieldName::TermsAccepted);
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.value, FieldValue::Toggle(false));
    }

    #[test]
    fn test_set_bypasses_mask() {
        let mut field = birth_date_field();
        field.set(FieldValue::Text("not a date".to_string()));
        assert_eq!(field.as_text(), "not a date");
    }

    #[test]
    fn test_whitespace_is_not_filled() {
        let mut field = FormField::text(FieldName::Address);
        type_str(&mut field, "   ");
        assert!(!field.is_filled());
    }

    #[test]
    fn test_field_keys_are_unique() {
        let mut keys: Vec<_> = FieldName::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FieldName::ALL.len());
    }
}
