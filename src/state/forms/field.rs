//! Form field value objects

use std::path::PathBuf;

/// Reference to a resume file selected by the applicant.
///
/// Only the reference is held here; content and type are constrained
/// upstream by the file picker, not inspected at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAttachment {
    pub file_name: String,
    pub path: PathBuf,
}

impl ResumeAttachment {
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Digits-only text; non-digit input is stripped before storage
    Phone(String),
    Attachment(Option<ResumeAttachment>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its wire name, label and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new phone field
    pub fn phone(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Phone(String::new()),
        }
    }

    /// Create a new attachment field
    pub fn attachment(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Attachment(None),
        }
    }

    /// Get the text value (returns empty string for attachment fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Phone(s) => s,
            FieldValue::Attachment(_) => "",
        }
    }

    /// Get the attachment reference (returns None for text fields)
    pub fn as_attachment(&self) -> Option<&ResumeAttachment> {
        match &self.value {
            FieldValue::Attachment(a) => a.as_ref(),
            _ => None,
        }
    }

    /// Store user input. Phone fields keep only decimal digits; attachment
    /// fields ignore text input entirely.
    pub fn set_input(&mut self, input: &str) {
        match &mut self.value {
            FieldValue::Text(s) => *s = input.to_string(),
            FieldValue::Phone(s) => *s = input.chars().filter(|c| c.is_ascii_digit()).collect(),
            FieldValue::Attachment(_) => {}
        }
    }

    /// Store an attachment reference (no-op for text fields)
    pub fn set_attachment(&mut self, attachment: ResumeAttachment) {
        if let FieldValue::Attachment(a) = &mut self.value {
            *a = Some(attachment);
        }
    }

    /// Clear the field back to its initial empty value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Phone(s) => s.clear(),
            FieldValue::Attachment(a) => *a = None,
        }
    }

    /// True when the field holds no value at all
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Phone(s) => s.is_empty(),
            FieldValue::Attachment(a) => a.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_stores_input_verbatim() {
        let mut field = FormField::text("firstName", "First name");
        field.set_input("Asha ");
        assert_eq!(field.as_text(), "Asha ");
    }

    #[test]
    fn test_phone_field_strips_non_digits() {
        let mut field = FormField::phone("phone", "Phone");
        field.set_input("(987) 654-3210");
        assert_eq!(field.as_text(), "9876543210");

        field.set_input("98ab76");
        assert_eq!(field.as_text(), "9876");
    }

    #[test]
    fn test_attachment_field_ignores_text_input() {
        let mut field = FormField::attachment("resume", "Resume");
        field.set_input("resume.pdf");
        assert!(field.as_attachment().is_none());
        assert!(field.is_empty());
    }

    #[test]
    fn test_set_attachment_and_clear() {
        let mut field = FormField::attachment("resume", "Resume");
        field.set_attachment(ResumeAttachment::new("cv.pdf", "/tmp/cv.pdf"));
        assert_eq!(field.as_attachment().unwrap().file_name, "cv.pdf");
        assert!(!field.is_empty());

        field.clear();
        assert!(field.as_attachment().is_none());
    }

    #[test]
    fn test_set_attachment_on_text_field_is_noop() {
        let mut field = FormField::text("message", "Message");
        field.set_attachment(ResumeAttachment::new("cv.pdf", "/tmp/cv.pdf"));
        assert!(field.as_attachment().is_none());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear_resets_text() {
        let mut field = FormField::text("message", "Message");
        field.set_input("hello");
        field.clear();
        assert!(field.is_empty());
    }
}
