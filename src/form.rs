use crate::dom::Document;

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, FromForm)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    fn error_id(self) -> &'static str {
        match self {
            ContactField::Name => "nameError",
            ContactField::Email => "emailError",
            ContactField::Message => "messageError",
        }
    }
}

/// `local@domain.tld` with no whitespace.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Fields that fail validation, in form order.
pub fn validate(submission: &ContactSubmission) -> Vec<ContactField> {
    let mut invalid = Vec::new();
    if submission.name.trim().is_empty() {
        invalid.push(ContactField::Name);
    }
    if !is_valid_email(&submission.email) {
        invalid.push(ContactField::Email);
    }
    if submission.message.trim().is_empty() {
        invalid.push(ContactField::Message);
    }
    invalid
}

/// Reveal the error note of each invalid field and hide the rest.
pub fn show_errors(doc: &mut Document, invalid: &[ContactField]) {
    for field in ContactField::ALL {
        if let Some(note) = doc.get_element_by_id_mut(field.error_id()) {
            if invalid.contains(&field) {
                note.add_class("show");
            } else {
                note.remove_class("show");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(validate(&submission("Jane", "jane@example.com", "Hi")).is_empty());
    }

    #[test]
    fn test_blank_fields() {
        assert_eq!(
            validate(&submission("  ", "", "\n")),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.io"));
        assert!(!is_valid_email("a@b..co"));
    }
}
