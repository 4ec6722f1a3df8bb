/// Contact form state and validation
///
/// Field-level checks only: name, email, and message are required and
/// the email must look like an address. Validation failures are normal
/// UI states rendered inline next to each field, never dialogs.

/// Editable contact form fields plus their current validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub errors: FieldErrors,
    /// Set after a successful submission to show the thank-you note
    pub sent: bool,
}

/// Per-field error messages; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

impl ContactForm {
    /// Re-check all fields, storing the errors for the view. Returns
    /// whether the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            name: if self.name.trim().is_empty() {
                Some("Name is required")
            } else {
                None
            },
            email: if self.email.trim().is_empty() {
                Some("Email is required")
            } else if !is_valid_email(self.email.trim()) {
                Some("Email is invalid")
            } else {
                None
            },
            message: if self.message.trim().is_empty() {
                Some("Message is required")
            } else {
                None
            },
        };

        self.errors.is_clean()
    }

    /// Validate and, on success, clear the fields and flag the
    /// thank-you note. The phone field is optional and never blocks.
    pub fn submit(&mut self) -> bool {
        if self.validate() {
            *self = ContactForm {
                sent: true,
                ..ContactForm::default()
            };
            true
        } else {
            false
        }
    }
}

/// Loose email shape check: something@something.something, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Kofi Annan".into(),
            email: "kofi@example.com".into(),
            phone: String::new(),
            message: "I would like to join the basketball program.".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_valid_form_submits_and_resets() {
        let mut form = filled_form();
        assert!(form.submit());
        assert!(form.sent);
        assert!(form.name.is_empty());
        assert!(form.errors.is_clean());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut form = ContactForm::default();
        assert!(!form.submit());
        assert_eq!(form.errors.name, Some("Name is required"));
        assert_eq!(form.errors.email, Some("Email is required"));
        assert_eq!(form.errors.message, Some("Message is required"));
        assert!(!form.sent);
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for bad in ["kofi", "kofi@", "@example.com", "kofi@example", "ko fi@example.com", "kofi@.com"] {
            let mut form = filled_form();
            form.email = bad.into();
            assert!(!form.validate(), "{bad:?} should be invalid");
            assert_eq!(form.errors.email, Some("Email is invalid"));
        }
    }

    #[test]
    fn test_phone_is_optional() {
        let mut form = filled_form();
        form.phone = String::new();
        assert!(form.validate());
    }

    #[test]
    fn test_whitespace_only_fields_fail() {
        let mut form = filled_form();
        form.message = "   ".into();
        assert!(!form.validate());
        assert_eq!(form.errors.message, Some("Message is required"));
    }
}
