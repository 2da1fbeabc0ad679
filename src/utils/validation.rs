use validator::ValidateEmail;

use crate::types::error::{AppError, FieldErrors};
use crate::types::token::RTokenCreate;
use crate::types::user::{NewAccount, RUserCreate, RUserUpdate, UserPatch};

pub const PASSWORD_MIN_LENGTH: usize = 10;
pub const MAX_FIELD_LENGTH: usize = 255;

const REQUIRED: &str = "This field is required.";
const BLANK: &str = "This field may not be blank.";

/// Password rules applied wherever a password is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: PASSWORD_MIN_LENGTH }
    }
}

impl PasswordPolicy {
    /// Failed rule messages, empty when the password is acceptable.
    pub fn check(&self, password: &str) -> Vec<String> {
        let mut failures = Vec::new();
        if password.chars().count() < self.min_length {
            failures.push(format!(
                "Ensure this field has at least {} characters.",
                self.min_length
            ));
        }
        failures
    }

    pub fn enforce(&self, password: &str) -> Result<(), AppError> {
        let failures = self.check(password);
        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::PasswordPolicy(failures))
        }
    }
}

/// International format: leading `+`, 8 to 15 digits, common separators.
pub fn is_valid_phone_number(phone: &str) -> bool {
    let Some(rest) = phone.strip_prefix('+') else {
        return false;
    };
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }
    if !rest.chars().all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '.' | '(' | ')')) {
        return false;
    }
    let digits = rest.chars().filter(char::is_ascii_digit).count();
    (8..=15).contains(&digits)
}

/// E.164 form of a valid number: `+` and the digits, separators dropped.
pub fn canonical_phone_number(phone: &str) -> Option<String> {
    if !is_valid_phone_number(phone) {
        return None;
    }
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    Some(format!("+{digits}"))
}

#[derive(Default)]
struct Collector {
    errors: FieldErrors,
}

impl Collector {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_string()).or_default().push(message.into());
    }

    fn required<'a>(&mut self, field: &str, value: Option<&'a str>) -> Option<&'a str> {
        match value {
            None => {
                self.push(field, REQUIRED);
                None
            }
            Some(v) if v.trim().is_empty() => {
                self.push(field, BLANK);
                None
            }
            Some(v) => Some(v),
        }
    }

    fn max_length(&mut self, field: &str, value: &str) {
        if value.chars().count() > MAX_FIELD_LENGTH {
            self.push(
                field,
                format!("Ensure this field has no more than {MAX_FIELD_LENGTH} characters."),
            );
        }
    }

    fn phone(&mut self, value: Option<&str>) -> Option<String> {
        let phone = value.map(str::trim).filter(|p| !p.is_empty())?;
        match canonical_phone_number(phone) {
            Some(canonical) => Some(canonical),
            None => {
                self.push("phone_number", "Enter a valid phone number.");
                Some(phone.to_string())
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, AppError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

/// Boundary checks for a registration or admin-add request. Every failing field is reported.
pub fn validate_registration(body: &RUserCreate, policy: &PasswordPolicy) -> Result<NewAccount, AppError> {
    let mut c = Collector::default();

    let email = c.required("email", body.email.as_deref()).map(str::trim);
    if let Some(email) = email {
        let candidate = email.to_string();
        if !candidate.validate_email() {
            c.push("email", "Enter a valid email address.");
        }
        c.max_length("email", email);
    }

    let password = c.required("password", body.password.as_deref()).map(str::trim);
    if let Some(password) = password {
        for failure in policy.check(password) {
            c.push("password", failure);
        }
    }

    let phone_number = c.phone(body.phone_number.as_deref());

    let name = body.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    if let Some(name) = name {
        c.max_length("name", name);
    }

    let account = NewAccount {
        email: email.unwrap_or_default().to_string(),
        password: password.unwrap_or_default().to_string(),
        phone_number,
        name: name.map(str::to_string),
    };
    c.finish(account)
}

/// Presence checks only; credential mismatches are reported generically elsewhere.
pub fn validate_login(body: &RTokenCreate) -> Result<(String, String), AppError> {
    let mut c = Collector::default();
    let email = c.required("email", body.email.as_deref()).map(str::trim);
    let password = c.required("password", body.password.as_deref());
    let creds = (
        email.unwrap_or_default().to_string(),
        password.unwrap_or_default().to_string(),
    );
    c.finish(creds)
}

/// Admin change request. An empty phone number clears it.
pub fn validate_update(body: &RUserUpdate) -> Result<UserPatch, AppError> {
    let mut c = Collector::default();

    let name = body.name.as_deref().map(str::trim);
    if let Some(name) = name {
        c.max_length("name", name);
    }

    let phone_number = body.phone_number.as_deref().map(|p| c.phone(Some(p)));

    let patch = UserPatch {
        name: name.map(str::to_string),
        phone_number,
        is_staff: body.is_staff,
        is_active: body.is_active,
    };
    c.finish(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(email: &str, password: &str, phone: Option<&str>) -> RUserCreate {
        RUserCreate {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            phone_number: phone.map(str::to_string),
            name: None,
        }
    }

    fn field_errors(err: AppError) -> FieldErrors {
        match err {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn password_policy_counts_characters() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.check("nineChars").len(), 1);
        assert!(policy.check("tenChars10").is_empty());
        assert!(policy.check("ééééééééééé").is_empty());
        assert!(matches!(policy.enforce("short"), Err(AppError::PasswordPolicy(_))));
    }

    #[test]
    fn phone_numbers_must_be_international() {
        assert!(is_valid_phone_number("+1-202-555-0111"));
        assert!(is_valid_phone_number("+44 20 7946 0958"));
        assert!(!is_valid_phone_number("202-555-0111"));
        assert!(!is_valid_phone_number("+1-202"));
        assert!(!is_valid_phone_number("+1-202-555-01x1"));
        assert!(!is_valid_phone_number("+-1202555011"));
    }

    #[test]
    fn valid_registration_passes_through() {
        let account = validate_registration(
            &registration("test@example.com", "testPassword123", Some("+1-202-555-0111")),
            &PasswordPolicy::default(),
        )
        .unwrap();
        assert_eq!(account.email, "test@example.com");
        assert_eq!(account.phone_number.as_deref(), Some("+12025550111"));
        assert_eq!(account.name, None);
    }

    #[test]
    fn phone_number_formats_share_one_canonical_form() {
        for formatted in ["+1-202-555-0111", "+12025550111", "+1 202 555 0111", "+1 (202) 555.0111"] {
            assert_eq!(canonical_phone_number(formatted).as_deref(), Some("+12025550111"));
        }
        assert_eq!(canonical_phone_number("202-555-0111"), None);
    }

    #[test]
    fn password_is_trimmed_before_the_policy_check() {
        let errors = field_errors(
            validate_registration(
                &registration("test@example.com", "         a", None),
                &PasswordPolicy::default(),
            )
            .unwrap_err(),
        );
        assert!(errors["password"][0].contains("at least 10"));

        let account = validate_registration(
            &registration("test@example.com", "  testPassword123  ", None),
            &PasswordPolicy::default(),
        )
        .unwrap();
        assert_eq!(account.password, "testPassword123");
    }

    #[test]
    fn empty_phone_number_is_absent() {
        let account = validate_registration(
            &registration("test@example.com", "testPassword123", Some("")),
            &PasswordPolicy::default(),
        )
        .unwrap();
        assert_eq!(account.phone_number, None);
    }

    #[test]
    fn short_password_is_a_password_field_error() {
        let errors = field_errors(
            validate_registration(
                &registration("test@example.com", "nineChars", None),
                &PasswordPolicy::default(),
            )
            .unwrap_err(),
        );
        assert_eq!(errors.len(), 1);
        assert!(errors["password"][0].contains("at least 10"));
    }

    #[test]
    fn every_bad_field_is_reported() {
        let errors = field_errors(
            validate_registration(
                &RUserCreate { phone_number: Some("555".into()), ..Default::default() },
                &PasswordPolicy::default(),
            )
            .unwrap_err(),
        );
        assert_eq!(errors["email"], vec![REQUIRED.to_string()]);
        assert_eq!(errors["password"], vec![REQUIRED.to_string()]);
        assert_eq!(errors["phone_number"], vec!["Enter a valid phone number.".to_string()]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = field_errors(
            validate_registration(
                &registration("not-an-email", "testPassword123", None),
                &PasswordPolicy::default(),
            )
            .unwrap_err(),
        );
        assert_eq!(errors["email"], vec!["Enter a valid email address.".to_string()]);
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = field_errors(
            validate_login(&RTokenCreate { email: Some("a@b.com".into()), password: None }).unwrap_err(),
        );
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["password"]);
    }

    #[test]
    fn update_canonicalizes_phone_number() {
        let patch = validate_update(&RUserUpdate {
            phone_number: Some("+1 202 555 0199".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.phone_number, Some(Some("+12025550199".to_string())));
    }

    #[test]
    fn update_with_blank_phone_clears_it() {
        let patch = validate_update(&RUserUpdate {
            phone_number: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.phone_number, Some(None));
        assert_eq!(patch.name, None);
    }
}
