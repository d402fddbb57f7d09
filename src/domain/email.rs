use super::ports::EmailChecker;
use regex::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LENGTH: usize = 200;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// Default email checker: length limit plus a pattern match.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEmailChecker;

impl RegexEmailChecker {
    pub fn new() -> Self {
        Self
    }
}

impl EmailChecker for RegexEmailChecker {
    fn check(&self, email: &str) -> Vec<String> {
        let email = email.trim().to_lowercase();

        if email.is_empty() {
            return vec!["Email is required.".to_string()];
        }
        if email.chars().count() > MAX_EMAIL_LENGTH {
            return vec![format!(
                "Email must have less than {} characters.",
                MAX_EMAIL_LENGTH
            )];
        }
        if !EMAIL_PATTERN.is_match(&email) {
            return vec![format!("'{}' is not a valid email address.", email)];
        }

        Vec::new()
    }
}
