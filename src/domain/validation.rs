use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Field-level failures collected while validating a model.
///
/// Messages are appended per field in the order the checks run. An outcome
/// without failures is a success. Infrastructure failures are not represented
/// here; they surface as `BillingError` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    failures: BTreeMap<String, Vec<String>>,
}

impl ValidationOutcome {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn add_field_failure(&mut self, field: &str, message: impl Into<String>) {
        self.failures
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Appends every message to `field`. Does nothing if `messages` is empty.
    pub fn add_field_failures<I, S>(&mut self, field: &str, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for message in messages {
            self.add_field_failure(field, message);
        }
    }

    pub fn has_failure(&self, field: &str) -> bool {
        self.failures.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.failures.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn failures(&self) -> &BTreeMap<String, Vec<String>> {
        &self.failures
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationOutcome", 2)?;
        state.serialize_field("ok", &self.is_ok())?;
        state.serialize_field("failures", &self.failures)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_ok() {
        let outcome = ValidationOutcome::success();
        assert!(outcome.is_ok());
        assert!(outcome.messages("name").is_empty());
    }

    #[test]
    fn test_messages_keep_append_order() {
        let mut outcome = ValidationOutcome::success();
        outcome.add_field_failure("addressCountry", "first");
        outcome.add_field_failures("addressCountry", ["second", "third"]);

        assert!(!outcome.is_ok());
        assert_eq!(outcome.messages("addressCountry"), ["first", "second", "third"]);
    }

    #[test]
    fn test_empty_messages_do_not_fail() {
        let mut outcome = ValidationOutcome::success();
        outcome.add_field_failures("email", Vec::<String>::new());
        assert!(outcome.is_ok());
        assert!(!outcome.has_failure("email"));
    }

    #[test]
    fn test_serialization() {
        let mut outcome = ValidationOutcome::success();
        outcome.add_field_failure("name", "Name is required.");

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ok": false, "failures": { "name": ["Name is required."] } })
        );
    }
}
