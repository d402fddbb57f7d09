use super::action::{Action, Services};
use crate::domain::payment_info::{CardReference, PaymentInfoSubmission, StoredPaymentInfo};
use crate::domain::ports::{CountryReference, EmailChecker};
use crate::domain::user::User;
use crate::domain::validation::ValidationOutcome;
use crate::error::{BillingError, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

const COUNTRY_MISMATCH: &str = "Country that doesn't match with card issue country.";

/// How a submission relates to the payment info already on file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentInfoChange {
    /// No payment info configured yet.
    New,
    /// Payment info exists and the card is kept.
    Update(StoredPaymentInfo),
    /// Payment info exists and a new card is submitted.
    Replacing(StoredPaymentInfo),
}

impl PaymentInfoChange {
    pub fn classify(current: Option<StoredPaymentInfo>, card: Option<&CardReference>) -> Self {
        match (current, card) {
            (None, _) => Self::New,
            (Some(current), None) => Self::Update(current),
            (Some(current), Some(_)) => Self::Replacing(current),
        }
    }

    pub fn requires_card(&self) -> bool {
        matches!(self, Self::New | Self::Replacing(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Update(_) => "update",
            Self::Replacing(_) => "replacing",
        }
    }
}

/// Creates or edits the billing payment info of the current tenant.
#[derive(Debug, Clone, Default)]
pub struct CreateEditBillingPaymentInfo {
    pub model: PaymentInfoSubmission,
}

impl CreateEditBillingPaymentInfo {
    pub fn new(model: PaymentInfoSubmission) -> Self {
        Self { model }
    }

    fn check_required_fields(&self, email: &dyn EmailChecker, result: &mut ValidationOutcome) {
        let model = &self.model;

        if model.name.is_empty() {
            result.add_field_failure("name", "Name is required.");
        }

        if model.email.is_empty() {
            result.add_field_failure("email", "Email is required");
        } else {
            result.add_field_failures("email", email.check(&model.email));
        }

        if model.address_line1.is_empty() {
            result.add_field_failure("addressLine1", "Address Line 1 is required.");
        }

        if model.address_line2.is_empty() {
            result.add_field_failure("addressLine2", "Address Line 2 is required.");
        }

        if model.address_city.is_empty() {
            result.add_field_failure("addressCity", "City is required.");
        }

        if model.address_state.is_empty() {
            result.add_field_failure("addressState", "State/Region is required.");
        }

        if model.address_postal_code.is_empty() {
            result.add_field_failure("addressPostalCode", "Postal Code is required.");
        }
    }

    fn check_card(&self, change: &PaymentInfoChange, result: &mut ValidationOutcome) {
        let has_token = self.model.card.as_ref().is_some_and(CardReference::has_token);
        if change.requires_card() && !has_token {
            result.add_field_failure("card", "Card information is required.");
        }
    }

    fn check_country(
        &self,
        change: &PaymentInfoChange,
        countries: &dyn CountryReference,
        result: &mut ValidationOutcome,
    ) {
        let country = self.model.address_country.as_str();
        if country.is_empty() {
            result.add_field_failure("addressCountry", "Country is required.");
            return;
        }

        if !countries.contains(country) {
            result.add_field_failure(
                "addressCountry",
                format!("'{}' is not a valid country code.", country),
            );
        }

        let expected = match (change, &self.model.card) {
            (PaymentInfoChange::New | PaymentInfoChange::Replacing(_), Some(card)) => {
                Some(card.country.as_str())
            }
            (PaymentInfoChange::Update(current), _) => Some(current.card_country.as_str()),
            _ => None,
        };

        if expected.is_some_and(|expected| expected != country) {
            result.add_field_failure("addressCountry", COUNTRY_MISMATCH);
        }
    }
}

#[async_trait]
impl Action for CreateEditBillingPaymentInfo {
    type Model = PaymentInfoSubmission;

    fn initialize(&mut self) -> &mut PaymentInfoSubmission {
        self.model = PaymentInfoSubmission::default();
        &mut self.model
    }

    fn is_authorized(&self, user: Option<&User>, _services: &Services) -> bool {
        user.is_some_and(User::is_administrator)
    }

    async fn validate(
        &self,
        _user: Option<&User>,
        services: &Services,
    ) -> Result<ValidationOutcome> {
        let mut result = ValidationOutcome::success();

        self.check_required_fields(services.email.as_ref(), &mut result);

        let current = services.billing.get_payment_info().await.map_err(|e| {
            warn!(error = %e, "could not read current payment info");
            BillingError::RetrievalError(Box::new(e))
        })?;

        let change = PaymentInfoChange::classify(current, self.model.card.as_ref());
        debug!(change = change.kind(), "classified payment info change");

        self.check_card(&change, &mut result);
        self.check_country(&change, services.countries.as_ref(), &mut result);

        debug!(
            ok = result.is_ok(),
            failed_fields = result.failures().len(),
            "validated payment info"
        );
        Ok(result)
    }
}
