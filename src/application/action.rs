use crate::domain::country::Countries;
use crate::domain::email::RegexEmailChecker;
use crate::domain::ports::{BillingInfoProviderBox, CountryReferenceBox, EmailCheckerBox};
use crate::domain::user::User;
use crate::domain::validation::ValidationOutcome;
use crate::error::{BillingError, Result};
use async_trait::async_trait;
use tracing::warn;

/// Collaborators available to actions while they authorize and validate.
pub struct Services {
    pub billing: BillingInfoProviderBox,
    pub email: EmailCheckerBox,
    pub countries: CountryReferenceBox,
}

impl Services {
    /// Creates a `Services` bundle around a billing provider, using the
    /// default email checker and the built-in country list.
    pub fn new(billing: BillingInfoProviderBox) -> Self {
        Self {
            billing,
            email: Box::new(RegexEmailChecker::new()),
            countries: Box::new(Countries::builtin()),
        }
    }

    pub fn with_email_checker(mut self, email: EmailCheckerBox) -> Self {
        self.email = email;
        self
    }

    pub fn with_countries(mut self, countries: CountryReferenceBox) -> Self {
        self.countries = countries;
        self
    }
}

/// An input bound from a request, authorized and validated before the
/// handler acts on it.
#[async_trait]
pub trait Action: Send + Sync {
    type Model: Default + Send + Sync;

    /// Resets the model to its empty state and hands it out to be populated.
    fn initialize(&mut self) -> &mut Self::Model;

    fn is_authorized(&self, user: Option<&User>, services: &Services) -> bool;

    /// Collects field failures. Only infrastructure failures are returned as `Err`.
    async fn validate(&self, user: Option<&User>, services: &Services)
    -> Result<ValidationOutcome>;
}

/// Authorizes `action` for `user` and validates it.
///
/// Validation never runs for unauthorized users, so no collaborator is
/// consulted in that case.
pub async fn run<A: Action>(
    action: &A,
    user: Option<&User>,
    services: &Services,
) -> Result<ValidationOutcome> {
    if !action.is_authorized(user, services) {
        warn!(user_id = user.map(|u| u.id), "unauthorized action attempt");
        return Err(BillingError::Unauthorized);
    }

    action.validate(user, services).await
}
