use super::country::Country;
use super::payment_info::StoredPaymentInfo;
use crate::error::Result;
use async_trait::async_trait;

/// Read access to the payment info the billing subsystem holds for the tenant.
#[async_trait]
pub trait BillingInfoProvider: Send + Sync {
    /// Returns `Ok(None)` when payment info was never configured.
    async fn get_payment_info(&self) -> Result<Option<StoredPaymentInfo>>;
}

/// Checks the format of an email address. An empty result means valid.
pub trait EmailChecker: Send + Sync {
    fn check(&self, email: &str) -> Vec<String>;
}

/// Authoritative set of country codes accepted on a billing address.
pub trait CountryReference: Send + Sync {
    fn countries(&self) -> &[Country];
    fn contains(&self, code: &str) -> bool;
}

pub type BillingInfoProviderBox = Box<dyn BillingInfoProvider>;
pub type EmailCheckerBox = Box<dyn EmailChecker>;
pub type CountryReferenceBox = Box<dyn CountryReference>;
