#![allow(dead_code)]

use async_trait::async_trait;
use billing_payment_info::application::action::Services;
use billing_payment_info::domain::payment_info::{
    CardReference, PaymentInfoSubmission, StoredPaymentInfo,
};
use billing_payment_info::domain::ports::BillingInfoProvider;
use billing_payment_info::domain::user::{Role, User};
use billing_payment_info::error::{BillingError, Result};
use billing_payment_info::infrastructure::in_memory::InMemoryBillingInfoProvider;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn admin() -> User {
    User::new(1, "Jon Snow", "jon@got.com", Role::Administrator)
}

/// A submission that passes every field check, billed to `country` with a
/// card issued in the same country.
pub fn valid_submission(country: &str) -> PaymentInfoSubmission {
    PaymentInfoSubmission {
        name: "Jon Snow".to_string(),
        email: "jon.snow@got.com".to_string(),
        card: Some(CardReference::new("tok_visa", country)),
        address_line1: "Castle Black".to_string(),
        address_line2: "The Wall".to_string(),
        address_city: "Winterfell".to_string(),
        address_state: "North".to_string(),
        address_postal_code: "W1".to_string(),
        address_country: country.to_string(),
    }
}

pub fn stored_payment_info(card_country: &str) -> StoredPaymentInfo {
    StoredPaymentInfo {
        stripe_card_id: "card_1".to_string(),
        card_country: card_country.to_string(),
        card_brand: "Visa".to_string(),
        card_last4: "4242".to_string(),
        card_exp_month: 12,
        card_exp_year: 2030,
        address_country: card_country.to_string(),
        ..Default::default()
    }
}

pub fn new_account_services() -> Services {
    Services::new(Box::new(InMemoryBillingInfoProvider::new()))
}

pub fn existing_account_services(card_country: &str) -> Services {
    Services::new(Box::new(InMemoryBillingInfoProvider::with_payment_info(
        stored_payment_info(card_country),
    )))
}

/// Provider whose backing store is unavailable.
pub struct FailingBillingInfoProvider;

#[async_trait]
impl BillingInfoProvider for FailingBillingInfoProvider {
    async fn get_payment_info(&self) -> Result<Option<StoredPaymentInfo>> {
        Err(BillingError::IoError(std::io::Error::other(
            "billing database unavailable",
        )))
    }
}

/// Wraps a provider and counts how often it is consulted.
pub struct CountingBillingInfoProvider<P> {
    inner: P,
    calls: Arc<AtomicUsize>,
}

impl<P> CountingBillingInfoProvider<P> {
    pub fn new(inner: P) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl<P: BillingInfoProvider> BillingInfoProvider for CountingBillingInfoProvider<P> {
    async fn get_payment_info(&self) -> Result<Option<StoredPaymentInfo>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_payment_info().await
    }
}
