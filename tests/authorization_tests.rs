mod common;

use billing_payment_info::application::action::{self, Action, Services};
use billing_payment_info::application::billing::CreateEditBillingPaymentInfo;
use billing_payment_info::domain::user::{Role, User};
use billing_payment_info::error::BillingError;
use billing_payment_info::infrastructure::in_memory::InMemoryBillingInfoProvider;
use common::*;
use std::sync::atomic::Ordering;

#[test]
fn test_only_administrators_are_authorized() {
    let services = new_account_services();
    let action = CreateEditBillingPaymentInfo::new(valid_submission("US"));

    let visitor = User::new(2, "Arya", "arya@got.com", Role::Visitor);
    let collaborator = User::new(3, "Sansa", "sansa@got.com", Role::Collaborator);

    assert!(action.is_authorized(Some(&admin()), &services));
    assert!(!action.is_authorized(Some(&collaborator), &services));
    assert!(!action.is_authorized(Some(&visitor), &services));
    assert!(!action.is_authorized(None, &services));
}

#[tokio::test]
async fn test_run_rejects_unauthorized_without_reading_payment_info() {
    let (provider, calls) = CountingBillingInfoProvider::new(InMemoryBillingInfoProvider::new());
    let services = Services::new(Box::new(provider));
    let action = CreateEditBillingPaymentInfo::new(valid_submission("US"));
    let collaborator = User::new(3, "Sansa", "sansa@got.com", Role::Collaborator);

    let result = action::run(&action, Some(&collaborator), &services).await;
    assert!(matches!(result, Err(BillingError::Unauthorized)));

    let result = action::run(&action, None, &services).await;
    assert!(matches!(result, Err(BillingError::Unauthorized)));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_run_validates_for_administrators() {
    let services = new_account_services();
    let mut submission = valid_submission("US");
    submission.name.clear();
    let action = CreateEditBillingPaymentInfo::new(submission);

    let result = action::run(&action, Some(&admin()), &services).await.unwrap();
    assert_eq!(result.messages("name"), ["Name is required."]);
}
