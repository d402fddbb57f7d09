mod common;

use billing_payment_info::application::action::Action;
use billing_payment_info::application::billing::CreateEditBillingPaymentInfo;
use billing_payment_info::domain::payment_info::{CardReference, PaymentInfoSubmission};
use common::*;
use rand::Rng;
use rand::seq::SliceRandom;

const COUNTRIES: [&str; 5] = ["US", "BR", "GB", "ZZ", ""];
const VALUES: [&str; 3] = ["", "x", "not-an-email"];

fn random_submission<R: Rng>(rng: &mut R) -> PaymentInfoSubmission {
    let mut pick = |values: &[&str]| {
        values
            .choose(&mut *rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    };

    let name = pick(&VALUES);
    let email = pick(&["", "bad", "jon@got.com"]);
    let address_line1 = pick(&VALUES);
    let address_line2 = pick(&VALUES);
    let address_city = pick(&VALUES);
    let address_state = pick(&VALUES);
    let address_postal_code = pick(&VALUES);
    let address_country = pick(&COUNTRIES);
    let card_token = pick(&["", "tok_visa"]);
    let card_country = pick(&COUNTRIES);

    let card = rng
        .gen_bool(0.7)
        .then(|| CardReference::new(card_token, card_country));

    PaymentInfoSubmission {
        name,
        email,
        card,
        address_line1,
        address_line2,
        address_city,
        address_state,
        address_postal_code,
        address_country,
    }
}

#[tokio::test]
async fn test_validation_is_idempotent() {
    let mut rng = rand::thread_rng();
    let user = admin();

    for _ in 0..200 {
        let submission = random_submission(&mut rng);
        let services = if rng.gen_bool(0.5) {
            new_account_services()
        } else {
            existing_account_services(COUNTRIES[rng.gen_range(0..COUNTRIES.len())])
        };
        let action = CreateEditBillingPaymentInfo::new(submission.clone());

        let first = action.validate(Some(&user), &services).await.unwrap();
        let second = action.validate(Some(&user), &services).await.unwrap();

        assert_eq!(first, second, "submission: {:?}", submission);
        assert_eq!(action.model, submission, "validation must not mutate the model");
    }
}
