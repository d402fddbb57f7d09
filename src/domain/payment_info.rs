use serde::{Deserialize, Serialize};

/// Card token attached to a submission when a card is being set up or replaced.
///
/// The token comes from the payment widget and can be used once to verify or
/// charge the card. `country` is the card's issuing country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardReference {
    #[serde(rename = "type")]
    pub r#type: String,
    pub token: String,
    pub country: String,
}

impl CardReference {
    pub fn new(token: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            r#type: "card".to_string(),
            token: token.into(),
            country: country.into(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Candidate payment info as submitted by an administrator.
///
/// Missing keys in the inbound JSON become empty strings, so that the
/// required-field checks report them instead of the request failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentInfoSubmission {
    pub name: String,
    pub email: String,
    pub card: Option<CardReference>,
    pub address_line1: String,
    pub address_line2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_postal_code: String,
    pub address_country: String,
}

/// Payment profile currently stored by the billing subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredPaymentInfo {
    #[serde(rename = "stripeCardID")]
    pub stripe_card_id: String,
    /// Issuing country of the stored card. Empty when no card was attached yet.
    pub card_country: String,
    pub card_brand: String,
    pub card_last4: String,
    pub card_exp_month: u8,
    pub card_exp_year: u16,
    pub name: String,
    pub email: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_city: String,
    pub address_state: String,
    pub address_postal_code: String,
    pub address_country: String,
}

impl StoredPaymentInfo {
    pub fn has_card(&self) -> bool {
        !self.stripe_card_id.is_empty()
    }
}
