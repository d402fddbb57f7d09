use crate::application::action::Action;
use crate::application::billing::CreateEditBillingPaymentInfo;
use crate::domain::payment_info::PaymentInfoSubmission;
use crate::error::Result;
use std::io::Read;

/// Binds a JSON request body to a fresh `CreateEditBillingPaymentInfo` action.
///
/// The action's model is initialized first and then replaced with the
/// decoded body, so fields absent from the body stay empty.
pub fn read_submission<R: Read>(source: R) -> Result<CreateEditBillingPaymentInfo> {
    let mut action = CreateEditBillingPaymentInfo::default();
    let model = action.initialize();
    *model = serde_json::from_reader::<_, PaymentInfoSubmission>(source)?;
    Ok(action)
}
