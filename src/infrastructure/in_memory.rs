use crate::domain::payment_info::StoredPaymentInfo;
use crate::domain::ports::BillingInfoProvider;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory billing info provider.
///
/// Uses `Arc<RwLock<Option<StoredPaymentInfo>>>` so clones share the same
/// snapshot. Ideal for testing or when payment info is seeded from elsewhere.
#[derive(Default, Clone)]
pub struct InMemoryBillingInfoProvider {
    payment_info: Arc<RwLock<Option<StoredPaymentInfo>>>,
}

impl InMemoryBillingInfoProvider {
    /// Creates a provider with no payment info configured.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payment_info(payment_info: StoredPaymentInfo) -> Self {
        Self {
            payment_info: Arc::new(RwLock::new(Some(payment_info))),
        }
    }

    pub async fn set(&self, payment_info: StoredPaymentInfo) {
        *self.payment_info.write().await = Some(payment_info);
    }

    pub async fn clear(&self) {
        *self.payment_info.write().await = None;
    }
}

#[async_trait]
impl BillingInfoProvider for InMemoryBillingInfoProvider {
    async fn get_payment_info(&self) -> Result<Option<StoredPaymentInfo>> {
        Ok(self.payment_info.read().await.clone())
    }
}
