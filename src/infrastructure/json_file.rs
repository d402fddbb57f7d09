use crate::domain::payment_info::StoredPaymentInfo;
use crate::domain::ports::BillingInfoProvider;
use crate::error::Result;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Billing info provider backed by a JSON snapshot on disk.
///
/// The file is read on every call so each validation sees the latest
/// snapshot. A missing file or a JSON `null` means no payment info was ever
/// configured; any other read or parse failure is an error.
#[derive(Debug, Clone)]
pub struct JsonFileBillingInfoProvider {
    path: PathBuf,
}

impl JsonFileBillingInfoProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BillingInfoProvider for JsonFileBillingInfoProvider {
    async fn get_payment_info(&self) -> Result<Option<StoredPaymentInfo>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no payment info snapshot on disk");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}
