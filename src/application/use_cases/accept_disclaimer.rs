//! Disclaimer acceptance use case.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::DisclaimerStatus;
use crate::domain::errors::StoreError;
use crate::domain::ports::PreferenceStorePort;

/// Records the one-way disclaimer agreement.
///
/// The only transition is `NotAgreed -> Agreed`; there is deliberately no
/// operation that writes `NotAgreed` back.
#[derive(Clone)]
pub struct AcceptDisclaimerUseCase {
    store: Arc<dyn PreferenceStorePort>,
}

impl AcceptDisclaimerUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        Self { store }
    }

    /// Persists the agreement.
    ///
    /// # Errors
    /// Returns an error when the store cannot be written.
    pub async fn execute(&self) -> Result<DisclaimerStatus, StoreError> {
        self.store
            .set_disclaimer_status(DisclaimerStatus::Agreed)
            .await?;
        info!("Disclaimer agreement recorded");
        Ok(DisclaimerStatus::Agreed)
    }
}
