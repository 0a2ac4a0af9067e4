use std::sync::Arc;

use crate::domain::entities::Customer;
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerStore;

// Lookup use case behind the by-id and by-email endpoints. Misses are
// business-rule failures carrying the caller-visible message.
pub struct FindCustomerUseCase {
    pub store: Arc<dyn CustomerStore>,
}

impl FindCustomerUseCase {
    pub async fn by_id(&self, id: i64) -> Result<Customer, CustomerError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(CustomerError::Storage)?
            .ok_or_else(|| CustomerError::id_not_found(id))
    }

    pub async fn by_email(&self, email: &str) -> Result<Customer, CustomerError> {
        self.store
            .find_by_email(email)
            .await
            .map_err(CustomerError::Storage)?
            .ok_or_else(|| CustomerError::email_not_found(email))
    }
}
