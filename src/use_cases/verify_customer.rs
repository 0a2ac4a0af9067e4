use std::sync::Arc;

use crate::domain::entities::Customer;
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerStore;

// Account verification use case. A wrong code is not an error: the caller
// gets the unchanged account back and reads the verified flag.
pub struct VerifyCustomerUseCase {
    pub store: Arc<dyn CustomerStore>,
}

impl VerifyCustomerUseCase {
    pub async fn execute(&self, id: i64, code: &str) -> Result<Customer, CustomerError> {
        let customer = self
            .store
            .find_by_id(id)
            .await
            .map_err(CustomerError::Storage)?
            .ok_or_else(|| CustomerError::id_not_found(id))?;

        if customer.verified || customer.verify_code != code {
            return Ok(customer);
        }

        self.store
            .mark_verified(id)
            .await
            .map_err(CustomerError::Storage)?
            .ok_or_else(|| CustomerError::id_not_found(id))
    }
}
