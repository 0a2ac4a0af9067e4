use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerInfoUpdate};
use crate::domain::errors::CustomerError;
use crate::domain::ports::CustomerStore;
use crate::domain::validation::{FieldRule, Validator};
use crate::interface_adapters::protocol::UpdateCustomerRequest;

// Profile update use case; the payload's email addresses the account.
pub struct UpdateCustomerUseCase {
    pub store: Arc<dyn CustomerStore>,
}

impl UpdateCustomerUseCase {
    pub async fn execute(&self, payload: UpdateCustomerRequest) -> Result<Customer, CustomerError> {
        update_rules()
            .validate(&payload)
            .map_err(CustomerError::Validation)?;

        let info = CustomerInfoUpdate {
            full_name: payload.full_name,
            address: payload.address,
            postcode: payload.postcode,
            city: payload.city,
            country: payload.country,
        };

        self.store
            .update_info(&payload.email, info)
            .await
            .map_err(CustomerError::Storage)?
            .ok_or_else(|| CustomerError::email_not_found(&payload.email))
    }
}

// Constraints applied to every profile update, in report order. Same set as
// registration minus the password rule.
fn update_rules() -> Validator<UpdateCustomerRequest> {
    Validator::new(vec![
        FieldRule::not_blank("email", "Email cannot be empty", |p| p.email.as_str()),
        FieldRule::email("email", "Invalid email address format", |p| p.email.as_str()),
        FieldRule::not_blank("full_name", "Full name cannot be empty", |p| {
            p.full_name.as_str()
        }),
        FieldRule::not_blank("address", "Address cannot be empty", |p| p.address.as_str()),
        FieldRule::not_blank("postcode", "Postcode cannot be empty", |p| {
            p.postcode.as_str()
        }),
        FieldRule::not_blank("city", "City cannot be empty", |p| p.city.as_str()),
        FieldRule::not_blank("country", "Country cannot be empty", |p| p.country.as_str()),
    ])
}
