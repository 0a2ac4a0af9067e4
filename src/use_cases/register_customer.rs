use std::sync::Arc;

use crate::domain::entities::{Authority, Customer, NewCustomer};
use crate::domain::errors::CustomerError;
use crate::domain::ports::{CustomerStore, VerifyCodeSource};
use crate::domain::validation::{FieldRule, Validator};
use crate::interface_adapters::protocol::RegisterCustomerRequest;

// Registration use case shared by the customer and admin endpoints.
pub struct RegisterCustomerUseCase {
    pub store: Arc<dyn CustomerStore>,
    pub codes: Arc<dyn VerifyCodeSource>,
}

impl RegisterCustomerUseCase {
    pub async fn execute(
        &self,
        payload: RegisterCustomerRequest,
        authority: Authority,
    ) -> Result<Customer, CustomerError> {
        registration_rules()
            .validate(&payload)
            .map_err(CustomerError::Validation)?;

        let customer = NewCustomer {
            email: payload.email,
            full_name: payload.full_name,
            address: payload.address,
            postcode: payload.postcode,
            city: payload.city,
            country: payload.country,
            password: payload.password,
            authority,
            verified: false,
            verify_code: self.codes.next_code(),
        };

        // Unique-email violations surface here as opaque storage failures;
        // callers see 500, not 409.
        self.store
            .insert(customer)
            .await
            .map_err(CustomerError::Storage)
    }
}

// Constraints applied to every registration payload, in report order. A fully
// blank payload violates all eight.
fn registration_rules() -> Validator<RegisterCustomerRequest> {
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
        FieldRule::not_blank("password", "Password cannot be empty", |p| {
            p.password.as_str()
        }),
    ])
}
