use serde::{Deserialize, Serialize};

use crate::domain::entities::{Authority, Customer};
use crate::domain::validation::FieldViolation;

// Request payload for registering a customer or admin account. Fields left
// out of the body bind as empty strings and fail the blank rules.
#[derive(Debug, Deserialize)]
pub struct RegisterCustomerRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub password: String,
}

// Request payload for updating the profile fields of an existing account.
// Absent fields bind as empty strings, same as registration.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

// Request payload for verifying an account with its emailed code.
#[derive(Debug, Deserialize)]
pub struct VerifyCustomerRequest {
    pub id: i64,
    pub verify_code: String,
}

// Public view of an account. Never carries the password or the verify code.
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub authority: Authority,
    pub verified: bool,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id,
            email: customer.email,
            full_name: customer.full_name,
            address: customer.address,
            postcode: customer.postcode,
            city: customer.city,
            country: customer.country,
            authority: customer.authority,
            verified: customer.verified,
        }
    }
}

// Outcome marker carried by every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

// One field-level failure inside an error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

// Uniform envelope returned for every failure and for plain status endpoints.
// `errors` is populated for validation failures only; it serializes as an
// empty array otherwise.
#[derive(Debug, Serialize)]
pub struct Message {
    pub status: Status,
    pub url: String,
    pub message: String,
    pub errors: Vec<ErrorDetail>,
}

impl Message {
    pub fn ok(url: impl Into<String>, message: impl Into<String>) -> Self {
        Message {
            status: Status::Ok,
            url: url.into(),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn error(
        url: impl Into<String>,
        message: impl Into<String>,
        errors: Vec<ErrorDetail>,
    ) -> Self {
        Message {
            status: Status::Error,
            url: url.into(),
            message: message.into(),
            errors,
        }
    }
}

impl From<&FieldViolation> for ErrorDetail {
    fn from(violation: &FieldViolation) -> Self {
        ErrorDetail {
            field: violation.field.to_string(),
            message: violation.message.to_string(),
        }
    }
}
