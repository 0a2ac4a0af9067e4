use async_trait::async_trait;

use crate::domain::entities::{Customer, CustomerInfoUpdate, NewCustomer};

// Port for account persistence used by the customer use cases.
//
// Errors are the storage layer's own description of the fault; use cases log
// them through the translation boundary but never surface the text to callers.
// insert fails when the unique email constraint is violated.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, String>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, String>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, String>;
    async fn update_info(
        &self,
        email: &str,
        info: CustomerInfoUpdate,
    ) -> Result<Option<Customer>, String>;
    async fn mark_verified(&self, id: i64) -> Result<Option<Customer>, String>;
}

// Port for issuing account verification codes.
pub trait VerifyCodeSource: Send + Sync {
    fn next_code(&self) -> String;
}
