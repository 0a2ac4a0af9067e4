use crate::domain::validation::FieldViolation;

// Domain-level failures for customer workflows.
//
// Storage carries the underlying cause for logging only; its text is never
// returned to callers. BusinessRule and Unexpected carry caller-visible text.
#[derive(Debug)]
pub enum CustomerError {
    Validation(Vec<FieldViolation>),
    Storage(String),
    BusinessRule(String),
    Unexpected(String),
}

impl CustomerError {
    // Lookup miss for a numeric id; the text is part of the API contract.
    pub fn id_not_found(id: i64) -> Self {
        CustomerError::BusinessRule(format!("Customer with id {id} not found"))
    }

    // Lookup miss for an email key; the text is part of the API contract.
    pub fn email_not_found(email: &str) -> Self {
        CustomerError::BusinessRule(format!("User with {email} email not found"))
    }
}
