use crate::interface_adapters::handlers::{
    find_by_email, find_by_id, health, register_admin, register_customer, update_customer,
    verify_customer,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/customer", post(register_customer))
        .route("/admin", post(register_admin))
        .route("/update", put(update_customer))
        .route("/customer/verify", post(verify_customer))
        .route("/customer/email/{email}", get(find_by_email))
        .route("/customer/id/{id}", get(find_by_id))
        .route("/health", get(health))
        .with_state(state)
}
