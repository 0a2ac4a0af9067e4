use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::entities::Authority;
use crate::domain::errors::CustomerError;
use crate::interface_adapters::failure::{RequestUrl, translate};
use crate::interface_adapters::protocol::{
    CustomerResponse, Message, RegisterCustomerRequest, UpdateCustomerRequest,
    VerifyCustomerRequest,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::find_customer::FindCustomerUseCase;
use crate::use_cases::register_customer::RegisterCustomerUseCase;
use crate::use_cases::update_customer::UpdateCustomerUseCase;
use crate::use_cases::verify_customer::VerifyCustomerUseCase;

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<Message>)>;

// Handler for registering a customer account.
pub async fn register_customer(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    payload: Result<Json<RegisterCustomerRequest>, JsonRejection>,
) -> HandlerResult<CustomerResponse> {
    register(state, url, payload, Authority::Customer).await
}

// Handler for registering an admin account.
pub async fn register_admin(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    payload: Result<Json<RegisterCustomerRequest>, JsonRejection>,
) -> HandlerResult<CustomerResponse> {
    register(state, url, payload, Authority::Admin).await
}

// Both registration endpoints share one flow; only the granted authority
// differs.
async fn register(
    state: AppState,
    url: String,
    payload: Result<Json<RegisterCustomerRequest>, JsonRejection>,
    authority: Authority,
) -> HandlerResult<CustomerResponse> {
    let Json(payload) = payload.map_err(|rejection| unreadable_payload(url.clone(), rejection))?;

    let use_case = RegisterCustomerUseCase {
        store: state.store.clone(),
        codes: state.codes.clone(),
    };

    let customer = use_case
        .execute(payload, authority)
        .await
        .map_err(|err| translate(url, err))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// Handler for updating the profile fields of an existing account.
pub async fn update_customer(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> HandlerResult<CustomerResponse> {
    let Json(payload) = payload.map_err(|rejection| unreadable_payload(url.clone(), rejection))?;

    let use_case = UpdateCustomerUseCase {
        store: state.store.clone(),
    };

    let customer = use_case
        .execute(payload)
        .await
        .map_err(|err| translate(url, err))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// Handler for confirming an account with its emailed code.
pub async fn verify_customer(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    payload: Result<Json<VerifyCustomerRequest>, JsonRejection>,
) -> HandlerResult<CustomerResponse> {
    let Json(payload) = payload.map_err(|rejection| unreadable_payload(url.clone(), rejection))?;

    let use_case = VerifyCustomerUseCase {
        store: state.store.clone(),
    };

    let customer = use_case
        .execute(payload.id, &payload.verify_code)
        .await
        .map_err(|err| translate(url, err))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// Handler for looking up an account by email. An email parameter that does
// not decode is reported through the envelope like any other bad argument.
pub async fn find_by_email(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    email: Result<Path<String>, PathRejection>,
) -> HandlerResult<CustomerResponse> {
    let Path(email) = email.map_err(|rejection| {
        translate(
            url.clone(),
            CustomerError::Unexpected(rejection.body_text()),
        )
    })?;

    let use_case = FindCustomerUseCase {
        store: state.store.clone(),
    };

    let customer = use_case
        .by_email(&email)
        .await
        .map_err(|err| translate(url, err))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// Handler for looking up an account by id. A non-numeric id is reported
// through the envelope like any other bad argument.
pub async fn find_by_id(
    State(state): State<AppState>,
    RequestUrl(url): RequestUrl,
    id: Result<Path<i64>, PathRejection>,
) -> HandlerResult<CustomerResponse> {
    let Path(id) = id.map_err(|rejection| {
        translate(
            url.clone(),
            CustomerError::Unexpected(rejection.body_text()),
        )
    })?;

    let use_case = FindCustomerUseCase {
        store: state.store.clone(),
    };

    let customer = use_case.by_id(id).await.map_err(|err| translate(url, err))?;

    Ok(Json(CustomerResponse::from(customer)))
}

// Handler for the health check. Exercises the ok side of the envelope.
pub async fn health(RequestUrl(url): RequestUrl) -> Json<Message> {
    Json(Message::ok(url, "OK"))
}

// A body that cannot be read as the expected JSON is surfaced with the
// rejection's own text, same as any other unexpected failure.
fn unreadable_payload(url: String, rejection: JsonRejection) -> (StatusCode, Json<Message>) {
    translate(url, CustomerError::Unexpected(rejection.body_text()))
}
