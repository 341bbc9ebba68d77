//! Reservation handlers
//!
//! Intake endpoint for the public reservation form.

use axum::{extract::State, Json};
use reservation_service::{CreateReservationRequest, ReservationCreatedResponse, ReservationService};

use crate::extractors::{RequestLocale, ValidatedJson};
use crate::response::{ApiError, ApiResult, LocalizedError};
use crate::state::AppState;

/// Submit a reservation
///
/// POST /api/v1/reservations
/// POST /api/reservation
pub async fn submit_reservation(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Json<ReservationCreatedResponse>> {
    let service = ReservationService::new(state.service_context());
    let response = service
        .submit(request, locale)
        .await
        .map_err(|e| ApiError::from(e).localized(locale))?;
    Ok(Json(response))
}

/// Any method other than POST on the intake paths
pub async fn method_not_allowed(RequestLocale(locale): RequestLocale) -> LocalizedError {
    ApiError::MethodNotAllowed.localized(locale)
}
