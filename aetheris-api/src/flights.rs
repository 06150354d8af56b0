use aetheris_core::search::{DateRangeQuery, PriceRangeQuery, RouteQuery, UpcomingQuery};
use aetheris_core::{CoreError, Flight, FlightStatus, SeatReservation};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::{JsonBody, Path, Query};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReservationRequest {
    pub seats: u32,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: FlightStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneReassignmentRequest {
    pub plane_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub seats: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub flight_id: Uuid,
    pub requested_seats: u32,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct LongestQuery {
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct StatusCountResponse {
    pub status: String,
    pub count: usize,
}

type ApiResult<T> = Result<T, AppError>;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(list_flights).post(create_flight))
        .route(
            "/api/flights/{id}",
            get(get_flight).put(update_flight).delete(delete_flight),
        )
        .route("/api/flights/code/{code}", get(get_flight_by_code))
        .route("/api/flights/search", get(search_flights))
        .route("/api/flights/status/{status}", get(list_by_status))
        .route("/api/flights/date/{date}", get(list_by_date))
        .route("/api/flights/range", get(list_by_date_range))
        .route("/api/flights/plane/{plane_id}", get(list_by_plane))
        .route("/api/flights/pilot/{pilot_id}", get(list_by_pilot))
        .route("/api/flights/price", get(list_by_price))
        .route("/api/flights/upcoming", get(list_upcoming))
        .route("/api/flights/{id}/availability", get(check_availability))
        .route("/api/flights/{id}/reservations", post(reserve_seats))
        .route("/api/flights/{id}/status", put(update_status))
        .route("/api/flights/{id}/cancel", post(cancel_flight))
        .route("/api/flights/{id}/plane", put(reassign_plane))
        .route("/api/flights/stats/count/{status}", get(count_by_status))
        .route("/api/flights/stats/cheapest", get(cheapest_flight))
        .route("/api/flights/stats/longest", get(longest_flights))
}

// ============================================================================
// CRUD Handlers
// ============================================================================

/// GET /api/flights
async fn list_flights(State(state): State<AppState>) -> Json<Vec<Flight>> {
    Json(state.flights.get_all_flights())
}

/// GET /api/flights/{id}
async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Flight>> {
    Ok(Json(state.flights.require_flight(id)?))
}

/// GET /api/flights/code/{code}
async fn get_flight_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<Flight>> {
    state
        .flights
        .get_flight_by_code(&code)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found: {}", code)))
}

/// POST /api/flights
async fn create_flight(
    State(state): State<AppState>,
    JsonBody(flight): JsonBody<Flight>,
) -> ApiResult<(StatusCode, Json<Flight>)> {
    let created = state.flights.create_flight(flight)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/flights/{id}
async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(mut flight): JsonBody<Flight>,
) -> ApiResult<Json<Flight>> {
    // The path decides which record is replaced
    flight.id = id;
    state
        .flights
        .update_flight(flight)
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(id).into())
}

/// DELETE /api/flights/{id}
async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    if state.flights.delete_flight(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound(id).into())
    }
}

// ============================================================================
// Query Handlers
// ============================================================================

/// GET /api/flights/search?origin=..&destination=..[&date=YYYY-MM-DD]
async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Json<Vec<Flight>> {
    let flights = match query.date {
        Some(date) => state
            .flights
            .find_flights_by_route_and_date(&query.origin, &query.destination, date),
        None => state
            .flights
            .find_flights_by_route(&query.origin, &query.destination),
    };
    Json(flights)
}

/// GET /api/flights/status/{status}
///
/// An empty result is reported as 404.
async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> ApiResult<Json<Vec<Flight>>> {
    let flights = state.flights.find_flights_by_status(&status);
    if flights.is_empty() {
        return Err(AppError::NotFoundError(format!("No flights with status {}", status)));
    }
    Ok(Json(flights))
}

/// GET /api/flights/date/{date}
async fn list_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Json<Vec<Flight>> {
    Json(state.flights.find_flights_by_date(date))
}

/// GET /api/flights/range?start=..&end=..
async fn list_by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> ApiResult<Json<Vec<Flight>>> {
    query.validate()?;
    Ok(Json(state.flights.find_flights_by_date_range(query.start, query.end)))
}

/// GET /api/flights/plane/{plane_id}
async fn list_by_plane(
    State(state): State<AppState>,
    Path(plane_id): Path<String>,
) -> Json<Vec<Flight>> {
    Json(state.flights.find_flights_by_plane(&plane_id))
}

/// GET /api/flights/pilot/{pilot_id}
async fn list_by_pilot(
    State(state): State<AppState>,
    Path(pilot_id): Path<String>,
) -> Json<Vec<Flight>> {
    Json(state.flights.find_flights_by_pilot(&pilot_id))
}

/// GET /api/flights/price?min=..&max=..
async fn list_by_price(
    State(state): State<AppState>,
    Query(query): Query<PriceRangeQuery>,
) -> ApiResult<Json<Vec<Flight>>> {
    query.validate()?;
    Ok(Json(state.flights.find_flights_by_price_range(query.min, query.max)))
}

/// GET /api/flights/upcoming?date=..&time=..[&hours=n]
async fn list_upcoming(
    State(state): State<AppState>,
    Query(params): Query<UpcomingQuery>,
) -> Json<Vec<Flight>> {
    let hours = params.hours.unwrap_or(state.inventory.upcoming_margin_hours);
    Json(state.flights.find_upcoming_flights(params.date, params.time, hours))
}

// ============================================================================
// Business Operation Handlers
// ============================================================================

/// GET /api/flights/{id}/availability?seats=n
async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<Json<AvailabilityResponse>> {
    state.flights.require_flight(id)?;
    Ok(Json(AvailabilityResponse {
        flight_id: id,
        requested_seats: query.seats,
        available: state.flights.check_availability(id, query.seats),
    }))
}

/// POST /api/flights/{id}/reservations
async fn reserve_seats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<ReservationRequest>,
) -> ApiResult<Json<Flight>> {
    match state.flights.reserve(id, req.seats) {
        SeatReservation::Reserved(flight) => Ok(Json(flight)),
        SeatReservation::Refused(flight) => Err(AppError::ConflictError(format!(
            "Insufficient seats on {}: requested {}, available {}",
            flight.flight_code, req.seats, flight.available_seats
        ))),
        SeatReservation::NotFound => Err(CoreError::NotFound(id).into()),
    }
}

/// PUT /api/flights/{id}/status
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<StatusUpdateRequest>,
) -> ApiResult<Json<Flight>> {
    if !state.flights.update_flight_status(id, req.status) {
        return Err(CoreError::NotFound(id).into());
    }
    Ok(Json(state.flights.require_flight(id)?))
}

/// POST /api/flights/{id}/cancel
async fn cancel_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Flight>> {
    if !state.flights.cancel_flight(id) {
        return Err(CoreError::NotFound(id).into());
    }
    Ok(Json(state.flights.require_flight(id)?))
}

/// PUT /api/flights/{id}/plane
async fn reassign_plane(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<PlaneReassignmentRequest>,
) -> ApiResult<Json<Flight>> {
    if !state.flights.reassign_plane(id, &req.plane_id) {
        return Err(CoreError::NotFound(id).into());
    }
    Ok(Json(state.flights.require_flight(id)?))
}

// ============================================================================
// Statistics Handlers
// ============================================================================

/// GET /api/flights/stats/count/{status}
async fn count_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Json<StatusCountResponse> {
    let count = state.flights.count_flights_by_status(&status);
    Json(StatusCountResponse { status, count })
}

/// GET /api/flights/stats/cheapest
async fn cheapest_flight(State(state): State<AppState>) -> ApiResult<Json<Flight>> {
    state
        .flights
        .get_cheapest_flight()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("No flights stored".to_string()))
}

/// GET /api/flights/stats/longest[?top=n]
async fn longest_flights(
    State(state): State<AppState>,
    Query(query): Query<LongestQuery>,
) -> Json<Vec<Flight>> {
    let top = query.top.unwrap_or(state.inventory.longest_flights_top);
    Json(state.flights.get_longest_flights(top))
}
