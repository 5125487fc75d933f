use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::handlers::{
    create_appointment, get_appointment, list_appointments, update_appointment,
    update_appointment_status, AppointmentError,
};
use crate::models::appointments::{StatusBody, StatusQuery};
use crate::models::{AppointmentForm, AppointmentUpdate};
use crate::repositories::AppointmentRepository;

/// Header carrying the numeric id of the vet making a status change.
pub const AUTH_ID_HEADER: &str = "authid";

impl ResponseError for AppointmentError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppointmentError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            AppointmentError::NoneWithStatus(_) | AppointmentError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppointmentError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            AppointmentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppointmentError::InvalidStatus(_) => response.body("Invalid status"),
            AppointmentError::NoneWithStatus(_) => response.body(self.to_string()),
            AppointmentError::NotFound(_) => response.finish(),
            AppointmentError::Unauthorized { .. } => response.body("Unauthorized"),
            AppointmentError::Store(_) => response.body("Internal Server Error"),
        }
    }
}

/// A missing or non-numeric header yields `None`, which matches no vet.
/// Padding around the number is tolerated, unlike status values.
fn actor_id(request: &HttpRequest) -> Option<i64> {
    request
        .headers()
        .get(AUTH_ID_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[tracing::instrument(
    name = "Listing appointments",
    skip(query, repository),
    fields(status = ?query.status)
)]
pub async fn get_appointments(
    query: web::Query<StatusQuery>,
    repository: web::Data<AppointmentRepository>,
) -> Result<HttpResponse, AppointmentError> {
    let appointments = list_appointments(&repository, query.status.as_deref())?;
    Ok(HttpResponse::Ok().json(appointments))
}

#[tracing::instrument(name = "Fetching an appointment", skip(repository))]
pub async fn get_appointment_by_id(
    path: web::Path<i64>,
    repository: web::Data<AppointmentRepository>,
) -> Result<HttpResponse, AppointmentError> {
    let appointment = get_appointment(&repository, path.into_inner())?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[tracing::instrument(
    name = "Booking a new appointment",
    skip(form, repository),
    fields(
        vet_id = %form.vet_id,
        pet_id = %form.pet_id,
    )
)]
pub async fn post_appointment(
    form: web::Json<AppointmentForm>,
    repository: web::Data<AppointmentRepository>,
) -> Result<HttpResponse, AppointmentError> {
    let appointment = create_appointment(&repository, form.into_inner())?;
    Ok(HttpResponse::Created().json(appointment))
}

#[tracing::instrument(name = "Updating an appointment", skip(changes, repository))]
pub async fn put_appointment(
    path: web::Path<i64>,
    changes: web::Json<AppointmentUpdate>,
    repository: web::Data<AppointmentRepository>,
) -> Result<HttpResponse, AppointmentError> {
    let appointment = update_appointment(&repository, path.into_inner(), changes.into_inner())?;
    Ok(HttpResponse::Ok().json(appointment))
}

#[tracing::instrument(
    name = "Changing appointment status",
    skip(body, repository, request),
    fields(status = %body.status, actor_id = tracing::field::Empty)
)]
pub async fn patch_appointment_status(
    path: web::Path<i64>,
    body: web::Json<StatusBody>,
    repository: web::Data<AppointmentRepository>,
    request: HttpRequest,
) -> Result<HttpResponse, AppointmentError> {
    let actor = actor_id(&request);
    match actor {
        Some(id) => {
            tracing::Span::current().record("actor_id", id);
        }
        None => tracing::warn!("Status change without a valid {} header", AUTH_ID_HEADER),
    }

    let appointment =
        update_appointment_status(&repository, path.into_inner(), &body.status, actor)?;
    Ok(HttpResponse::Ok().json(appointment))
}
