//! Appointment request handling, independent of the HTTP layer.
//!
//! Each function takes already-extracted request data and returns either the
//! record(s) to send back or an [`AppointmentError`] describing the failure.

use crate::models::{
    Appointment, AppointmentForm, AppointmentStatus, AppointmentUpdate, InvalidStatus,
};
use crate::repositories::AppointmentRepository;
use crate::store::StoreError;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum AppointmentError {
    #[error("Invalid status")]
    InvalidStatus(#[source] InvalidStatus),
    #[error("No appointments found with status: {0}")]
    NoneWithStatus(AppointmentStatus),
    #[error("Appointment {0} not found")]
    NotFound(i64),
    /// The status change was already written when this is returned.
    #[error("Actor is not the vet assigned to appointment {appointment_id}")]
    Unauthorized { appointment_id: i64 },
    #[error("Appointment store failure")]
    Store(#[from] StoreError),
}

impl std::fmt::Debug for AppointmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn parse_status(status: &str) -> Result<AppointmentStatus, AppointmentError> {
    status
        .parse::<AppointmentStatus>()
        .map_err(AppointmentError::InvalidStatus)
}

fn log_store_failure(e: StoreError) -> AppointmentError {
    tracing::error!(error.cause_chain = ?e, "Appointment store call failed");
    AppointmentError::Store(e)
}

/// List appointments, optionally filtered by status.
///
/// An unfiltered listing always succeeds, even when empty. A filtered listing
/// with no matches is reported as [`AppointmentError::NoneWithStatus`].
pub fn list_appointments(
    repository: &AppointmentRepository,
    status: Option<&str>,
) -> Result<Vec<Appointment>, AppointmentError> {
    let status = match status.filter(|s| !s.is_empty()) {
        Some(raw) => parse_status(raw)?,
        None => return repository.get_all().map_err(log_store_failure),
    };

    let appointments = repository
        .get_all_by_status(status)
        .map_err(log_store_failure)?;
    if appointments.is_empty() {
        return Err(AppointmentError::NoneWithStatus(status));
    }
    Ok(appointments)
}

pub fn get_appointment(
    repository: &AppointmentRepository,
    id: i64,
) -> Result<Appointment, AppointmentError> {
    repository
        .get_by_id(id)
        .map_err(log_store_failure)?
        .ok_or(AppointmentError::NotFound(id))
}

pub fn create_appointment(
    repository: &AppointmentRepository,
    form: AppointmentForm,
) -> Result<Appointment, AppointmentError> {
    repository.create(form).map_err(log_store_failure)
}

pub fn update_appointment(
    repository: &AppointmentRepository,
    id: i64,
    changes: AppointmentUpdate,
) -> Result<Appointment, AppointmentError> {
    repository
        .update(id, changes)
        .map_err(log_store_failure)?
        .ok_or(AppointmentError::NotFound(id))
}

/// Move an appointment to `status` on behalf of vet `actor_id`.
///
/// The status is validated before the store is touched. The vet check runs
/// after the write, so a mismatched or missing `actor_id` yields
/// [`AppointmentError::Unauthorized`] while the new status stays persisted.
pub fn update_appointment_status(
    repository: &AppointmentRepository,
    id: i64,
    status: &str,
    actor_id: Option<i64>,
) -> Result<Appointment, AppointmentError> {
    let status = parse_status(status)?;

    let appointment = repository
        .update_status(id, status)
        .map_err(log_store_failure)?
        .ok_or(AppointmentError::NotFound(id))?;

    if actor_id != Some(appointment.vet_id) {
        tracing::warn!(
            appointment_id = id,
            vet_id = appointment.vet_id,
            actor_id = ?actor_id,
            "Status change requested by a vet not assigned to the appointment"
        );
        return Err(AppointmentError::Unauthorized { appointment_id: id });
    }
    Ok(appointment)
}
