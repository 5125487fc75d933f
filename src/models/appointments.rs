use std::str::FromStr;

use chrono::{DateTime, Utc};
use enum_display::EnumDisplay;
use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, EnumDisplay, Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Hash)]
#[enum_display(case = "Upper")]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Waiting on the assigned vet.
    Pending,
    Approved,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Approved,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ];
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("`{0}` is not a valid appointment status")]
pub struct InvalidStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = InvalidStatus;

    /// Case-insensitive: `approved` and `APPROVED` parse the same.
    /// Surrounding whitespace is not stripped, so ` pending ` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.to_string() == normalized)
            .ok_or_else(|| InvalidStatus(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub status: AppointmentStatus,
    pub pet_id: i64,
    pub vet_id: i64,
    pub owner_id: i64,
    /// Opaque ISO-8601 string, stored as given.
    pub date: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Record for Appointment {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Caller-supplied fields for a new appointment. Server-assigned fields
/// (`id`, `status`, timestamps) are not part of it and are dropped if sent.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentForm {
    pub pet_id: i64,
    pub vet_id: i64,
    pub owner_id: i64,
    pub date: String,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AppointmentForm {
    pub fn into_appointment(self, id: i64, now: DateTime<Utc>) -> Appointment {
        Appointment {
            id,
            status: AppointmentStatus::Pending,
            pet_id: self.pet_id,
            vet_id: self.vet_id,
            owner_id: self.owner_id,
            date: self.date,
            reason: self.reason,
            notes: self.notes,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// Partial update: only the fields present in the payload are applied.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    pub status: Option<AppointmentStatus>,
    pub pet_id: Option<i64>,
    pub vet_id: Option<i64>,
    pub owner_id: Option<i64>,
    pub date: Option<String>,
    pub reason: Option<String>,
    /// Absent keeps the notes, `null` clears them.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub notes: Option<Option<String>>,
}

impl AppointmentUpdate {
    /// Merge over `appointment`. `id` and `created_at` are never touched.
    pub fn apply(&self, appointment: &mut Appointment, now: DateTime<Utc>) {
        if let Some(status) = self.status {
            appointment.status = status;
        }
        if let Some(pet_id) = self.pet_id {
            appointment.pet_id = pet_id;
        }
        if let Some(vet_id) = self.vet_id {
            appointment.vet_id = vet_id;
        }
        if let Some(owner_id) = self.owner_id {
            appointment.owner_id = owner_id;
        }
        if let Some(date) = &self.date {
            appointment.date = date.clone();
        }
        if let Some(reason) = &self.reason {
            appointment.reason = reason.clone();
        }
        if let Some(notes) = &self.notes {
            appointment.notes = notes.clone();
        }
        appointment.updated_at = now.max(appointment.created_at);
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}
