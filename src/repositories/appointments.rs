use std::sync::Arc;

use chrono::Utc;

use crate::models::{Appointment, AppointmentForm, AppointmentStatus, AppointmentUpdate};
use crate::store::{RecordStore, StoreError};

/// Appointment persistence on top of a [`RecordStore`]. Owns timestamping;
/// ids come from the store.
#[derive(Clone)]
pub struct AppointmentRepository {
    store: Arc<dyn RecordStore<Appointment>>,
}

impl AppointmentRepository {
    pub fn new(store: Arc<dyn RecordStore<Appointment>>) -> Self {
        Self { store }
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Appointment>, StoreError> {
        self.store.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Appointment>, StoreError> {
        self.store.all()
    }

    pub fn get_all_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, StoreError> {
        self.store.filter(&|appointment| appointment.status == status)
    }

    /// New appointments always start out `PENDING`.
    pub fn create(&self, form: AppointmentForm) -> Result<Appointment, StoreError> {
        let id = self.store.next_id()?;
        let appointment = form.into_appointment(id, Utc::now());
        self.store.put(appointment.clone())?;
        Ok(appointment)
    }

    pub fn update(
        &self,
        id: i64,
        changes: AppointmentUpdate,
    ) -> Result<Option<Appointment>, StoreError> {
        let now = Utc::now();
        self.store
            .modify(id, &mut |appointment| changes.apply(appointment, now))
    }

    pub fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, StoreError> {
        let changes = AppointmentUpdate {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, changes)
    }
}
