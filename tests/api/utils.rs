use std::sync::Arc;

use once_cell::sync::Lazy;
use vet_clinic::config::get_configuration;
use vet_clinic::models::Appointment;
use vet_clinic::repositories::AppointmentRepository;
use vet_clinic::startup::{build_stores, Application};
use vet_clinic::store::{RecordStore, StoreError};
use vet_clinic::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_appointments(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/appointments{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_appointment(&self, id: i64) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/appointments/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_appointment(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/appointments", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_appointment(&self, id: i64, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .put(&format!("{}/appointments/{}", &self.address, id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn patch_status(
        &self,
        id: i64,
        status: &str,
        actor_id: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .patch(&format!("{}/appointments/{}/status", &self.address, id))
            .json(&serde_json::json!({ "status": status }));
        if let Some(actor_id) = actor_id {
            request = request.header("authid", actor_id);
        }
        request.send().await.expect("Failed to execute request.")
    }
}

/// Start the app on a random port, seeded with the clinic fixtures.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let (appointments, directory) = build_stores(&configuration.store);
    launch(appointments, directory).await
}

/// Start the app with an appointment store that fails every call.
pub async fn spawn_app_with_failing_store() -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let (_, directory) = build_stores(&configuration.store);
    launch(AppointmentRepository::new(Arc::new(FailingStore)), directory).await
}

async fn launch(
    appointments: AppointmentRepository,
    directory: vet_clinic::repositories::ClinicDirectory,
) -> TestApp {
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c
    };

    let application = Application::build_with(configuration, appointments, directory)
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}

struct FailingStore;

fn db_failure<T>() -> Result<T, StoreError> {
    Err(StoreError::Unexpected(anyhow::anyhow!("DB Failure")))
}

impl RecordStore<Appointment> for FailingStore {
    fn get(&self, _id: i64) -> Result<Option<Appointment>, StoreError> {
        db_failure()
    }
    fn all(&self) -> Result<Vec<Appointment>, StoreError> {
        db_failure()
    }
    fn filter(
        &self,
        _predicate: &dyn Fn(&Appointment) -> bool,
    ) -> Result<Vec<Appointment>, StoreError> {
        db_failure()
    }
    fn next_id(&self) -> Result<i64, StoreError> {
        db_failure()
    }
    fn put(&self, _record: Appointment) -> Result<(), StoreError> {
        db_failure()
    }
    fn modify(
        &self,
        _id: i64,
        _change: &mut dyn FnMut(&mut Appointment),
    ) -> Result<Option<Appointment>, StoreError> {
        db_failure()
    }
}
