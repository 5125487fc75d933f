use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use crate::config::{Settings, StoreSettings};
use crate::fixtures;
use crate::repositories::{AppointmentRepository, ClinicDirectory};
use crate::routes::{
    get_appointment_by_id, get_appointments, get_owners, get_pets, get_vet_by_id, get_vets,
    health_check, patch_appointment_status, post_appointment, post_pet, post_vet, put_appointment,
    put_pet,
};
use crate::store::InMemoryStore;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let (appointments, directory) = build_stores(&config.store);
        Self::build_with(config, appointments, directory)
    }

    /// Like [`Application::build`], but serving the given repositories.
    pub fn build_with(
        config: Settings,
        appointments: AppointmentRepository,
        directory: ClinicDirectory,
    ) -> Result<Self, anyhow::Error> {
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, appointments, directory)?;

        tracing::info!(port, "Clinic API listening");
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// In-memory stores, seeded with the clinic fixtures when configured to.
pub fn build_stores(config: &StoreSettings) -> (AppointmentRepository, ClinicDirectory) {
    let first_id = config.first_appointment_id;
    if !config.seed_fixtures {
        return (
            AppointmentRepository::new(Arc::new(InMemoryStore::new(first_id))),
            ClinicDirectory::new(
                Arc::new(InMemoryStore::new(1)),
                Arc::new(InMemoryStore::new(1)),
                Arc::new(InMemoryStore::new(1)),
            ),
        );
    }

    let appointments = InMemoryStore::seeded(fixtures::appointments(), first_id);
    (
        AppointmentRepository::new(Arc::new(appointments)),
        ClinicDirectory::new(
            Arc::new(InMemoryStore::seeded(fixtures::pets(), 1)),
            Arc::new(InMemoryStore::seeded(fixtures::owners(), 1)),
            Arc::new(InMemoryStore::seeded(fixtures::veterinarians(), 1)),
        ),
    )
}

pub fn run(
    listener: TcpListener,
    appointments: AppointmentRepository,
    directory: ClinicDirectory,
) -> Result<Server, anyhow::Error> {
    let appointments = web::Data::new(appointments);
    let directory = web::Data::new(directory);
    let server: Server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(
                web::scope("/appointments")
                    .route("", web::get().to(get_appointments))
                    .route("", web::post().to(post_appointment))
                    .route("/{id}", web::get().to(get_appointment_by_id))
                    .route("/{id}", web::put().to(put_appointment))
                    .route("/{id}/status", web::patch().to(patch_appointment_status)),
            )
            .service(
                web::scope("/vets")
                    .route("", web::get().to(get_vets))
                    .route("", web::post().to(post_vet))
                    .route("/{id}", web::get().to(get_vet_by_id)),
            )
            .service(
                web::resource("/pets")
                    .route(web::get().to(get_pets))
                    .route(web::post().to(post_pet))
                    .route(web::put().to(put_pet)),
            )
            .route("/owners", web::get().to(get_owners))
            .route("/health_check", web::get().to(health_check))
            .app_data(appointments.clone())
            .app_data(directory.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
