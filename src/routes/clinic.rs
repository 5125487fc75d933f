use actix_web::{web, HttpResponse, ResponseError};

use crate::models::{PetForm, PetIdQuery, VeterinarianForm};
use crate::repositories::ClinicDirectory;
use crate::store::StoreError;

impl ResponseError for StoreError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!(error.cause_chain = ?self, "Clinic directory store call failed");
        HttpResponse::InternalServerError().body("Internal Server Error")
    }
}

#[tracing::instrument(name = "Listing pets", skip(directory))]
pub async fn get_pets(directory: web::Data<ClinicDirectory>) -> Result<HttpResponse, StoreError> {
    Ok(HttpResponse::Ok().json(directory.pets()?))
}

#[tracing::instrument(name = "Adding a new pet", skip(form, directory), fields(name = %form.name))]
pub async fn post_pet(
    form: web::Json<PetForm>,
    directory: web::Data<ClinicDirectory>,
) -> Result<HttpResponse, StoreError> {
    let pet = directory.add_pet(form.into_inner())?;
    Ok(HttpResponse::Created().json(pet))
}

#[tracing::instrument(
    name = "Updating a pet",
    skip(query, form, directory),
    fields(pet_id = query.pet_id)
)]
pub async fn put_pet(
    query: web::Query<PetIdQuery>,
    form: web::Json<PetForm>,
    directory: web::Data<ClinicDirectory>,
) -> Result<HttpResponse, StoreError> {
    match directory.update_pet(query.pet_id, form.into_inner())? {
        Some(pet) => Ok(HttpResponse::Ok().json(pet)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[tracing::instrument(name = "Listing owners", skip(directory))]
pub async fn get_owners(
    directory: web::Data<ClinicDirectory>,
) -> Result<HttpResponse, StoreError> {
    Ok(HttpResponse::Ok().json(directory.owners()?))
}

#[tracing::instrument(name = "Listing vets", skip(directory))]
pub async fn get_vets(directory: web::Data<ClinicDirectory>) -> Result<HttpResponse, StoreError> {
    Ok(HttpResponse::Ok().json(directory.vets()?))
}

#[tracing::instrument(name = "Fetching a vet", skip(directory))]
pub async fn get_vet_by_id(
    path: web::Path<i64>,
    directory: web::Data<ClinicDirectory>,
) -> Result<HttpResponse, StoreError> {
    match directory.vet_by_id(path.into_inner())? {
        Some(vet) => Ok(HttpResponse::Ok().json(vet)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[tracing::instrument(
    name = "Adding a new vet",
    skip(form, directory),
    fields(specialty = %form.specialty)
)]
pub async fn post_vet(
    form: web::Json<VeterinarianForm>,
    directory: web::Data<ClinicDirectory>,
) -> Result<HttpResponse, StoreError> {
    let vet = directory.add_vet(form.into_inner())?;
    Ok(HttpResponse::Created().json(vet))
}
