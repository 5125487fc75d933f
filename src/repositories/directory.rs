use std::sync::Arc;

use crate::models::{Owner, Pet, PetForm, Veterinarian, VeterinarianForm};
use crate::store::{RecordStore, StoreError};

/// Pets, owners and vets. Plain key-value access with no lifecycle.
#[derive(Clone)]
pub struct ClinicDirectory {
    pets: Arc<dyn RecordStore<Pet>>,
    owners: Arc<dyn RecordStore<Owner>>,
    vets: Arc<dyn RecordStore<Veterinarian>>,
}

impl ClinicDirectory {
    pub fn new(
        pets: Arc<dyn RecordStore<Pet>>,
        owners: Arc<dyn RecordStore<Owner>>,
        vets: Arc<dyn RecordStore<Veterinarian>>,
    ) -> Self {
        Self { pets, owners, vets }
    }

    pub fn pets(&self) -> Result<Vec<Pet>, StoreError> {
        self.pets.all()
    }

    pub fn add_pet(&self, form: PetForm) -> Result<Pet, StoreError> {
        let pet = form.into_pet(self.pets.next_id()?);
        self.pets.put(pet.clone())?;
        Ok(pet)
    }

    /// Overwrite every form field of pet `id`. `None` if no such pet.
    pub fn update_pet(&self, id: i64, form: PetForm) -> Result<Option<Pet>, StoreError> {
        self.pets
            .modify(id, &mut |pet| *pet = form.clone().into_pet(id))
    }

    pub fn owners(&self) -> Result<Vec<Owner>, StoreError> {
        self.owners.all()
    }

    pub fn vets(&self) -> Result<Vec<Veterinarian>, StoreError> {
        self.vets.all()
    }

    pub fn vet_by_id(&self, id: i64) -> Result<Option<Veterinarian>, StoreError> {
        self.vets.get(id)
    }

    pub fn add_vet(&self, form: VeterinarianForm) -> Result<Veterinarian, StoreError> {
        let vet = form.into_veterinarian(self.vets.next_id()?);
        self.vets.put(vet.clone())?;
        Ok(vet)
    }
}
