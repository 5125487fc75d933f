//! Seed records loaded at startup when `store.seed_fixtures` is on.

use chrono::{DateTime, Utc};

use crate::models::{Appointment, AppointmentStatus, Owner, Pet, Veterinarian};

fn at(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}

fn appointment(
    id: i64,
    status: AppointmentStatus,
    (pet_id, owner_id, vet_id): (i64, i64, i64),
    date: &str,
    reason: &str,
    notes: Option<&str>,
    created: i64,
) -> Appointment {
    Appointment {
        id,
        status,
        pet_id,
        vet_id,
        owner_id,
        date: date.to_string(),
        reason: reason.to_string(),
        notes: notes.map(str::to_string),
        created_at: at(created),
        updated_at: at(created),
        deleted_at: None,
    }
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    vec![
        appointment(
            40001,
            Pending,
            (10001, 20001, 50002),
            "2024-03-04T09:00:00.000Z",
            "Annual checkup",
            None,
            1_706_774_400,
        ),
        appointment(
            40002,
            Approved,
            (10002, 20002, 50001),
            "2024-03-05T14:30:00.000Z",
            "Vaccination",
            Some("Due for rabies booster"),
            1_706_860_800,
        ),
        appointment(
            40003,
            Completed,
            (10003, 20003, 50002),
            "2024-02-12T11:00:00.000Z",
            "Dental cleaning",
            None,
            1_706_947_200,
        ),
        appointment(
            40004,
            Cancelled,
            (10004, 20004, 50002),
            "2024-02-20T16:00:00.000Z",
            "Limping on front left leg",
            Some("Owner rescheduled"),
            1_707_033_600,
        ),
        appointment(
            40005,
            Approved,
            (10005, 20002, 50001),
            "2024-03-11T10:15:00.000Z",
            "Spay consultation",
            None,
            1_707_120_000,
        ),
    ]
}

pub fn pets() -> Vec<Pet> {
    let pet = |id, name: &str, age, kind: &str, breed: &str, weight, owner_id| Pet {
        id,
        name: name.to_string(),
        age,
        kind: kind.to_string(),
        breed: breed.to_string(),
        weight,
        owner_id,
    };
    vec![
        pet(10001, "Max", 5, "Dog", "Golden Retriever", 65.0, 20001),
        pet(10002, "Bella", 3, "Cat", "Siamese", 8.0, 20002),
        pet(10003, "Charlie", 2, "Dog", "Poodle", 10.0, 20003),
        pet(10004, "Lucy", 7, "Dog", "Bulldog", 55.0, 20004),
        pet(10005, "Luna", 1, "Cat", "Persian", 6.0, 20002),
    ]
}

pub fn owners() -> Vec<Owner> {
    let owner = |id, name: &str, address: &str, phone: &str| Owner {
        id,
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
    };
    vec![
        owner(20001, "John Doe", "123 Main St", "555-1234"),
        owner(20002, "Jane Smith", "456 Elm St", "555-5678"),
        owner(20003, "Alice Johnson", "789 Maple St", "555-9012"),
        owner(20004, "Bob Brown", "321 Oak St", "555-3456"),
    ]
}

pub fn veterinarians() -> Vec<Veterinarian> {
    let vet = |id, first_name: &str, last_name: &str, specialty: &str| Veterinarian {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        specialty: specialty.to_string(),
    };
    vec![
        vet(50001, "James", "Carter", "felines"),
        vet(50002, "Helen", "Leary", "canines"),
    ]
}
