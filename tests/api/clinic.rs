use rstest::rstest;
use serde_json::{json, Value};
use vet_clinic::models::{Pet, Veterinarian};

use crate::utils::spawn_app;

#[rstest]
#[case("/pets", 5)]
#[case("/owners", 4)]
#[case("/vets", 2)]
#[tokio::test]
async fn directory_listings_return_fixtures(#[case] path: &str, #[case] expected: usize) {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(&format!("{}{}", &app.address, path))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let records: Vec<Value> = response.json().await.expect("Failed to parse response.");
    assert_eq!(records.len(), expected);
}

#[tokio::test]
async fn getting_a_vet_by_id() {
    let app = spawn_app().await;

    let found = app
        .api_client
        .get(&format!("{}/vets/50002", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, found.status().as_u16());
    let vet: Veterinarian = found.json().await.unwrap();
    assert_eq!(vet.last_name, "Leary");

    let missing = app
        .api_client
        .get(&format!("{}/vets/1", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, missing.status().as_u16());
}

#[tokio::test]
async fn adding_a_vet_returns_201_and_lists_it() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/vets", &app.address))
        .json(&json!({ "firstName": "John", "lastName": "Doe", "specialty": "Surgery" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let vet: Veterinarian = response.json().await.unwrap();
    assert_eq!(vet.id, 50003);
    assert_eq!(vet.first_name, "John");

    let vets: Vec<Veterinarian> = app
        .api_client
        .get(&format!("{}/vets", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(vets.len(), 3);
}

#[rstest]
#[case(json!({ "firstName": "Jane" }))]
#[case(json!({}))]
#[tokio::test]
async fn adding_a_vet_with_missing_fields_returns_400(#[case] body: Value) {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/vets", &app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

fn biscuit() -> Value {
    json!({
        "name": "Biscuit",
        "age": 4,
        "type": "Dog",
        "breed": "Beagle",
        "weight": 22.5,
        "ownerId": 20001
    })
}

#[tokio::test]
async fn adding_a_pet_returns_201_with_a_fresh_id() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/pets", &app.address))
        .json(&biscuit())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let pet: Pet = response.json().await.unwrap();
    assert_eq!(pet.id, 10006);
    assert_eq!(pet.kind, "Dog");
    assert_eq!(pet.owner_id, 20001);
}

#[tokio::test]
async fn updating_a_pet_replaces_its_fields_and_keeps_the_id() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .put(&format!("{}/pets?petId=10002", &app.address))
        .json(&biscuit())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let pet: Pet = response.json().await.unwrap();
    assert_eq!(pet.id, 10002);
    assert_eq!(pet.name, "Biscuit");

    let pets: Vec<Pet> = app
        .api_client
        .get(&format!("{}/pets", &app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pets.len(), 5);
    assert!(pets.iter().any(|p| p.id == 10002 && p.breed == "Beagle"));
}

#[tokio::test]
async fn updating_an_unknown_pet_returns_404() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .put(&format!("{}/pets?petId=99999", &app.address))
        .json(&biscuit())
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn adding_a_pet_with_missing_fields_returns_400() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(&format!("{}/pets", &app.address))
        .json(&json!({ "name": "Nameless" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}
