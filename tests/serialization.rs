//! External representation contract: flat snapshots, no nested objects,
//! no password leakage.

use holocron::{
    data::{CharacterRepository, PlanetRepository, UserRepository},
    model::{CharacterAttributes, CharacterDto, NewUser, PlanetAttributes, PlanetDto, UserDto},
};
use holocron_test_utils::prelude::*;

/// A stored then serialized user carries account fields but never the password
#[tokio::test]
async fn serialized_user_never_contains_password() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let user_repo = UserRepository::new(&test.db);
    let user = user_repo
        .create(NewUser {
            name: "Luke".to_string(),
            last_name: "Skywalker".to_string(),
            username: "lskywalker".to_string(),
            email: "luke@rebellion.org".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    let value = serde_json::to_value(UserDto::from(user))?;
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("password"));
    assert_eq!(object["username"], "lskywalker");
    assert!(object["is_active"].as_bool().unwrap());
    assert!(object.contains_key("subscription_date"));

    Ok(())
}

/// A character's serialized form carries homeworld_id flat, with no nested planet
#[tokio::test]
async fn serialized_character_references_homeworld_by_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let planet_repo = PlanetRepository::new(&test.db);
    let planet = planet_repo
        .create(PlanetAttributes::named("Tatooine"))
        .await
        .unwrap();

    let character_repo = CharacterRepository::new(&test.db);
    let mut attrs = CharacterAttributes::named("Luke Skywalker");
    attrs.homeworld_id = Some(planet.id);
    let character = character_repo.create(attrs).await.unwrap();

    let value = serde_json::to_value(CharacterDto::from(character))?;
    let object = value.as_object().unwrap();

    assert_eq!(object["homeworld_id"], planet.id);
    assert_eq!(object["name"], "Luke Skywalker");
    // Flat snapshot: every value is a scalar, no nested planet object
    assert!(object.values().all(|v| !v.is_object() && !v.is_array()));
    assert!(!object.contains_key("homeworld"));

    Ok(())
}

/// A planet's serialized form is a flat snapshot of its scalar columns
#[tokio::test]
async fn serialized_planet_is_flat() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let planet_repo = PlanetRepository::new(&test.db);
    let mut attrs = PlanetAttributes::named("Tatooine");
    attrs.uid = Some("1".to_string());
    attrs.climate = Some("arid".to_string());
    let planet = planet_repo.create(attrs).await.unwrap();

    let value = serde_json::to_value(PlanetDto::from(planet))?;
    let object = value.as_object().unwrap();

    assert_eq!(object["uid"], "1");
    assert_eq!(object["climate"], "arid");
    assert!(object.contains_key("created_at"));
    assert!(object.contains_key("updated_at"));
    assert!(object.values().all(|v| !v.is_object() && !v.is_array()));

    Ok(())
}
