//! Cascade and restrict semantics across the join and reference tables.
//!
//! Join rows (favorites, film appearances) disappear with either
//! endpoint; the homeworld/species references never cascade.

use holocron::data::{
    CharacterRepository, FilmRepository, PlanetRepository, SpeciesRepository, UserRepository,
};
use holocron_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Deleting a user removes its favorite character and planet links
#[tokio::test]
async fn deleting_user_removes_favorite_links() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = test
        .user()
        .insert_user("lskywalker", "luke@rebellion.org")
        .await?;
    let character = test.catalog().insert_character("Han Solo", None, None).await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    test.user()
        .insert_favorite_character(user.id, character.id)
        .await?;
    test.user().insert_favorite_planet(user.id, planet.id).await?;

    let user_repo = UserRepository::new(&test.db);
    let result = user_repo.delete(user.id).await;
    assert!(result.is_ok(), "Error: {:?}", result.err());

    let favorite_characters = entity::prelude::FavoriteCharacter::find().all(&test.db).await?;
    let favorite_planets = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
    assert!(favorite_characters.is_empty());
    assert!(favorite_planets.is_empty());

    // The favorited rows themselves are untouched
    let character_exists = entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?;
    assert!(character_exists.is_some());

    Ok(())
}

/// Deleting a character removes its favorite and film-appearance links
#[tokio::test]
async fn deleting_character_removes_favorite_and_appearance_links() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = test
        .user()
        .insert_user("lskywalker", "luke@rebellion.org")
        .await?;
    let film = test.catalog().insert_film("A New Hope").await?;
    let character = test.catalog().insert_character("Han Solo", None, None).await?;
    test.user()
        .insert_favorite_character(user.id, character.id)
        .await?;
    test.catalog()
        .insert_film_character(film.id, character.id)
        .await?;

    let character_repo = CharacterRepository::new(&test.db);
    let result = character_repo.delete(character.id).await;
    assert!(result.is_ok(), "Error: {:?}", result.err());

    let favorites = entity::prelude::FavoriteCharacter::find().all(&test.db).await?;
    let appearances = entity::prelude::FilmCharacter::find().all(&test.db).await?;
    assert!(favorites.is_empty());
    assert!(appearances.is_empty());

    // The user and film survive
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(&test.db)
        .await?
        .is_some());
    assert!(entity::prelude::Film::find_by_id(film.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Deleting a film removes its film-appearance links
#[tokio::test]
async fn deleting_film_removes_appearance_links() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let film = test.catalog().insert_film("A New Hope").await?;
    let luke = test
        .catalog()
        .insert_character("Luke Skywalker", None, None)
        .await?;
    let han = test.catalog().insert_character("Han Solo", None, None).await?;
    test.catalog().insert_film_character(film.id, luke.id).await?;
    test.catalog().insert_film_character(film.id, han.id).await?;

    let film_repo = FilmRepository::new(&test.db);
    let result = film_repo.delete(film.id).await;
    assert!(result.is_ok(), "Error: {:?}", result.err());

    let appearances = entity::prelude::FilmCharacter::find().all(&test.db).await?;
    assert!(appearances.is_empty());

    // The characters survive
    let characters = entity::prelude::Character::find().all(&test.db).await?;
    assert_eq!(characters.len(), 2);

    Ok(())
}

/// Deleting a planet with a dependent character is rejected, not cascaded
#[tokio::test]
async fn deleting_planet_with_dependent_character_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    let character = test
        .catalog()
        .insert_character("Luke Skywalker", Some(planet.id), None)
        .await?;

    let planet_repo = PlanetRepository::new(&test.db);
    let result = planet_repo.delete(planet.id).await;

    assert!(result.is_err_and(|e| e.is_constraint_violation()));
    // Both rows survive
    assert!(entity::prelude::Planet::find_by_id(planet.id)
        .one(&test.db)
        .await?
        .is_some());
    assert!(entity::prelude::Character::find_by_id(character.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Deleting a planet with a dependent species is rejected, not cascaded
#[tokio::test]
async fn deleting_planet_with_dependent_species_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let planet = test.catalog().insert_planet("Kashyyyk").await?;
    test.catalog()
        .insert_species("Wookiee", Some(planet.id))
        .await?;

    let planet_repo = PlanetRepository::new(&test.db);
    let result = planet_repo.delete(planet.id).await;

    assert!(result.is_err_and(|e| e.is_constraint_violation()));

    Ok(())
}

/// Deleting a planet with only favorite links succeeds and removes them
#[tokio::test]
async fn deleting_planet_removes_favorite_links() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = test
        .user()
        .insert_user("lskywalker", "luke@rebellion.org")
        .await?;
    let planet = test.catalog().insert_planet("Alderaan").await?;
    test.user().insert_favorite_planet(user.id, planet.id).await?;

    let planet_repo = PlanetRepository::new(&test.db);
    let result = planet_repo.delete(planet.id).await;
    assert!(result.is_ok(), "Error: {:?}", result.err());

    let favorites = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
    assert!(favorites.is_empty());

    Ok(())
}

/// Deleting a species with no dependents succeeds after its characters are gone
#[tokio::test]
async fn deleting_species_after_dependents_removed_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let species = test.catalog().insert_species("Human", None).await?;
    let character = test
        .catalog()
        .insert_character("Luke Skywalker", None, Some(species.id))
        .await?;

    let species_repo = SpeciesRepository::new(&test.db);
    assert!(species_repo
        .delete(species.id)
        .await
        .is_err_and(|e| e.is_constraint_violation()));

    let character_repo = CharacterRepository::new(&test.db);
    character_repo.delete(character.id).await.unwrap();

    let result = species_repo.delete(species.id).await;
    assert!(result.is_ok(), "Error: {:?}", result.err());
    assert_eq!(result.unwrap().rows_affected, 1);

    Ok(())
}
