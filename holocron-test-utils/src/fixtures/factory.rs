//! Factory functions for in-memory catalog models.
//!
//! These build model instances with standard test values without touching
//! the database, for unit tests of serialization and conversion code.

use chrono::Utc;

pub fn mock_user_model(username: &str, email: &str) -> entity::user::Model {
    let now = Utc::now().naive_utc();
    entity::user::Model {
        id: 1,
        name: "Luke".to_string(),
        last_name: "Skywalker".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: "hunter2".to_string(),
        is_active: true,
        subscription_date: now,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_planet_model(name: &str) -> entity::planet::Model {
    let now = Utc::now().naive_utc();
    entity::planet::Model {
        id: 1,
        uid: Some("1".to_string()),
        name: name.to_string(),
        rotation_period: Some("23".to_string()),
        orbital_period: Some("304".to_string()),
        diameter: Some("10465".to_string()),
        gravity: Some("1 standard".to_string()),
        population: Some("200000".to_string()),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        surface_water: Some("1".to_string()),
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_species_model(name: &str, homeworld_id: Option<i32>) -> entity::species::Model {
    let now = Utc::now().naive_utc();
    entity::species::Model {
        id: 1,
        uid: Some("1".to_string()),
        name: name.to_string(),
        classification: Some("mammal".to_string()),
        designation: Some("sentient".to_string()),
        average_height: Some("180".to_string()),
        skin_colors: Some("caucasian, black, asian, hispanic".to_string()),
        hair_colors: Some("blonde, brown, black, red".to_string()),
        eye_colors: Some("brown, blue, green, hazel".to_string()),
        average_lifespan: Some("120".to_string()),
        language: Some("Galactic Basic".to_string()),
        homeworld_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_character_model(
    name: &str,
    homeworld_id: Option<i32>,
    species_id: Option<i32>,
) -> entity::character::Model {
    let now = Utc::now().naive_utc();
    entity::character::Model {
        id: 1,
        uid: Some("1".to_string()),
        name: name.to_string(),
        height: Some("172".to_string()),
        mass: Some("77".to_string()),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: Some("male".to_string()),
        homeworld_id,
        species_id,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_film_model(title: &str) -> entity::film::Model {
    let now = Utc::now().naive_utc();
    entity::film::Model {
        id: 1,
        uid: Some("1".to_string()),
        title: title.to_string(),
        episode_id: Some(4),
        opening_crawl: Some("It is a period of civil war.".to_string()),
        director: Some("George Lucas".to_string()),
        producer: Some("Gary Kurtz, Rick McCallum".to_string()),
        release_date: chrono::NaiveDate::from_ymd_opt(1977, 5, 25),
        created_at: now,
        updated_at: now,
    }
}
