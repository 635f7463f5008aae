use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Flat representation of a film.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilmDto {
    pub id: i32,
    pub uid: Option<String>,
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::film::Model> for FilmDto {
    fn from(film: entity::film::Model) -> Self {
        Self {
            id: film.id,
            uid: film.uid,
            title: film.title,
            episode_id: film.episode_id,
            opening_crawl: film.opening_crawl,
            director: film.director,
            producer: film.producer,
            release_date: film.release_date,
            created_at: film.created_at,
            updated_at: film.updated_at,
        }
    }
}

/// Attributes accepted when creating or updating a film.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FilmAttributes {
    pub uid: Option<String>,
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl FilmAttributes {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }
}
