//! Data access layer repositories.
//!
//! One repository per table, each a thin wrapper over a borrowed
//! connection. Repositories perform plain create/read/update/delete and
//! let the storage engine enforce uniqueness, foreign-key validity, and
//! the cascade rules; failures are classified into
//! [`DataError`](crate::error::data::DataError) and surfaced unchanged.
//!
//! The connection parameter is generic over [`sea_orm::ConnectionTrait`]
//! so callers can pass a plain connection or an open transaction.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod film;
pub mod film_character;
pub mod planet;
pub mod species;
pub mod user;

pub use character::CharacterRepository;
pub use favorite_character::FavoriteCharacterRepository;
pub use favorite_planet::FavoritePlanetRepository;
pub use film::FilmRepository;
pub use film_character::FilmCharacterRepository;
pub use planet::PlanetRepository;
pub use species::SpeciesRepository;
pub use user::UserRepository;
