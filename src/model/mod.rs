//! Externally-facing representations of catalog entities.
//!
//! Each DTO is a flat snapshot of an entity's scalar columns; relationship
//! collections are never embedded, and [`UserDto`] never carries the
//! password. The `New*`/`*Attributes` structs are the inputs repositories
//! accept for create and update.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod species;
pub mod user;

pub use character::{CharacterAttributes, CharacterDto};
pub use favorite::{FavoriteCharacterDto, FavoritePlanetDto, FilmCharacterDto};
pub use film::{FilmAttributes, FilmDto};
pub use planet::{PlanetAttributes, PlanetDto};
pub use species::{SpeciesAttributes, SpeciesDto};
pub use user::{NewUser, UserDto};
