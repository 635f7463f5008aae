pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod film;
pub mod film_character;
pub mod planet;
pub mod species;
pub mod user;
