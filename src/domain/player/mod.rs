pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPlayer, Player};
pub use repository::PlayerRepository;
pub use value_objects::{PlayerId, PlayerRole};
