pub mod memory_player;

pub use memory_player::InMemoryPlayerRepository;
