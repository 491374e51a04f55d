pub mod logging;
pub mod repositories;
pub mod security;
pub mod time;
