pub mod client;
pub mod format;
pub mod server;
pub mod utils;

pub use client::PokeApiClient;
pub use server::PokeApiServer;
pub use utils::error::{PokeApiError, Result};
