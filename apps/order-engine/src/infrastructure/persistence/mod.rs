//! Persistence adapters for the application repository.

mod in_memory;
mod postgres;

pub use in_memory::InMemoryApplicationRepository;
pub use postgres::PostgresApplicationRepository;
