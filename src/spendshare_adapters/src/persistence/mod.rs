pub mod hashmap_credential_repository;
pub mod postgres_credential_repository;

pub use hashmap_credential_repository::HashMapCredentialRepository;
pub use postgres_credential_repository::PostgresCredentialRepository;
