mod in_memory_patient_repository;
mod pg_patient_repository;
mod pg_pool;

pub use in_memory_patient_repository::InMemoryPatientRepository;
pub use pg_patient_repository::PgPatientRepository;
pub use pg_pool::create_pool;
