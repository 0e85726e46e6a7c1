#[path = "../helpers/mod.rs"]
mod helpers;

mod pg_patient_repository_test;
