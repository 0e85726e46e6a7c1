mod account_service_test;
mod diagnosis_service_test;
mod followup_service_test;
