pub mod a001_service_entry;
pub mod a002_attendance;
pub mod a003_therapist;
pub mod a004_property;
