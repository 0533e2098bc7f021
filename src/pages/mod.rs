//! Role Pages

mod caregiver;
mod patient;

pub use caregiver::CaregiverPage;
pub use patient::PatientPage;
