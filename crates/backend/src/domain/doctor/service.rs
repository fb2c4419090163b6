use super::repository::DoctorDirectory;
use contracts::domain::doctor::Doctor;

pub async fn list_all(directory: &DoctorDirectory) -> Vec<Doctor> {
    directory.list_all()
}
