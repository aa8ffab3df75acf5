use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::{CreateDoctorRequest, Doctor, DoctorError, Specialty};

/// Lookup source for the clinic's doctors and specialties. The appointment
/// cell reads doctor snapshots from here; the admin surface adds and removes
/// entries.
#[async_trait]
pub trait DoctorDirectory: Send + Sync {
    async fn list(&self) -> Vec<Doctor>;
    async fn get(&self, id: Uuid) -> Option<Doctor>;
    async fn add(&self, request: CreateDoctorRequest) -> Doctor;
    async fn remove(&self, id: Uuid) -> Result<Doctor, DoctorError>;
    async fn specialties(&self) -> Vec<Specialty>;
}

pub struct MemoryDoctorDirectory {
    doctors: RwLock<Vec<Doctor>>,
    specialties: Vec<Specialty>,
}

impl MemoryDoctorDirectory {
    pub fn new() -> Self {
        Self {
            doctors: RwLock::new(Vec::new()),
            specialties: Vec::new(),
        }
    }

    /// Directory pre-populated with the clinic's launch roster.
    pub fn seeded() -> Self {
        let specialties = [
            ("Cardiology", "Heart and cardiovascular system"),
            ("Dermatology", "Skin, hair, and nails"),
            ("Pediatrics", "Medical care for children"),
            ("Orthopedics", "Bones, joints, and muscles"),
            ("Gynecology", "Women's reproductive health"),
            ("Neurology", "Brain and nervous system"),
            ("Dentistry", "Oral health and teeth"),
            ("Ophthalmology", "Eye care and vision"),
        ]
        .into_iter()
        .map(|(name, description)| Specialty {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect();

        let weekdays = || {
            vec![
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Thursday".to_string(),
                "Friday".to_string(),
            ]
        };

        let roster = [
            ("Dr. Sarah Johnson", "Cardiology", 12, 150, 4.8),
            ("Dr. Michael Chen", "Dermatology", 8, 120, 4.9),
            ("Dr. Emily Rodriguez", "Pediatrics", 15, 100, 4.7),
            ("Dr. James Wilson", "Orthopedics", 20, 180, 4.6),
            ("Dr. Lisa Park", "Gynecology", 10, 130, 4.8),
            ("Dr. Robert Thompson", "Neurology", 18, 200, 4.9),
        ];

        let doctors = roster
            .into_iter()
            .map(
                |(full_name, specialty, experience_years, consultation_fee, rating)| Doctor {
                    id: Uuid::new_v4(),
                    full_name: full_name.to_string(),
                    specialty: specialty.to_string(),
                    experience_years,
                    consultation_fee,
                    image_url: format!(
                        "https://images.clinic.local/doctors/{}.jpg",
                        full_name.to_lowercase().replace(' ', "-").replace('.', "")
                    ),
                    available_days: weekdays(),
                    rating,
                    created_at: Utc::now(),
                },
            )
            .collect();

        Self {
            doctors: RwLock::new(doctors),
            specialties,
        }
    }
}

impl Default for MemoryDoctorDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl DoctorDirectory for MemoryDoctorDirectory {
    async fn list(&self) -> Vec<Doctor> {
        self.doctors.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Option<Doctor> {
        self.doctors.read().await.iter().find(|d| d.id == id).cloned()
    }

    async fn add(&self, request: CreateDoctorRequest) -> Doctor {
        let doctor = Doctor {
            id: Uuid::new_v4(),
            full_name: request.full_name,
            specialty: request.specialty,
            experience_years: request.experience_years,
            consultation_fee: request.consultation_fee,
            image_url: request.image_url,
            available_days: request.available_days,
            rating: request.rating,
            created_at: Utc::now(),
        };

        info!("Adding doctor {} ({})", doctor.full_name, doctor.id);
        self.doctors.write().await.push(doctor.clone());
        doctor
    }

    async fn remove(&self, id: Uuid) -> Result<Doctor, DoctorError> {
        let mut doctors = self.doctors.write().await;
        let position = doctors
            .iter()
            .position(|d| d.id == id)
            .ok_or(DoctorError::NotFound)?;

        let removed = doctors.remove(position);
        info!("Removed doctor {} ({})", removed.full_name, removed.id);
        Ok(removed)
    }

    async fn specialties(&self) -> Vec<Specialty> {
        self.specialties.clone()
    }
}
