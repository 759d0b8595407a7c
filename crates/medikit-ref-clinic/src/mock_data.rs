//! Simulated patient data for the MediKit demo.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module stands in for real patient records, pharmacy
//! directories, and provider rosters in a production deployment.

use chrono::{NaiveDate, NaiveTime};

use medikit_contracts::{
    booking::{Doctor, DoctorId},
    directory::{OtcMedication, Pharmacy},
    reminder::{Reminder, ReminderId},
};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time")
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// The four demo reminders, including pre-built adherence state.
///
/// Omega-3 is seeded paused to show the inventory/due-list distinction:
/// it stays listed but never appears in today's doses.
pub fn seed_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: ReminderId(1),
            medication: "Lisinopril".to_string(),
            dosage: "10mg".to_string(),
            frequency: "Once daily".to_string(),
            dose_times: vec![hm(8, 0)],
            start_date: ymd(2024, 1, 1),
            end_date: None,
            is_active: true,
            taken_today: true,
            streak: 15,
        },
        Reminder {
            id: ReminderId(2),
            medication: "Metformin".to_string(),
            dosage: "500mg".to_string(),
            frequency: "Twice daily".to_string(),
            dose_times: vec![hm(8, 0), hm(20, 0)],
            start_date: ymd(2024, 1, 1),
            end_date: None,
            is_active: true,
            taken_today: false,
            streak: 12,
        },
        Reminder {
            id: ReminderId(3),
            medication: "Vitamin D3".to_string(),
            dosage: "1000 IU".to_string(),
            frequency: "Once daily".to_string(),
            dose_times: vec![hm(9, 0)],
            start_date: ymd(2024, 1, 15),
            end_date: None,
            is_active: true,
            taken_today: true,
            streak: 8,
        },
        Reminder {
            id: ReminderId(4),
            medication: "Omega-3".to_string(),
            dosage: "1200mg".to_string(),
            frequency: "Once daily".to_string(),
            dose_times: vec![hm(9, 0)],
            start_date: ymd(2024, 1, 10),
            end_date: None,
            is_active: false,
            taken_today: false,
            streak: 0,
        },
    ]
}

/// Four fictional pharmacies around the demo neighborhood.
pub fn seed_pharmacies() -> Vec<Pharmacy> {
    vec![
        Pharmacy {
            id: 1,
            name: "HealthPlus Pharmacy".to_string(),
            address: "123 Main Street, Downtown".to_string(),
            distance_miles: 0.5,
            rating: 4.8,
            is_open: true,
            hours: "8:00 AM - 10:00 PM".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            services: vec![
                "Prescription".to_string(),
                "OTC".to_string(),
                "Consultation".to_string(),
                "Home Delivery".to_string(),
            ],
        },
        Pharmacy {
            id: 2,
            name: "MediCare Express".to_string(),
            address: "456 Oak Avenue, Midtown".to_string(),
            distance_miles: 1.2,
            rating: 4.6,
            is_open: true,
            hours: "24/7".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            services: vec![
                "Prescription".to_string(),
                "Emergency".to_string(),
                "Insurance".to_string(),
                "Vaccinations".to_string(),
            ],
        },
        Pharmacy {
            id: 3,
            name: "Community Health Pharmacy".to_string(),
            address: "789 Pine Road, Westside".to_string(),
            distance_miles: 2.1,
            rating: 4.7,
            is_open: false,
            hours: "9:00 AM - 8:00 PM".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            services: vec![
                "Prescription".to_string(),
                "OTC".to_string(),
                "Health Screening".to_string(),
                "Consultation".to_string(),
            ],
        },
        Pharmacy {
            id: 4,
            name: "QuickMeds Pharmacy".to_string(),
            address: "321 Elm Street, Eastside".to_string(),
            distance_miles: 2.8,
            rating: 4.5,
            is_open: true,
            hours: "7:00 AM - 11:00 PM".to_string(),
            phone: "+1 (555) 321-9876".to_string(),
            services: vec![
                "Prescription".to_string(),
                "OTC".to_string(),
                "Home Delivery".to_string(),
                "Mobile App".to_string(),
            ],
        },
    ]
}

/// The quick-order catalogue.
pub fn seed_otc_medications() -> Vec<OtcMedication> {
    vec![
        OtcMedication {
            name: "Paracetamol 500mg".to_string(),
            category: "Pain Relief".to_string(),
            price_usd: 8.99,
        },
        OtcMedication {
            name: "Ibuprofen 200mg".to_string(),
            category: "Anti-inflammatory".to_string(),
            price_usd: 12.50,
        },
        OtcMedication {
            name: "Vitamin D3".to_string(),
            category: "Supplements".to_string(),
            price_usd: 15.99,
        },
        OtcMedication {
            name: "Antihistamine".to_string(),
            category: "Allergy".to_string(),
            price_usd: 9.75,
        },
    ]
}

/// The teleconsultation roster with each doctor's daily slot grid.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: DoctorId(1),
            name: "Dr. Sarah Johnson".to_string(),
            specialty: "General Medicine".to_string(),
            rating: 4.9,
            years_experience: 15,
            fee_usd: 75,
            availability: vec![hm(9, 0), hm(10, 30), hm(14, 0), hm(15, 30)],
        },
        Doctor {
            id: DoctorId(2),
            name: "Dr. Michael Chen".to_string(),
            specialty: "Cardiology".to_string(),
            rating: 4.8,
            years_experience: 12,
            fee_usd: 120,
            availability: vec![hm(11, 0), hm(13, 0), hm(16, 0)],
        },
        Doctor {
            id: DoctorId(3),
            name: "Dr. Emily Rodriguez".to_string(),
            specialty: "Dermatology".to_string(),
            rating: 4.9,
            years_experience: 10,
            fee_usd: 95,
            availability: vec![hm(9, 30), hm(12, 0), hm(14, 30), hm(17, 0)],
        },
        Doctor {
            id: DoctorId(4),
            name: "Dr. James Wilson".to_string(),
            specialty: "Pediatrics".to_string(),
            rating: 4.7,
            years_experience: 18,
            fee_usd: 85,
            availability: vec![hm(10, 0), hm(11, 30), hm(15, 0)],
        },
    ]
}

/// Suggestion chips shown on the medical-history step of the profile wizard.
pub fn profile_suggestions() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "Health Conditions",
            vec!["Hypertension", "Diabetes Type 2", "High Cholesterol", "Asthma"],
        ),
        (
            "Common Allergies",
            vec!["Peanuts", "Shellfish", "Penicillin", "Latex", "Dust Mites"],
        ),
        (
            "Medications",
            vec!["Aspirin", "Lisinopril", "Metformin", "Albuterol", "Omeprazole"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_seed_ids_are_unique() {
        let seed = seed_reminders();
        let unique: std::collections::HashSet<_> = seed.iter().map(|r| r.id).collect();
        assert_eq!(unique.len(), seed.len());
    }

    #[test]
    fn every_seed_reminder_has_dose_times() {
        assert!(seed_reminders().iter().all(|r| !r.dose_times.is_empty()));
    }

    #[test]
    fn exactly_one_seed_reminder_is_paused() {
        let paused = seed_reminders().iter().filter(|r| !r.is_active).count();
        assert_eq!(paused, 1);
    }

    #[test]
    fn every_doctor_offers_at_least_one_slot() {
        assert!(seed_doctors().iter().all(|d| !d.availability.is_empty()));
    }

    #[test]
    fn pharmacy_seed_covers_open_and_closed() {
        let pharmacies = seed_pharmacies();
        assert!(pharmacies.iter().any(|p| p.is_open));
        assert!(pharmacies.iter().any(|p| !p.is_open));
    }
}
