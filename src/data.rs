//! Seed fixtures for the board. These stand in for a real intake system;
//! everything downstream operates on whatever conforms to the record types.

use chrono::{DateTime, Utc};

use crate::records::{JobRecord, JobStatus, Severity, TechStatus, TechnicianRecord};
use crate::reports::{CategoryReport, PeriodReport, TechnicianPerformance};

// SAFETY: fixture timestamps are hardcoded valid RFC 3339 strings
fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("fixture timestamp is valid")
}

pub fn sample_jobs() -> Vec<JobRecord> {
    vec![
        JobRecord {
            id: "1".to_string(),
            customer_name: "John Smith".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Main St, Anytown, USA".to_string(),
            issue: "Leaking faucet in kitchen".to_string(),
            category: "Faucet Repair".to_string(),
            severity: Severity::Medium,
            urgency: Severity::Medium,
            status: JobStatus::Assigned,
            assigned_to: Some("Mike Johnson".to_string()),
            created_at: ts("2024-01-15T10:30:00Z"),
            estimated_time: Some("2 hours".to_string()),
        },
        JobRecord {
            id: "2".to_string(),
            customer_name: "Sarah Wilson".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            address: "456 Oak Ave, Somewhere, USA".to_string(),
            issue: "Clogged drain in bathroom".to_string(),
            category: "Drain Cleaning".to_string(),
            severity: Severity::High,
            urgency: Severity::High,
            status: JobStatus::InProgress,
            assigned_to: Some("Tom Davis".to_string()),
            created_at: ts("2024-01-15T09:15:00Z"),
            estimated_time: Some("1.5 hours".to_string()),
        },
        JobRecord {
            id: "3".to_string(),
            customer_name: "Robert Chen".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            address: "789 Pine Rd, Elsewhere, USA".to_string(),
            issue: "Water heater not working".to_string(),
            category: "Water Heater".to_string(),
            severity: Severity::High,
            urgency: Severity::High,
            status: JobStatus::Pending,
            assigned_to: None,
            created_at: ts("2024-01-15T11:45:00Z"),
            estimated_time: Some("3 hours".to_string()),
        },
        JobRecord {
            id: "4".to_string(),
            customer_name: "Emily Brown".to_string(),
            phone: "+1 (555) 321-6540".to_string(),
            address: "321 Elm St, Downtown, USA".to_string(),
            issue: "Toilet running continuously".to_string(),
            category: "Toilet Repair".to_string(),
            severity: Severity::Low,
            urgency: Severity::Medium,
            status: JobStatus::Completed,
            assigned_to: Some("Alex Wilson".to_string()),
            created_at: ts("2024-01-14T14:20:00Z"),
            estimated_time: Some("1 hour".to_string()),
        },
        JobRecord {
            id: "5".to_string(),
            customer_name: "David Lee".to_string(),
            phone: "+1 (555) 789-0123".to_string(),
            address: "654 Maple Dr, Suburb, USA".to_string(),
            issue: "Low water pressure throughout house".to_string(),
            category: "Water Pressure".to_string(),
            severity: Severity::Medium,
            urgency: Severity::Low,
            status: JobStatus::Assigned,
            assigned_to: Some("Sarah Miller".to_string()),
            created_at: ts("2024-01-15T08:00:00Z"),
            estimated_time: Some("2.5 hours".to_string()),
        },
    ]
}

pub fn sample_technicians() -> Vec<TechnicianRecord> {
    vec![
        TechnicianRecord {
            id: "1".to_string(),
            name: "Mike Johnson".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "mike.johnson@plumberco.com".to_string(),
            specialties: vec![
                "Faucet Repair".to_string(),
                "Drain Cleaning".to_string(),
                "Pipe Installation".to_string(),
            ],
            status: TechStatus::Available,
            current_job: None,
            rating: 4.8,
            completed_jobs: 156,
            location: "Downtown Area".to_string(),
            last_active: "2 minutes ago".to_string(),
        },
        TechnicianRecord {
            id: "2".to_string(),
            name: "Tom Davis".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            email: "tom.davis@plumberco.com".to_string(),
            specialties: vec![
                "Water Heater".to_string(),
                "Emergency Repairs".to_string(),
                "Gas Lines".to_string(),
            ],
            status: TechStatus::Busy,
            current_job: Some("Water heater replacement - Sarah Wilson".to_string()),
            rating: 4.9,
            completed_jobs: 203,
            location: "North District".to_string(),
            last_active: "5 minutes ago".to_string(),
        },
        TechnicianRecord {
            id: "3".to_string(),
            name: "Alex Wilson".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            email: "alex.wilson@plumberco.com".to_string(),
            specialties: vec![
                "Toilet Repair".to_string(),
                "Sewer Lines".to_string(),
                "Backflow Prevention".to_string(),
            ],
            status: TechStatus::Available,
            current_job: None,
            rating: 4.7,
            completed_jobs: 89,
            location: "South District".to_string(),
            last_active: "1 minute ago".to_string(),
        },
        TechnicianRecord {
            id: "4".to_string(),
            name: "Sarah Miller".to_string(),
            phone: "+1 (555) 321-6540".to_string(),
            email: "sarah.miller@plumberco.com".to_string(),
            specialties: vec![
                "Water Pressure".to_string(),
                "Pipe Leaks".to_string(),
                "Fixture Installation".to_string(),
            ],
            status: TechStatus::Busy,
            current_job: Some("Low pressure diagnosis - David Lee".to_string()),
            rating: 4.6,
            completed_jobs: 134,
            location: "East District".to_string(),
            last_active: "3 minutes ago".to_string(),
        },
        TechnicianRecord {
            id: "5".to_string(),
            name: "Chris Rodriguez".to_string(),
            phone: "+1 (555) 789-0123".to_string(),
            email: "chris.rodriguez@plumberco.com".to_string(),
            specialties: vec![
                "Commercial Plumbing".to_string(),
                "HVAC Integration".to_string(),
                "Preventive Maintenance".to_string(),
            ],
            status: TechStatus::Offline,
            current_job: None,
            rating: 4.5,
            completed_jobs: 67,
            location: "West District".to_string(),
            last_active: "2 hours ago".to_string(),
        },
    ]
}

pub fn sample_periods() -> Vec<PeriodReport> {
    vec![
        PeriodReport {
            period: "Jan 2024".to_string(),
            total_jobs: 145,
            completed_jobs: 138,
            revenue: 28_450,
            avg_response_hours: 2.3,
            customer_satisfaction: 4.7,
        },
        PeriodReport {
            period: "Dec 2023".to_string(),
            total_jobs: 132,
            completed_jobs: 128,
            revenue: 26_100,
            avg_response_hours: 2.1,
            customer_satisfaction: 4.6,
        },
        PeriodReport {
            period: "Nov 2023".to_string(),
            total_jobs: 118,
            completed_jobs: 115,
            revenue: 23_100,
            avg_response_hours: 2.5,
            customer_satisfaction: 4.8,
        },
    ]
}

pub fn sample_categories() -> Vec<CategoryReport> {
    vec![
        CategoryReport {
            category: "Faucet Repair".to_string(),
            jobs: 45,
            revenue: 8_900,
        },
        CategoryReport {
            category: "Drain Cleaning".to_string(),
            jobs: 38,
            revenue: 7_600,
        },
        CategoryReport {
            category: "Water Heater".to_string(),
            jobs: 22,
            revenue: 13_200,
        },
        CategoryReport {
            category: "Toilet Repair".to_string(),
            jobs: 28,
            revenue: 4_200,
        },
        CategoryReport {
            category: "Pipe Installation".to_string(),
            jobs: 12,
            revenue: 9_600,
        },
    ]
}

pub fn sample_performance() -> Vec<TechnicianPerformance> {
    vec![
        TechnicianPerformance {
            name: "Mike Johnson".to_string(),
            jobs: 45,
            rating: 4.8,
            revenue: 8_900,
        },
        TechnicianPerformance {
            name: "Tom Davis".to_string(),
            jobs: 52,
            rating: 4.9,
            revenue: 10_200,
        },
        TechnicianPerformance {
            name: "Alex Wilson".to_string(),
            jobs: 38,
            rating: 4.7,
            revenue: 7_200,
        },
        TechnicianPerformance {
            name: "Sarah Miller".to_string(),
            jobs: 41,
            rating: 4.6,
            revenue: 8_100,
        },
        TechnicianPerformance {
            name: "Chris Rodriguez".to_string(),
            jobs: 29,
            rating: 4.5,
            revenue: 5_800,
        },
    ]
}
