//! Seed-once collections over the record types.
//!
//! Both collections are built from fixtures at startup and never mutated
//! afterwards; every accessor is a read-only view. The one invariant
//! enforced at seed time is id uniqueness.

use std::collections::HashSet;

use crate::error::{BoardError, Result};
use crate::filter::{filter_records, status_tally, FilterSet};
use crate::records::{JobRecord, JobStatus, TechStatus, TechnicianRecord};

/// Holds every job in insertion order.
#[derive(Debug)]
pub struct JobBoard {
    jobs: Vec<JobRecord>,
}

impl JobBoard {
    /// Build a board, rejecting duplicate ids.
    pub fn from_records(jobs: Vec<JobRecord>) -> Result<Self> {
        check_unique_ids(jobs.iter().map(|j| j.id.as_str()))?;
        Ok(Self { jobs })
    }

    pub fn all(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Jobs matching the search term and filters, in original order.
    pub fn search(&self, term: &str, filters: &FilterSet) -> Vec<&JobRecord> {
        filter_records(&self.jobs, term, filters)
    }

    pub fn status_tally(&self, status: JobStatus) -> usize {
        status_tally(&self.jobs, status.as_str())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Holds every technician in insertion order.
#[derive(Debug)]
pub struct TechnicianRoster {
    technicians: Vec<TechnicianRecord>,
}

impl TechnicianRoster {
    /// Build a roster, rejecting duplicate ids.
    pub fn from_records(technicians: Vec<TechnicianRecord>) -> Result<Self> {
        check_unique_ids(technicians.iter().map(|t| t.id.as_str()))?;
        Ok(Self { technicians })
    }

    pub fn all(&self) -> &[TechnicianRecord] {
        &self.technicians
    }

    pub fn get(&self, id: &str) -> Option<&TechnicianRecord> {
        self.technicians.iter().find(|t| t.id == id)
    }

    /// Technicians matching the search term and filters, in original order.
    pub fn search(&self, term: &str, filters: &FilterSet) -> Vec<&TechnicianRecord> {
        filter_records(&self.technicians, term, filters)
    }

    pub fn status_tally(&self, status: TechStatus) -> usize {
        status_tally(&self.technicians, status.as_str())
    }

    pub fn len(&self) -> usize {
        self.technicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technicians.is_empty()
    }
}

fn check_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BoardError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}
