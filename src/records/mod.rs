pub mod job;
pub mod technician;

pub use job::{JobRecord, JobStatus, Severity};
pub use technician::{TechStatus, TechnicianRecord};
