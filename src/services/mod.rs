pub mod reports;
pub mod submissions;

pub use reports::ReportService;
pub use submissions::SubmissionService;
