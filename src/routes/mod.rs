pub mod reports;

pub mod submissions;

pub use reports::configure_reports_routes;
pub use submissions::configure_submissions_routes;
