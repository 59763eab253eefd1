pub mod entities;
pub mod requests;
