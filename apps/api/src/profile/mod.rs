// Candidate profile: the record the recommendation prompt is built from.

pub mod handlers;
pub mod queries;
pub mod validation;
