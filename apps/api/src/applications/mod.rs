// Application workflow: candidates apply to postings, admins move applications
// through pending -> reviewed -> accepted | rejected.

pub mod handlers;
pub mod queries;
pub mod workflow;
