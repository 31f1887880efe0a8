// Candidate sign-up. Sessions and tokens are issued elsewhere; this only creates the user row.

pub mod handlers;
pub mod password;
pub mod queries;
pub mod validation;
