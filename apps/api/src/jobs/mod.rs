// Job listings: public search and detail, admin create/update/delete.

pub mod filter;
pub mod handlers;
pub mod queries;
pub mod validation;
