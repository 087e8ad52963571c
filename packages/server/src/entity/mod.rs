pub mod blog;
pub mod topic;
pub mod user;
pub mod webpage;
