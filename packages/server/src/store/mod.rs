//! Data access for users, topics, blog section sets and webpages.
//!
//! Every write auto-commits. Upserts are keyed on `(user_id, topic_id)`;
//! concurrent writers to the same key race and the last commit wins.

pub mod blogs;
pub mod topics;
pub mod users;
pub mod webpages;
