mod post;
mod user;

pub use post::{Mention, Post};
pub use user::{Follower, User};
