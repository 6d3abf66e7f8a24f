mod user;
pub use user::*;

mod tweet;
pub use tweet::*;
