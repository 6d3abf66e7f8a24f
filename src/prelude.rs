pub use crate::{config::Config, result::Result, AppState};
