//! Small pure helpers shared by the data and service layers.

pub mod session_key;
pub mod time;
