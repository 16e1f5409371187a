pub mod session;

pub use session::{MapSession, reconfigure};
