pub mod advice;
pub mod config;
pub mod error;
pub mod outcome;
pub mod summary;
pub mod tier;


pub use advice::*;
pub use config::*;
pub use error::*;
pub use outcome::*;
pub use summary::*;
pub use tier::*;
