pub mod api;
pub mod config;
pub mod errors;
pub mod io;
pub mod reference;
pub mod report;
pub mod scanner;
pub mod status;

pub use scanner::Scanner;
