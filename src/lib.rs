pub mod capture;
pub mod config;
pub mod describe;
pub mod launcher;
pub mod logging;
pub mod pipeline;
pub mod vision;
