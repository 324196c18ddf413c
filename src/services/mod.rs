pub mod daily;
pub mod learning;
pub mod profile;
pub mod progress;
pub mod quiz;
