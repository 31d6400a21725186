pub mod assets;
pub mod insights;
