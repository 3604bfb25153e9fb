pub mod context;
pub mod generate;
pub mod lint;
pub mod synthesize;
