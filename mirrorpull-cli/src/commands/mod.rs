pub mod pull;
pub mod scan;
