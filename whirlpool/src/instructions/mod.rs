pub mod fees;
pub mod swap;
