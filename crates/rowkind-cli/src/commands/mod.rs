pub mod convert;
pub mod describe;
pub mod kinds;
pub mod resolve;
