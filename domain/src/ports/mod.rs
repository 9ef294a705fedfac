pub mod backend;
pub mod confirmation;
