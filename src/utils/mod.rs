pub mod code_generator;
pub mod destination;
pub mod password;
pub mod random;
