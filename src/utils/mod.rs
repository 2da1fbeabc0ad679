pub mod token;
pub mod validation;
pub mod webutils;
