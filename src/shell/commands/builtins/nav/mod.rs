pub mod cd;
pub mod pwd;
pub mod back;
