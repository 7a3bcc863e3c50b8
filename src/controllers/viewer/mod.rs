pub mod controller;
pub mod layout;
