pub mod controller;
pub mod conversation;
pub mod errors;
pub mod models;
pub mod providers;
pub mod render;
pub mod validator;
