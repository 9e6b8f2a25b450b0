pub mod info;
pub mod run;
pub mod session;
pub mod template;
