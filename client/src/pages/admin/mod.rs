pub mod contacts;
pub mod dashboard;
pub mod login;
pub mod projects;
