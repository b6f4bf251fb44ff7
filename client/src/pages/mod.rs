pub mod about;
pub mod admin;
pub mod contact;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod services;
pub mod stories;
