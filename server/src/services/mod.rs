pub mod about;
pub mod account;
pub mod contact;
pub mod mailer;
pub mod project;
pub mod session;
pub mod upload;
