pub mod admin;
pub mod applications;
pub mod auth;
pub mod home;
pub mod jobs;
pub mod profiles;
pub mod system;
