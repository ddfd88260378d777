pub mod application;
pub mod employer_profile;
pub mod job_listing;
pub mod mem_repo;
pub mod seeker_profile;
pub mod token;
pub mod user;
