pub mod application;
pub mod education;
pub mod employer_profile;
pub mod experience;
pub mod job_listing;
pub mod option_fields;
pub mod seeker_profile;
pub mod stats;
pub mod token;
pub mod user;
