//! HTTP API handlers for artistly-web

pub mod artists;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod onboarding;

pub use artists::{get_artist, list_artists};
pub use dashboard::{approve_submission, list_submissions, reject_submission, submission_stats};
pub use health::health_routes;
pub use home::{filter_options, home_page};
pub use onboarding::submit_application;
