//! Domain models for the booking directory
//!
//! Artists and submissions carry the free-form labels found in the seeded
//! data. The option sets offered by the site's pickers (categories,
//! locations, fee ranges, languages) are closed enums.

pub mod artist;
pub mod category;
pub mod options;
pub mod submission;

pub use artist::Artist;
pub use category::{Category, CategoryId, CATEGORIES};
pub use options::{FeeRange, Language, Location};
pub use submission::{ArtistSubmission, SubmissionStatus};
