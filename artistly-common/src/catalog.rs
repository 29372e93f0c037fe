//! Fixed in-memory data set the site starts with
//!
//! Nothing here is persisted; every process start gets a fresh copy.

use chrono::NaiveDate;

use crate::models::{Artist, ArtistSubmission, CategoryId, SubmissionStatus};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=300";

#[allow(clippy::too_many_arguments)]
fn artist(
    id: &str,
    name: &str,
    bio: &str,
    categories: &[CategoryId],
    languages: &[&str],
    fee_range: &str,
    location: &str,
    rating: f32,
    review_count: u32,
    verified: bool,
) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        categories: categories.to_vec(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
        fee_range: fee_range.to_string(),
        location: location.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        rating,
        review_count,
        verified,
    }
}

/// Directory listings, in display order
pub fn artists() -> Vec<Artist> {
    use CategoryId::*;

    vec![
        artist(
            "1",
            "Priya Sharma",
            "Classical and Bollywood singer with 10+ years of experience performing at weddings, corporate events, and cultural festivals across India.",
            &[Singers],
            &["Hindi", "English", "Punjabi"],
            "₹30,000 - ₹50,000",
            "Mumbai",
            4.8,
            124,
            true,
        ),
        artist(
            "2",
            "Rahul Dance Crew",
            "Contemporary and hip-hop dance group specializing in corporate events, product launches, and entertainment shows with high-energy performances.",
            &[Dancers],
            &["Hindi", "English"],
            "₹50,000 - ₹1,00,000",
            "Delhi",
            4.9,
            89,
            true,
        ),
        artist(
            "3",
            "Dr. Anjali Mehta",
            "Motivational speaker and life coach with expertise in leadership development, women empowerment, and corporate training programs.",
            &[Speakers],
            &["Hindi", "English", "Gujarati"],
            "₹15,000 - ₹30,000",
            "Ahmedabad",
            4.7,
            156,
            true,
        ),
        artist(
            "4",
            "DJ Arjun",
            "Electronic music producer and DJ specializing in weddings, parties, and nightclub events with a vast collection of Bollywood and international hits.",
            &[Djs],
            &["Hindi", "English", "Tamil"],
            "₹25,000 - ₹40,000",
            "Bangalore",
            4.6,
            203,
            false,
        ),
        artist(
            "5",
            "Kavya Classical",
            "Carnatic music vocalist and classical dance performer with expertise in traditional South Indian arts and fusion performances.",
            &[Singers, Dancers],
            &["Tamil", "Telugu", "English"],
            "₹20,000 - ₹35,000",
            "Chennai",
            4.9,
            78,
            true,
        ),
        artist(
            "6",
            "Stand-up Sameer",
            "Comedy performer and corporate entertainment specialist known for clean humor and audience engagement at corporate events and private parties.",
            &[Speakers],
            &["Hindi", "English", "Marathi"],
            "₹15,000 - ₹30,000",
            "Pune",
            4.5,
            167,
            true,
        ),
        artist(
            "7",
            "Fusion Folk Band",
            "Traditional folk music band with modern fusion elements, perfect for cultural events, festivals, and themed celebrations.",
            &[Singers],
            &["Hindi", "Rajasthani", "Punjabi"],
            "₹40,000 - ₹60,000",
            "Jaipur",
            4.7,
            92,
            true,
        ),
        artist(
            "8",
            "Bollywood Beats",
            "High-energy Bollywood dance troupe specializing in choreographed performances for weddings, sangeet ceremonies, and corporate events.",
            &[Dancers],
            &["Hindi", "English", "Bengali"],
            "₹35,000 - ₹55,000",
            "Kolkata",
            4.8,
            134,
            true,
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Applications awaiting or past review, newest first
pub fn submissions() -> Vec<ArtistSubmission> {
    vec![
        ArtistSubmission {
            id: "1".to_string(),
            name: "Neha Kapoor".to_string(),
            categories: vec![CategoryId::Singers],
            city: "Mumbai".to_string(),
            fee: "₹25,000 - ₹40,000".to_string(),
            submitted_at: date(2024, 1, 15),
            status: SubmissionStatus::Pending,
        },
        ArtistSubmission {
            id: "2".to_string(),
            name: "Bollywood Beats".to_string(),
            categories: vec![CategoryId::Dancers],
            city: "Delhi".to_string(),
            fee: "₹45,000 - ₹60,000".to_string(),
            submitted_at: date(2024, 1, 14),
            status: SubmissionStatus::Approved,
        },
        ArtistSubmission {
            id: "3".to_string(),
            name: "Tech Speaker Pro".to_string(),
            categories: vec![CategoryId::Speakers],
            city: "Bangalore".to_string(),
            fee: "₹30,000 - ₹50,000".to_string(),
            submitted_at: date(2024, 1, 13),
            status: SubmissionStatus::Rejected,
        },
    ]
}
