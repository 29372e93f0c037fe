//! Home page content and picker option sets

use axum::Json;
use serde::Serialize;

use artistly_common::models::{Category, FeeRange, Language, Location, CATEGORIES};

/// Navigation or call-to-action link
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlatformStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Category card linking into the pre-filtered directory
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    #[serde(flatten)]
    pub category: &'static Category,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub badge: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub stats: Vec<PlatformStat>,
    pub categories: Vec<CategoryCard>,
    pub calls_to_action: Vec<Link>,
    pub navigation: Vec<Link>,
}

pub const NAVIGATION: [Link; 4] = [
    Link { label: "Home", href: "/" },
    Link { label: "Artists", href: "/artists" },
    Link { label: "Join as Artist", href: "/onboarding" },
    Link { label: "Dashboard", href: "/dashboard" },
];

/// GET /api/home
pub async fn home_page() -> Json<HomeResponse> {
    let categories = CATEGORIES
        .iter()
        .map(|category| CategoryCard {
            category,
            href: format!("/artists?category={}", category.id),
        })
        .collect();

    Json(HomeResponse {
        badge: "🎭 India's Premier Artist Booking Platform",
        headline: "Connect with Amazing Performing Artists",
        tagline: "ArTistLy bridges the gap between event planners and performing artists. \
                  Discover, connect, and book the perfect talent for your next event.",
        stats: vec![
            PlatformStat { label: "Active Artists", value: "500+" },
            PlatformStat { label: "Events Booked", value: "2,000+" },
            PlatformStat { label: "Average Rating", value: "4.8" },
            PlatformStat { label: "Verified Artists", value: "95%" },
        ],
        categories,
        calls_to_action: vec![
            Link { label: "Browse Artists", href: "/artists" },
            Link { label: "Join as Artist", href: "/onboarding" },
        ],
        navigation: NAVIGATION.to_vec(),
    })
}

/// Every value the directory and onboarding pickers offer
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub categories: &'static [Category],
    pub locations: Vec<&'static str>,
    pub fee_ranges: Vec<&'static str>,
    pub languages: Vec<&'static str>,
}

/// GET /api/options
pub async fn filter_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        categories: &CATEGORIES,
        locations: Location::ALL.iter().map(Location::label).collect(),
        fee_ranges: FeeRange::ALL.iter().map(FeeRange::label).collect(),
        languages: Language::ALL.iter().map(Language::label).collect(),
    })
}
