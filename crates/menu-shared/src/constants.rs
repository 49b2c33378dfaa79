//! Application-wide constants

/// Base URL of the remote catalog and recommendation API.
pub const DEFAULT_API_BASE_URL: &str = "https://render-deploy-iib7.onrender.com";
pub const DEFAULT_RESTAURANT_ID: i64 = 1;
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "menu-console.log";

pub const MIN_SPICE_LEVEL: u8 = 1;
pub const MAX_SPICE_LEVEL: u8 = 5;
pub const MAX_RATING_STARS: usize = 5;

/// Tags offered by the item form.
pub const PREDEFINED_TAGS: [&str; 12] = [
    "Vegan",
    "Vegetarian",
    "Gluten-Free",
    "Spicy",
    "Popular",
    "New",
    "Dairy-Free",
    "Nut-Free",
    "Keto",
    "Low-Carb",
    "Organic",
    "Seasonal",
];

pub const SUGGESTION_FALLBACK_REPLY: &str =
    "I apologize, but I couldn't generate a recommendation at this time. Please try again!";
pub const SUGGESTION_ERROR_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment! 🤖";
pub const DEFAULT_MENU_LABEL: &str = "our menu";

pub const FALLBACK_TITLE: &str = "Oops!";
pub const FALLBACK_MESSAGE: &str = "Something went wrong.";
