//! Page constants gathered in one place.
//!
//! Every field has the value the page was designed around; a host may override
//! any subset through `start_portfolio_with_config` (feature `serde_json`).

use crate::typewriter::TypewriterConfig;

pub const DEFAULT_PHRASES: &[&str] = &[
    "Full-Stack Web Developer",
    "React Enthusiast",
    "Problem Solver",
    "UI/UX Designer",
];

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct PortfolioConfig {
    // --- Typewriter ---
    pub phrases: Vec<String>,
    pub typing_selector: String,
    pub typewriter: TypewriterConfig,

    // --- Cursor ---
    /// Fraction of the remaining distance the follower covers per frame.
    pub follower_easing: f64,

    // --- Scroll ---
    pub navbar_scrolled_after: f64,
    pub back_to_top_after: f64,
    /// Fixed header height subtracted when scrolling to a section.
    pub scroll_offset: f64,
    /// How far above a section's top it already counts as active.
    pub active_section_offset: f64,
    /// Per-orb parallax step; orb k moves at `(k + 1) * parallax_step`.
    pub parallax_step: f64,

    // --- Counters ---
    pub counter_duration_ms: f64,
    pub counter_frame_ms: f64,

    // --- Contact ---
    pub contact_recipient: String,
    pub contact_feedback_ms: u32,

    // --- Particles ---
    pub particle_interval_ms: u32,
    pub particle_min_viewport: f64,

    // --- Page ---
    pub fade_in_delay_ms: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
            typing_selector: ".typing-text".into(),
            typewriter: TypewriterConfig::default(),
            follower_easing: 0.1,
            navbar_scrolled_after: 50.0,
            back_to_top_after: 500.0,
            scroll_offset: 80.0,
            active_section_offset: 200.0,
            parallax_step: 0.5,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16.0,
            contact_recipient: "uttamayush1212@gmail.com".into(),
            contact_feedback_ms: 3000,
            particle_interval_ms: 3000,
            particle_min_viewport: 768.0,
            fade_in_delay_ms: 100,
        }
    }
}

#[cfg(feature = "serde_json")]
impl PortfolioConfig {
    /// Parse a partial JSON object; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::error::PortfolioError> {
        serde_json::from_str(json).map_err(|e| crate::error::PortfolioError::Config(e.to_string()))
    }
}
