//! Streaming platform buttons.

use serde::Serialize;
use shared::StreamingPlatform;

/// Brand style for a platform button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformStyle {
    Crunchyroll,
    Netflix,
    Hulu,
    Funimation,
    Hidive,
    Generic,
}

/// Checked in order; the first keyword contained in the name wins
const BRANDS: [(&str, PlatformStyle); 5] = [
    ("crunchyroll", PlatformStyle::Crunchyroll),
    ("netflix", PlatformStyle::Netflix),
    ("hulu", PlatformStyle::Hulu),
    ("funimation", PlatformStyle::Funimation),
    ("hidive", PlatformStyle::Hidive),
];

impl PlatformStyle {
    /// Classify a platform by case-insensitive substring match on its name
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        BRANDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|(_, style)| *style)
            .unwrap_or(PlatformStyle::Generic)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PlatformStyle::Crunchyroll => "crunchyroll",
            PlatformStyle::Netflix => "netflix",
            PlatformStyle::Hulu => "hulu",
            PlatformStyle::Funimation => "funimation",
            PlatformStyle::Hidive => "hidive",
            PlatformStyle::Generic => "generic",
        }
    }
}

/// A link out to a streaming service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformButton {
    pub name: String,
    pub href: String,
    pub style: PlatformStyle,
    pub icon: String,
    pub icon_alt: String,
}

impl PlatformButton {
    fn from_platform(platform: &StreamingPlatform) -> Self {
        let name = platform.name.as_deref();
        let style = name.map(PlatformStyle::classify).unwrap_or(PlatformStyle::Generic);
        let label = name.unwrap_or("Platform");

        Self {
            name: name.unwrap_or("Unknown Platform").to_string(),
            href: platform.url.clone().unwrap_or_else(|| "#".to_string()),
            style,
            icon: placeholder_icon("333", "fff", label),
            icon_alt: label.to_string(),
        }
    }

    fn preset(name: &str, style: PlatformStyle, color: &str, initials: &str) -> Self {
        Self {
            name: name.to_string(),
            href: "#".to_string(),
            style,
            icon: placeholder_icon(color, "FFFFFF", initials),
            icon_alt: name.to_string(),
        }
    }
}

fn placeholder_icon(background: &str, foreground: &str, text: &str) -> String {
    format!(
        "https://via.placeholder.com/50x50/{}/{}?text={}",
        background,
        foreground,
        urlencoding::encode(text)
    )
}

/// Buttons for at most `max` platforms, or the default trio when none are listed
pub fn bind_platforms(streaming: &[StreamingPlatform], max: usize) -> Vec<PlatformButton> {
    if streaming.is_empty() {
        return default_platforms();
    }

    streaming
        .iter()
        .take(max)
        .map(PlatformButton::from_platform)
        .collect()
}

fn default_platforms() -> Vec<PlatformButton> {
    vec![
        PlatformButton::preset("Crunchyroll", PlatformStyle::Crunchyroll, "FF6B35", "CR"),
        PlatformButton::preset("Netflix", PlatformStyle::Netflix, "E50914", "N"),
        PlatformButton::preset("Hulu", PlatformStyle::Hulu, "1CE783", "H"),
    ]
}
