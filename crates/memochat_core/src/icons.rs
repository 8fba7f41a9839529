//! Icon vocabulary oracle.
//!
//! # Responsibility
//! - Hold the closed set of icon identifiers shortcuts may use.
//! - Serve case-insensitive prefix suggestions for the add/edit forms.
//!
//! # Invariants
//! - The vocabulary is fixed at build time; validation never accepts a name
//!   outside it.

/// Valid icon identifiers, mirrored from the icon-font glyph map shipped
/// with the presentation layer. Kept sorted for readability.
pub const ICON_NAMES: &[&str] = &[
    "airplane",
    "alarm",
    "albums",
    "american-football",
    "analytics",
    "aperture",
    "archive",
    "balloon",
    "bandage",
    "bar-chart",
    "barbell",
    "baseball",
    "basket",
    "basketball",
    "beaker",
    "bed",
    "beer",
    "bicycle",
    "boat",
    "book",
    "bookmark",
    "briefcase",
    "brush",
    "bug",
    "build",
    "bulb",
    "bus",
    "business",
    "cafe",
    "calculator",
    "calendar",
    "call",
    "camera",
    "car",
    "card",
    "cart",
    "cash",
    "chatbox",
    "chatbubble",
    "checkbox",
    "clipboard",
    "cloud",
    "code",
    "cog",
    "compass",
    "construct",
    "cube",
    "desktop",
    "diamond",
    "dice",
    "document",
    "earth",
    "egg",
    "eye",
    "fast-food",
    "film",
    "fitness",
    "flag",
    "flame",
    "flash",
    "flask",
    "flower",
    "folder",
    "football",
    "footsteps",
    "game-controller",
    "gift",
    "git-branch",
    "glasses",
    "globe",
    "golf",
    "grid",
    "hammer",
    "happy",
    "headset",
    "heart",
    "home",
    "hourglass",
    "ice-cream",
    "image",
    "journal",
    "key",
    "language",
    "laptop",
    "leaf",
    "library",
    "link",
    "list",
    "location",
    "magnet",
    "mail",
    "map",
    "medal",
    "medical",
    "medkit",
    "megaphone",
    "mic",
    "moon",
    "musical-note",
    "newspaper",
    "notifications",
    "nutrition",
    "paper-plane",
    "paw",
    "pencil",
    "people",
    "person",
    "pie-chart",
    "pin",
    "pizza",
    "planet",
    "podium",
    "pricetag",
    "pulse",
    "rainy",
    "reader",
    "receipt",
    "restaurant",
    "ribbon",
    "rocket",
    "rose",
    "school",
    "search",
    "send",
    "server",
    "settings",
    "shield",
    "shirt",
    "skull",
    "snow",
    "sparkles",
    "speedometer",
    "star",
    "stopwatch",
    "storefront",
    "subway",
    "sunny",
    "telescope",
    "tennisball",
    "terminal",
    "thermometer",
    "thumbs-up",
    "thunderstorm",
    "ticket",
    "time",
    "timer",
    "today",
    "train",
    "trash",
    "trending-up",
    "trophy",
    "tv",
    "umbrella",
    "videocam",
    "walk",
    "wallet",
    "warning",
    "watch",
    "water",
    "wifi",
    "wine",
];

/// Returns whether `name` belongs to the icon vocabulary (exact match).
pub fn is_valid_icon(name: &str) -> bool {
    ICON_NAMES.contains(&name)
}

/// Returns vocabulary entries starting with `prefix`, case-insensitively.
///
/// An empty prefix yields no suggestions; the form shows completions only
/// once the user starts typing.
pub fn suggest_icons(prefix: &str) -> Vec<&'static str> {
    let needle = prefix.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    ICON_NAMES
        .iter()
        .filter(|name| name.starts_with(&needle))
        .copied()
        .collect()
}
