use super::ThemeRecord;

/// Identifiers of the built-in themes in cycle order.
pub const BUILTIN_IDS: [&str; 14] = [
    "purple",
    "deepPurple",
    "midnight",
    "lavender",
    "cyberpunk",
    "royal",
    "ocean",
    "dark",
    "light",
    "neon",
    "sunset",
    "forest",
    "cherry",
    "matrix",
];

/// All built-in themes paired with their identifiers, in cycle order.
pub fn all() -> Vec<(&'static str, ThemeRecord)> {
    vec![
        ("purple", purple()),
        ("deepPurple", deep_purple()),
        ("midnight", midnight()),
        ("lavender", lavender()),
        ("cyberpunk", cyberpunk()),
        ("royal", royal()),
        ("ocean", ocean()),
        ("dark", dark()),
        ("light", light()),
        ("neon", neon()),
        ("sunset", sunset()),
        ("forest", forest()),
        ("cherry", cherry()),
        ("matrix", matrix()),
    ]
}

/// Default violet theme.
pub fn purple() -> ThemeRecord {
    ThemeRecord::from_values(
        "Purple",
        ["#9333EA", "#EC4899", "#A855F7", "#0F0A1E", "#1A1033", "#F5F3FF", "#C4B5FD"],
        [
            "normal",
            "700",
            "0 4px 20px rgba(147, 51, 234, 0.25)",
            "0 0 20px rgba(147, 51, 234, 0.4)",
            "1px solid rgba(147, 51, 234, 0.2)",
        ],
    )
}

/// Saturated violet on near-black.
pub fn deep_purple() -> ThemeRecord {
    ThemeRecord::from_values(
        "Deep Purple",
        ["#7C3AED", "#6D28D9", "#C026D3", "#0B0616", "#160D2B", "#EDE9FE", "#A78BFA"],
        [
            "normal",
            "800",
            "0 8px 24px rgba(124, 58, 237, 0.3)",
            "0 0 25px rgba(124, 58, 237, 0.5)",
            "1px solid rgba(124, 58, 237, 0.25)",
        ],
    )
}

/// Indigo on slate.
pub fn midnight() -> ThemeRecord {
    ThemeRecord::from_values(
        "Midnight",
        ["#6366F1", "#8B5CF6", "#22D3EE", "#020617", "#0F172A", "#E2E8F0", "#94A3B8"],
        [
            "normal",
            "700",
            "0 4px 6px -1px rgba(0, 0, 0, 0.4)",
            "0 0 20px rgba(99, 102, 241, 0.35)",
            "1px solid rgba(99, 102, 241, 0.15)",
        ],
    )
}

/// Light violet theme.
pub fn lavender() -> ThemeRecord {
    ThemeRecord::from_values(
        "Lavender",
        ["#8B5CF6", "#D946EF", "#F472B6", "#FAF5FF", "#FFFFFF", "#3B0764", "#6B21A8"],
        [
            "normal",
            "600",
            "0 1px 3px 0 rgba(139, 92, 246, 0.15)",
            "0 0 15px rgba(139, 92, 246, 0.25)",
            "1px solid rgba(216, 180, 254, 1)",
        ],
    )
}

/// Neon pink and cyan on deep blue.
pub fn cyberpunk() -> ThemeRecord {
    ThemeRecord::from_values(
        "Cyberpunk",
        ["#FF2A6D", "#05D9E8", "#F9F002", "#01012B", "#0D0D3B", "#D1F7FF", "#7FDBFF"],
        [
            "500",
            "800",
            "0 0 10px rgba(255, 42, 109, 0.4)",
            "0 0 25px rgba(255, 42, 109, 0.6), 0 0 50px rgba(5, 217, 232, 0.3)",
            "2px solid rgba(5, 217, 232, 0.35)",
        ],
    )
}

/// Indigo and gold.
pub fn royal() -> ThemeRecord {
    ThemeRecord::from_values(
        "Royal",
        ["#4F46E5", "#CA8A04", "#EAB308", "#1E1B4B", "#312E81", "#EEF2FF", "#A5B4FC"],
        [
            "normal",
            "700",
            "0 10px 25px -5px rgba(79, 70, 229, 0.35)",
            "0 0 20px rgba(234, 179, 8, 0.35)",
            "1px solid rgba(234, 179, 8, 0.25)",
        ],
    )
}

/// Sky blue on deep sea.
pub fn ocean() -> ThemeRecord {
    ThemeRecord::from_values(
        "Ocean",
        ["#0EA5E9", "#06B6D4", "#22D3EE", "#082F49", "#0C4A6E", "#F0F9FF", "#7DD3FC"],
        [
            "normal",
            "700",
            "0 4px 6px -1px rgba(14, 165, 233, 0.3)",
            "0 0 20px rgba(14, 165, 233, 0.4)",
            "1px solid rgba(14, 165, 233, 0.2)",
        ],
    )
}

/// Blue on slate.
pub fn dark() -> ThemeRecord {
    ThemeRecord::from_values(
        "Dark",
        ["#3B82F6", "#8B5CF6", "#06B6D4", "#0F172A", "#1E293B", "#F1F5F9", "#94A3B8"],
        [
            "normal",
            "700",
            "0 4px 6px -1px rgba(0, 0, 0, 0.3)",
            "0 0 20px rgba(59, 130, 246, 0.3)",
            "1px solid rgba(148, 163, 184, 0.1)",
        ],
    )
}

/// Blue on near-white.
pub fn light() -> ThemeRecord {
    ThemeRecord::from_values(
        "Light",
        ["#2563EB", "#7C3AED", "#0891B2", "#F8FAFC", "#FFFFFF", "#0F172A", "#64748B"],
        [
            "normal",
            "600",
            "0 1px 3px 0 rgba(0, 0, 0, 0.1)",
            "0 0 15px rgba(37, 99, 235, 0.2)",
            "1px solid rgba(226, 232, 240, 1)",
        ],
    )
}

/// Magenta, cyan and yellow on black.
pub fn neon() -> ThemeRecord {
    ThemeRecord::from_values(
        "Neon",
        ["#FF00FF", "#00FFFF", "#FFFF00", "#000000", "#0A0A0A", "#FFFFFF", "#B3B3B3"],
        [
            "500",
            "800",
            "0 0 10px rgba(255, 0, 255, 0.5)",
            "0 0 30px rgba(255, 0, 255, 0.6), 0 0 60px rgba(0, 255, 255, 0.4)",
            "2px solid rgba(255, 0, 255, 0.3)",
        ],
    )
}

/// Orange and pink on zinc.
pub fn sunset() -> ThemeRecord {
    ThemeRecord::from_values(
        "Sunset",
        ["#F97316", "#EC4899", "#FBBF24", "#18181B", "#27272A", "#FAFAFA", "#A1A1AA"],
        [
            "normal",
            "700",
            "0 10px 25px -5px rgba(249, 115, 22, 0.3)",
            "0 0 25px rgba(249, 115, 22, 0.4)",
            "1px solid rgba(249, 115, 22, 0.2)",
        ],
    )
}

/// Emerald on deep green.
pub fn forest() -> ThemeRecord {
    ThemeRecord::from_values(
        "Forest",
        ["#10B981", "#14B8A6", "#84CC16", "#064E3B", "#065F46", "#ECFDF5", "#6EE7B7"],
        [
            "normal",
            "700",
            "0 4px 6px -1px rgba(16, 185, 129, 0.3)",
            "0 0 20px rgba(16, 185, 129, 0.4)",
            "1px solid rgba(16, 185, 129, 0.2)",
        ],
    )
}

/// Rose on dark wine.
pub fn cherry() -> ThemeRecord {
    ThemeRecord::from_values(
        "Cherry",
        ["#E11D48", "#F43F5E", "#FB7185", "#1C0A10", "#2A0F18", "#FFF1F2", "#FDA4AF"],
        [
            "normal",
            "700",
            "0 4px 12px rgba(225, 29, 72, 0.3)",
            "0 0 22px rgba(225, 29, 72, 0.45)",
            "1px solid rgba(244, 63, 94, 0.2)",
        ],
    )
}

/// Terminal green on black.
pub fn matrix() -> ThemeRecord {
    ThemeRecord::from_values(
        "Matrix",
        ["#00FF41", "#008F11", "#39FF14", "#000000", "#0D0208", "#00FF41", "#008F11"],
        [
            "500",
            "700",
            "0 0 10px rgba(0, 255, 65, 0.3)",
            "0 0 20px rgba(0, 255, 65, 0.6)",
            "1px solid rgba(0, 255, 65, 0.3)",
        ],
    )
}
