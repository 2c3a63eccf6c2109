use wordbook_types::Difficulty;

/// Word list categories, in display order. Only some have words yet.
pub const CATEGORIES: &[&str] = &[
    "Common Words",
    "Business",
    "Technology",
    "Science",
    "Arts",
    "Nature",
];

/// Resolve a typed category name: exact match first, then a case-insensitive prefix
pub fn find_category(name: &str) -> Option<&'static str> {
    let wanted = name.trim().to_ascii_lowercase();
    if wanted.is_empty() {
        return None;
    }
    CATEGORIES
        .iter()
        .find(|category| category.to_ascii_lowercase() == wanted)
        .or_else(|| {
            CATEGORIES
                .iter()
                .find(|category| category.to_ascii_lowercase().starts_with(&wanted))
        })
        .copied()
}

/// Words of a category at a level; empty for categories without a list
pub fn category_words(category: &str, difficulty: Difficulty) -> &'static [&'static str] {
    match (category, difficulty) {
        ("Common Words", Difficulty::Beginner) => &["happy", "sad", "good", "bad", "beautiful"],
        ("Common Words", Difficulty::Intermediate) => {
            &["jubilant", "melancholy", "excellent", "terrible", "gorgeous"]
        }
        ("Common Words", Difficulty::Advanced) => {
            &["euphoric", "despondent", "exemplary", "atrocious", "resplendent"]
        }
        ("Business", Difficulty::Beginner) => &["money", "work", "team", "plan", "goal"],
        ("Business", Difficulty::Intermediate) => {
            &["strategy", "innovation", "market", "finance", "leadership"]
        }
        ("Business", Difficulty::Advanced) => &[
            "acquisition",
            "diversification",
            "paradigm",
            "synergy",
            "optimization",
        ],
        _ => &[],
    }
}
