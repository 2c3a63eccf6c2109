use rand::Rng;
use wordbook_api::DefinitionFetcher;
use wordbook_types::Definition;

/// Total fetches before giving up
pub const MAX_ATTEMPTS: u32 = 5;

/// Words the word of the day is drawn from
pub const CURATED_WORDS: &[&str] = &[
    "serendipity",
    "ephemeral",
    "mellifluous",
    "ethereal",
    "luminous",
    "eloquent",
    "ineffable",
    "epiphany",
    "sonder",
    "petrichor",
    "solitude",
    "zenith",
    "quintessential",
    "aesthetic",
    "labyrinth",
    "resilience",
    "panacea",
    "bucolic",
    "halcyon",
];

/// Picks a random word and fetches it, re-picking on failure
pub struct WordOfDaySelector<'a> {
    words: &'a [&'a str],
    max_attempts: u32,
}

impl Default for WordOfDaySelector<'static> {
    fn default() -> Self {
        Self::new(CURATED_WORDS, MAX_ATTEMPTS)
    }
}

impl<'a> WordOfDaySelector<'a> {
    pub fn new(words: &'a [&'a str], max_attempts: u32) -> Self {
        Self {
            words,
            max_attempts,
        }
    }

    /// Sampling is with replacement, a failed word may come up again.
    /// `None` once every attempt failed; the failures are only logged.
    pub async fn pick<R: Rng + ?Sized>(
        &self,
        fetcher: &dyn DefinitionFetcher,
        rng: &mut R,
    ) -> Option<Definition> {
        if self.words.is_empty() {
            tracing::warn!("No words to pick a word of the day from");
            return None;
        }

        for attempt in 1..=self.max_attempts {
            let word = self.words[rng.gen_range(0..self.words.len())];
            match fetcher.fetch(word).await {
                Ok(definition) => {
                    tracing::info!("Word of the day: {} (attempt {})", word, attempt);
                    return Some(definition);
                }
                Err(e) => {
                    tracing::warn!(
                        "Word of the day attempt {}/{} for '{}' failed: {}",
                        attempt,
                        self.max_attempts,
                        word,
                        e
                    );
                }
            }
        }

        tracing::error!(
            "Error fetching word of the day: gave up after {} attempts",
            self.max_attempts
        );
        None
    }
}

/// [`WordOfDaySelector::pick`] over [`CURATED_WORDS`] with [`MAX_ATTEMPTS`]
pub async fn pick_word_of_day<R: Rng + ?Sized>(
    fetcher: &dyn DefinitionFetcher,
    rng: &mut R,
) -> Option<Definition> {
    WordOfDaySelector::default().pick(fetcher, rng).await
}

/// Related words shown under a word of the day
pub fn related_words(word: &str) -> &'static [&'static str] {
    match word {
        "serendipity" => &["chance", "fortune", "luck", "destiny"],
        "ephemeral" => &["fleeting", "transient", "temporary", "brief"],
        "mellifluous" => &["melodious", "smooth", "sweet", "harmonious"],
        "ethereal" => &["celestial", "delicate", "heavenly", "light"],
        "luminous" => &["bright", "radiant", "shining", "glowing"],
        "eloquent" => &["articulate", "persuasive", "expressive", "fluent"],
        "ineffable" => &["indescribable", "unspeakable", "unutterable", "sublime"],
        "epiphany" => &["realization", "awakening", "discovery", "revelation"],
        "sonder" => &["realization", "awareness", "perspective", "reflection"],
        "petrichor" => &["earthy smell", "rain scent", "after rain", "fresh aroma"],
        "solitude" => &["seclusion", "isolation", "alone time", "quietness"],
        "zenith" => &["peak", "pinnacle", "apex", "summit"],
        "quintessential" => &["perfect example", "ideal", "ultimate", "classic"],
        "aesthetic" => &["artistic", "visual", "beautiful", "stylish"],
        "labyrinth" => &["maze", "complex", "network", "puzzle"],
        "resilience" => &["toughness", "endurance", "grit", "adaptability"],
        "panacea" => &["cure-all", "remedy", "solution", "elixir"],
        "bucolic" => &["pastoral", "rural", "country", "idyllic"],
        "halcyon" => &["peaceful", "calm", "serene", "tranquil"],
        _ => &[],
    }
}
