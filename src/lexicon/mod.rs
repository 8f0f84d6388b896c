//! Indicator lexicons.
//!
//! A [`Lexicon`] is built once at startup ([`Lexicon::builtin`]) and shared read-only
//! (`Arc<Lexicon>`) by every request. Nothing mutates it after construction.
//!
//! Phrases are stored lowercased; matching lowercases the text, so all lookups
//! are case-insensitive.

mod tables;


use std::collections::{HashMap, HashSet};

/// Version tag of the built-in phrase tables (reported by `/ready`).
pub const LEXICON_VERSION: &str = "2024.06";

/// Phrase categories used by the signal extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Physically impossible or absurd claims. Short-circuits to Fake.
    ObviouslyFake,
    /// Promotional or fictional framing. Short-circuits to Fake.
    Satirical,
    /// Sensationalist wording typical of fabricated stories.
    FakeNews,
    /// Attribution and sourcing vocabulary of regular reporting.
    LegitimateNews,
    Military,
    Business,
    CredibilityPositive,
    CredibilityNegative,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::ObviouslyFake,
        Category::Satirical,
        Category::FakeNews,
        Category::LegitimateNews,
        Category::Military,
        Category::Business,
        Category::CredibilityPositive,
        Category::CredibilityNegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ObviouslyFake => "obviously_fake",
            Category::Satirical => "satirical",
            Category::FakeNews => "fake_news",
            Category::LegitimateNews => "legitimate_news",
            Category::Military => "military",
            Category::Business => "business",
            Category::CredibilityPositive => "credibility_positive",
            Category::CredibilityNegative => "credibility_negative",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator phrases for one country.
#[derive(Debug, Clone)]
pub struct CountryIndicators {
    pub country: String,
    pub phrases: Vec<String>,
}

/// Immutable phrase tables shared by all requests.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: String,
    categories: HashMap<Category, Vec<String>>,
    countries: Vec<CountryIndicators>,
    tld_countries: HashMap<String, String>,
    trusted_outlets: Vec<String>,
    major_country_tokens: Vec<String>,
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// Builds the built-in English lexicon.
    pub fn builtin() -> Self {
        let mut categories = HashMap::with_capacity(Category::ALL.len());
        categories.insert(Category::ObviouslyFake, obviously_fake_phrases());
        categories.insert(Category::Satirical, lowered(tables::SATIRICAL));
        categories.insert(Category::FakeNews, lowered(tables::FAKE_NEWS));
        categories.insert(Category::LegitimateNews, lowered(tables::LEGITIMATE_NEWS));
        categories.insert(Category::Military, lowered(tables::MILITARY));
        categories.insert(Category::Business, lowered(tables::BUSINESS));
        categories.insert(
            Category::CredibilityPositive,
            lowered(tables::CREDIBILITY_POSITIVE),
        );
        categories.insert(
            Category::CredibilityNegative,
            lowered(tables::CREDIBILITY_NEGATIVE),
        );

        let countries = tables::COUNTRY_PRIORITY
            .iter()
            .map(|(country, phrases)| CountryIndicators {
                country: (*country).to_string(),
                phrases: lowered(phrases),
            })
            .collect();

        let tld_countries = tables::TLD_COUNTRIES
            .iter()
            .map(|(tld, country)| ((*tld).to_string(), (*country).to_string()))
            .collect();

        Self {
            version: LEXICON_VERSION.to_string(),
            categories,
            countries,
            tld_countries,
            trusted_outlets: lowered(tables::TRUSTED_OUTLETS),
            major_country_tokens: lowered(tables::MAJOR_COUNTRY_TOKENS),
            stopwords: tables::STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Phrases of `category` in declared order.
    pub fn phrases(&self, category: Category) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Country indicator lists in priority order.
    pub fn country_priority(&self) -> &[CountryIndicators] {
        &self.countries
    }

    /// Country for a top-level domain suffix (`"in"` → `"India"`).
    pub fn country_for_tld(&self, tld: &str) -> Option<&str> {
        self.tld_countries
            .get(&tld.to_lowercase())
            .map(String::as_str)
    }

    pub fn trusted_outlets(&self) -> &[String] {
        &self.trusted_outlets
    }

    pub fn major_country_tokens(&self) -> &[String] {
        &self.major_country_tokens
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lowered(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_lowercase()).collect()
}

fn obviously_fake_phrases() -> Vec<String> {
    let mut phrases = lowered(tables::OBVIOUSLY_FAKE);
    let sectors = tables::ABSURD_SECTORS;
    let reactions = tables::ABSURD_REACTIONS;

    let total = sectors.len() * tables::ABSURD_SECTOR_NOUNS.len();
    phrases.reserve(total);
    for n in 0..total {
        let sector = sectors[n % sectors.len()];
        let noun = tables::ABSURD_SECTOR_NOUNS[n / sectors.len()];
        let reaction = reactions[n % reactions.len()];
        phrases.push(format!("{sector} {noun} {reaction}"));
    }

    phrases
}
