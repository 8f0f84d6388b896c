//! Built-in phrase tables.
//!
//! Counting categories keep their declared order and any repeated entries: every
//! listed phrase that occurs is counted, so a repeated phrase counts twice.

pub(crate) const OBVIOUSLY_FAKE: &[&str] = &[
    "made entirely of",
    "discovered a planet made of",
    "found a planet made of",
    "cheese planet",
    "chocolate planet",
    "candy planet",
    "ice cream planet",
    "unicorn",
    "dragon",
    "flying pig",
    "talking animal",
    "magic",
    "time travel",
    "teleportation",
    "invisible",
    "superhero",
    "aliens living in",
    "bigfoot found",
    "loch ness monster",
    "flying saucer",
    "ufo crash",
    "alien invasion",
    "zombie",
    "vampire",
    "werewolf",
    "ghost",
    "haunted",
    "miracle cure",
    "magic potion",
    "fountain of youth",
    "world's first",
    "never before seen",
    "impossible",
    "defies physics",
    "breaks laws of",
    "scientists baffled",
    "impossible discovery",
    "unbelievable find",
    "shocking revelation",
    "spacecheddar",
    "cheesex",
    "space cheese",
    "cheese mission",
    "publicity stunt",
    "promote a new",
    "launching soon",
    "partnership with",
    "new venture",
    "™",
    "©",
    "®",
    "skeptics argue",
    "critics claim",
    "some say",
    "according to unnamed sources",
    "anonymous sources claim",
    "insiders reveal",
    "exclusive scoop",
    "breaking news",
    "you won't believe what",
    "shocking truth about",
    "they don't want you to know",
    "hidden agenda",
    "secret project",
    "classified information",
    "leaked documents",
    "confidential sources",
    "underground movement",
    "conspiracy theory",
    "cover-up",
    "scandal",
    "controversy",
    "exposed",
    "revealed",
    "uncovered",
    "shocking discovery",
    "amazing find",
    "incredible breakthrough",
    "revolutionary",
    "game-changing",
    "mind-blowing",
    "earth-shattering",
    "world-changing",
    "paradigm shift",
    "new era",
    "future of",
    "next generation",
    "cutting-edge",
    "groundbreaking",
    "innovative",
    "disruptive",
    "transformative",
    "unprecedented",
    "historic",
    "first of its kind",
    "defies logic",
    "breaks all rules",
    "challenges conventional wisdom",
    "experts baffled",
    "scientists stunned",
    "researchers amazed",
    "professionals shocked",
    "industry leaders surprised",
    "authorities confused",
    "government officials puzzled",
    "military experts bewildered",
    "intelligence agencies mystified",
    "security analysts perplexed",
    "defense experts astonished",
    "space agency officials amazed",
    "nasa scientists shocked",
    "esa researchers stunned",
    "roscosmos experts baffled",
    "cnsa officials puzzled",
    "isro scientists confused",
    "jaxa researchers bewildered",
    "space industry leaders surprised",
    "aerospace experts amazed",
    "aviation authorities shocked",
    "defense contractors stunned",
    "military contractors baffled",
    "security contractors puzzled",
    "intelligence contractors confused",
    "government contractors bewildered",
    "space contractors surprised",
    "aerospace contractors amazed",
    "aviation contractors shocked",
];

/// Sector phrasings ("<sector> <noun> <reaction>") that round out the
/// obviously-fake table. The n-th phrase pairs sector `n % 7`, noun `n / 7` and
/// reaction `n % 8`.
pub(crate) const ABSURD_SECTORS: &[&str] = &[
    "defense",
    "security",
    "intelligence",
    "government",
    "space",
    "aerospace",
    "aviation",
];

pub(crate) const ABSURD_SECTOR_NOUNS: &[&str] = &[
    "industry",
    "sector",
    "market",
    "community",
    "world",
    "field",
    "area",
    "domain",
    "sphere",
    "realm",
    "world",
];

pub(crate) const ABSURD_REACTIONS: &[&str] = &[
    "stunned",
    "baffled",
    "puzzled",
    "confused",
    "bewildered",
    "surprised",
    "amazed",
    "shocked",
];

pub(crate) const SATIRICAL: &[&str] = &[
    "™",
    "©",
    "®",
    "brand",
    "venture",
    "partnership",
    "publicity stunt",
    "promote",
    "launching soon",
    "skeptics argue",
    "critics claim",
    "some say",
    "according to unnamed sources",
    "anonymous sources claim",
    "insiders reveal",
    "exclusive scoop",
    "breaking news",
    "you won't believe what",
    "shocking truth about",
    "they don't want you to know",
    "hidden agenda",
    "secret project",
    "classified information",
    "leaked documents",
    "confidential sources",
    "underground movement",
    "conspiracy theory",
    "cover-up",
    "scandal",
    "controversy",
    "exposed",
    "revealed",
    "uncovered",
    "shocking discovery",
    "amazing find",
    "incredible breakthrough",
    "revolutionary",
    "game-changing",
    "mind-blowing",
    "earth-shattering",
    "world-changing",
    "paradigm shift",
    "new era",
    "future of",
    "next generation",
    "cutting-edge",
    "groundbreaking",
    "innovative",
    "revolutionary",
    "disruptive",
    "transformative",
    "unprecedented",
    "historic",
    "first of its kind",
    "never before seen",
    "impossible",
    "defies logic",
    "breaks all rules",
    "challenges conventional wisdom",
];

pub(crate) const FAKE_NEWS: &[&str] = &[
    "clickbait",
    "viral",
    "shocking",
    "you won't believe",
    "mind-blowing",
    "unbelievable",
    "exclusive",
    "breaking",
    "urgent",
    "just in",
    "must read",
    "you need to know",
    "secret",
    "hidden truth",
    "they don't want you to know",
    "conspiracy",
    "cover-up",
    "exposed",
    "leaked",
    "scandal",
    "controversy",
];

pub(crate) const LEGITIMATE_NEWS: &[&str] = &[
    "reported",
    "announced",
    "confirmed",
    "official",
    "statement",
    "press release",
    "according to",
    "sources",
    "witnesses",
    "investigation",
    "research",
    "study",
    "analysis",
    "data",
    "statistics",
    "survey",
    "poll",
    "interview",
    "expert",
    "authority",
    "government",
    "ministry",
    "department",
    "published",
    "released",
    "confirmed by",
    "verified",
    "official statement",
    "press conference",
    "announcement",
    "report",
    "findings",
    "results",
    "data shows",
    "according to experts",
    "research shows",
    "study reveals",
    "analysis indicates",
];

pub(crate) const MILITARY: &[&str] = &[
    "operation",
    "military",
    "defense",
    "security",
    "intelligence",
    "army",
    "navy",
    "air force",
    "border",
    "attack",
    "defense",
    "soldier",
    "troop",
    "combat",
    "mission",
    "strategic",
    "tactical",
    "line of control",
    "loc",
    "ceasefire",
    "violation",
    "retaliation",
];

pub(crate) const BUSINESS: &[&str] = &[
    "trade",
    "agreement",
    "deal",
    "economy",
    "market",
    "business",
    "commerce",
    "export",
    "import",
    "tariff",
    "negotiation",
    "partnership",
    "investment",
    "finance",
    "economic",
    "commercial",
    "treaty",
];

pub(crate) const CREDIBILITY_POSITIVE: &[&str] = &[
    "verified",
    "confirmed",
    "official",
    "reliable",
    "trusted",
    "credible",
    "source",
    "evidence",
    "fact",
    "report",
    "investigation",
    "expert",
    "authority",
    "statement",
    "announcement",
    "press",
    "release",
    "operation",
    "military",
    "defense",
    "security",
    "intelligence",
    "government",
    "ministry",
    "official",
    "spokesperson",
    "confirmed",
    "authenticated",
    "verified",
    "reliable",
    "trusted",
    "credible",
];

pub(crate) const CREDIBILITY_NEGATIVE: &[&str] = &[
    "unverified",
    "rumor",
    "alleged",
    "claimed",
    "supposedly",
    "reportedly",
    "anonymous",
    "unconfirmed",
    "speculation",
    "conspiracy",
    "hoax",
    "fake",
    "misleading",
    "deceptive",
    "false",
    "unreliable",
    "viral",
    "social media",
    "unverified source",
    "anonymous source",
    "unconfirmed reports",
];

/// Country indicator phrases in declared priority order. The first country with
/// any phrase in the text wins, so the order decides ties.
pub(crate) const COUNTRY_PRIORITY: &[(&str, &[&str])] = &[
    (
        "India",
        &[
            "indian",
            "india",
            "delhi",
            "mumbai",
            "bangalore",
            "kolkata",
            "chennai",
            "hyderabad",
        ],
    ),
    (
        "United States",
        &[
            "american",
            "us",
            "usa",
            "united states",
            "washington",
            "new york",
            "california",
            "texas",
        ],
    ),
    (
        "United Kingdom",
        &[
            "british",
            "uk",
            "united kingdom",
            "london",
            "england",
            "scotland",
            "wales",
        ],
    ),
    (
        "China",
        &["chinese", "china", "beijing", "shanghai", "hong kong"],
    ),
    ("Russia", &["russian", "russia", "moscow", "kremlin"]),
    ("Japan", &["japanese", "japan", "tokyo", "osaka"]),
    (
        "Australia",
        &["australian", "australia", "sydney", "melbourne"],
    ),
    ("Canada", &["canadian", "canada", "toronto", "vancouver"]),
    ("Germany", &["german", "germany", "berlin", "munich"]),
    ("France", &["french", "france", "paris", "lyon"]),
];

pub(crate) const TLD_COUNTRIES: &[(&str, &str)] = &[
    ("in", "India"),
    ("us", "United States"),
    ("uk", "United Kingdom"),
    ("cn", "China"),
    ("ru", "Russia"),
    ("jp", "Japan"),
    ("au", "Australia"),
    ("ca", "Canada"),
    ("de", "Germany"),
    ("fr", "France"),
];

pub(crate) const TRUSTED_OUTLETS: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "aljazeera.com",
    "timesofindia.indiatimes.com",
    "indianexpress.com",
    "thehindu.com",
    "ndtv.com",
    "hindustantimes.com",
    "zeenews.india.com",
    "news18.com",
    "indiatoday.in",
    "firstpost.com",
    "thequint.com",
    "scroll.in",
];

pub(crate) const MAJOR_COUNTRY_TOKENS: &[&str] = &[
    "u.s.",
    "u.k.",
    "united states",
    "united kingdom",
    "britain",
];

pub(crate) const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as", "of",
];
