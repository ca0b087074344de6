/*!
 * English to German musical glossary.
 *
 * Two static tables help a translator keep terminology consistent:
 * - single terms (`TERM_GLOSSARY`)
 * - recurring description openers (`PHRASE_GLOSSARY`)
 *
 * The tables are reference material only. Nothing in the crate substitutes
 * them into text; `entries_in` merely reports which entries occur.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A fixed English to German pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// English source term
    pub english: &'static str,
    /// German equivalent
    pub german: &'static str,
}

const fn entry(english: &'static str, german: &'static str) -> GlossaryEntry {
    GlossaryEntry { english, german }
}

/// Musical terms, descriptive verbs and mood adjectives
pub static TERM_GLOSSARY: [GlossaryEntry; 23] = [
    // Basic terms
    entry("progression", "Progression"),
    entry("chord", "Akkord"),
    entry("tonic", "Tonika"),
    entry("dominant", "Dominante"),
    entry("subdominant", "Subdominante"),
    entry("resolution", "Auflösung"),
    entry("tension", "Spannung"),
    entry("cadence", "Kadenz"),
    entry("voice leading", "Stimmführung"),
    // Descriptive terms
    entry("creates", "Erzeugt"),
    entry("provides", "Bietet"),
    entry("moves", "Bewegt sich"),
    entry("establishes", "Etabliert"),
    entry("adds", "Fügt hinzu"),
    entry("descends", "Steigt ab"),
    entry("ascends", "Steigt auf"),
    // Character/mood
    entry("dramatic", "dramatisch"),
    entry("melancholic", "melancholisch"),
    entry("emotional", "emotional"),
    entry("bright", "hell"),
    entry("dark", "dunkel"),
    entry("smooth", "glatt/fließend"),
    entry("powerful", "kraftvoll"),
];

/// Phrases that open many progression descriptions
pub static PHRASE_GLOSSARY: [GlossaryEntry; 8] = [
    entry("The most popular progression", "Die beliebteste Progression"),
    entry("The foundation of", "Die Grundlage von"),
    entry("Used in", "Verwendet in"),
    entry("Creates", "Erzeugt"),
    entry("Perfect for", "Perfekt für"),
    entry("Foundation of", "Grundlage von"),
    entry("Characteristic of", "Charakteristisch für"),
    entry("Common in", "Üblich in"),
];

// Whole-word, case-insensitive matchers, terms first, then phrases.
static MATCHERS: Lazy<Vec<(Regex, &'static GlossaryEntry)>> = Lazy::new(|| {
    TERM_GLOSSARY
        .iter()
        .chain(PHRASE_GLOSSARY.iter())
        .filter_map(|entry| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(entry.english));
            Regex::new(&pattern).ok().map(|re| (re, entry))
        })
        .collect()
});

/// Look up a single term, ignoring case
pub fn term(english: &str) -> Option<&'static str> {
    TERM_GLOSSARY
        .iter()
        .find(|e| e.english.eq_ignore_ascii_case(english.trim()))
        .map(|e| e.german)
}

/// Look up a phrase by exact English text
pub fn phrase(english: &str) -> Option<&'static str> {
    PHRASE_GLOSSARY
        .iter()
        .find(|e| e.english == english)
        .map(|e| e.german)
}

/// List glossary entries whose English side occurs in `text` as whole words.
///
/// Entries are returned in table order (terms before phrases). Pairs that only
/// differ in the case of the English side are reported once.
pub fn entries_in(text: &str) -> Vec<&'static GlossaryEntry> {
    let mut seen = HashSet::new();
    MATCHERS
        .iter()
        .filter(|(re, _)| re.is_match(text))
        .filter(|(_, e)| seen.insert((e.english.to_lowercase(), e.german)))
        .map(|(_, e)| *e)
        .collect()
}
