use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::phonology::Phonology;
use crate::utils::{choose, Result};

/// Nominative and objective forms of every pronoun. There is no third person
/// singular, so verbs never need a second agreement pattern.
pub const PRONOUN_PAIRS: [(&str, &str); 5] = [
    ("I", "me"),
    ("we", "us"),
    ("they", "them"),
    ("you", "you"),
    ("you all", "you all"),
];

/// Glosses of the nouns every language gets
pub const ACTOR_GLOSSES: [&str; 9] = [
    "cat", "dog", "fox", "bird", "man", "woman", "elder", "friend", "enemy",
];

/// Glosses of the verbs every language gets
pub const ACTION_GLOSSES: [&str; 7] = ["like", "hate", "love", "bite", "see", "hurt", "hear"];

/// A coined word and its English meaning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    pub word: String,
    pub gloss: String,
}

/// Word-to-gloss mapping that remembers insertion order.
///
/// Inserting a word that is already present replaces its gloss in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon::default()
    }

    /// Add or replace the gloss of `word`
    pub fn insert(&mut self, word: &str, gloss: &str) {
        match self.entries.iter_mut().find(|entry| entry.word == word) {
            Some(entry) => entry.gloss = gloss.to_string(),
            None => self.entries.push(LexiconEntry {
                word: word.to_string(),
                gloss: gloss.to_string(),
            }),
        }
    }

    /// Look up the gloss of a coined word
    pub fn gloss_of(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.gloss.as_str())
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.gloss_of(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    /// Union of two lexicons; entries of `other` follow those of `self`
    pub fn merged(&self, other: &Lexicon) -> Lexicon {
        let mut merged = self.clone();
        for entry in other.iter() {
            merged.insert(&entry.word, &entry.gloss);
        }
        merged
    }

    /// Pick one entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R, what: &str) -> Result<&LexiconEntry> {
        choose(rng, &self.entries, what)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for (word, gloss) in iter {
            lexicon.insert(word, gloss);
        }
        lexicon
    }
}

/// Mapping from nominative pronoun glosses to their objective forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounCases {
    pairs: Vec<(String, String)>,
}

impl Default for PronounCases {
    fn default() -> Self {
        PronounCases {
            pairs: PRONOUN_PAIRS
                .iter()
                .map(|(nom, obj)| (nom.to_string(), obj.to_string()))
                .collect(),
        }
    }
}

impl PronounCases {
    /// Whether `gloss` is the nominative form of a pronoun
    pub fn is_nominative(&self, gloss: &str) -> bool {
        self.pairs.iter().any(|(nom, _)| nom == gloss)
    }

    pub fn objective_of(&self, gloss: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(nom, _)| nom == gloss)
            .map(|(_, obj)| obj.as_str())
    }

    /// The objective form for pronouns, `gloss` itself for anything else
    pub fn objective_or_same<'a>(&'a self, gloss: &'a str) -> &'a str {
        self.objective_of(gloss).unwrap_or(gloss)
    }

    pub fn nominatives(&self) -> Vec<&str> {
        self.pairs.iter().map(|(nom, _)| nom.as_str()).collect()
    }
}

/// Builds the glossed word lists of a new language
pub struct LexiconBuilder<'a> {
    phonology: &'a Phonology,
    actor_glosses: Vec<String>,
    action_glosses: Vec<String>,
    pronoun_cases: &'a PronounCases,
}

impl<'a> LexiconBuilder<'a> {
    /// Create a builder with the built-in noun and verb glosses
    pub fn new(phonology: &'a Phonology, pronoun_cases: &'a PronounCases) -> Self {
        LexiconBuilder {
            phonology,
            actor_glosses: ACTOR_GLOSSES.iter().map(|g| g.to_string()).collect(),
            action_glosses: ACTION_GLOSSES.iter().map(|g| g.to_string()).collect(),
            pronoun_cases,
        }
    }

    /// One coined noun per actor gloss, glossed with its indefinite article
    pub fn nouns<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Lexicon> {
        let mut nouns = Lexicon::new();
        for actor in &self.actor_glosses {
            let word = self.phonology.coin_noun(rng)?;
            let gloss = format!("{} {}", self.phonology.indefinite_article_for(actor), actor);
            nouns.insert(&word, &gloss);
        }
        debug!(count = nouns.len(), "coined nouns");
        Ok(nouns)
    }

    /// Shuffled nominative pronouns, one per vowel in inventory order
    pub fn pronouns<R: Rng + ?Sized>(&self, rng: &mut R) -> Lexicon {
        let mut glosses = self.pronoun_cases.nominatives();
        glosses.shuffle(rng);

        let mut pronouns = Lexicon::new();
        for (vowel, gloss) in self.phonology.vowels().iter().zip(glosses) {
            pronouns.insert(&vowel.to_string(), gloss);
        }
        debug!(count = pronouns.len(), "assigned pronouns");
        pronouns
    }

    /// One coined verb per action gloss
    pub fn verbs<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Lexicon> {
        let mut verbs = Lexicon::new();
        for action in &self.action_glosses {
            let word = self.phonology.coin_verb(rng)?;
            verbs.insert(&word, action);
        }
        debug!(count = verbs.len(), "coined verbs");
        Ok(verbs)
    }
}
