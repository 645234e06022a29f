use rand::Rng;
use tracing::trace;

use crate::utils::{choose, Result};

/// Vowel inventory, in the order pronouns are assigned to it
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Consonant inventory (stops only)
pub const CONSONANTS: [char; 6] = ['p', 'b', 't', 'd', 'k', 'g'];

/// Assimilated nasal for each preceding consonant
pub const NASALS: [(char, &str); 4] = [('k', "ng"), ('g', "ng"), ('p', "m"), ('b', "m")];

/// Nasal used after any consonant missing from [`NASALS`]
pub const DEFAULT_NASAL: &str = "n";

/// Smallest and largest number of CV syllables following a noun's initial vowel
pub const NOUN_SYLLABLES: (usize, usize) = (1, 3);

/// The sound inventory of a generated language together with the word
/// shapes it allows.
///
/// Nouns are `V(CV){1,3}`, verbs are a noun followed by a nasal that agrees
/// in place of articulation with the last consonant of the stem.
#[derive(Debug, Clone)]
pub struct Phonology {
    vowels: Vec<char>,
    consonants: Vec<char>,
    nasals: Vec<(char, String)>,
    default_nasal: String,
}

impl Default for Phonology {
    fn default() -> Self {
        Phonology {
            vowels: VOWELS.to_vec(),
            consonants: CONSONANTS.to_vec(),
            nasals: NASALS
                .iter()
                .map(|(consonant, nasal)| (*consonant, nasal.to_string()))
                .collect(),
            default_nasal: DEFAULT_NASAL.to_string(),
        }
    }
}

impl Phonology {
    /// Get the vowel inventory
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Get the consonant inventory
    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    /// The nasal that follows `consonant`, or the default nasal
    pub fn nasal_for(&self, consonant: char) -> &str {
        self.nasals
            .iter()
            .find(|(c, _)| *c == consonant)
            .map(|(_, nasal)| nasal.as_str())
            .unwrap_or(self.default_nasal.as_str())
    }

    /// Every distinct nasal suffix, longest first
    pub fn nasal_suffixes(&self) -> Vec<&str> {
        let mut suffixes: Vec<&str> = self.nasals.iter().map(|(_, n)| n.as_str()).collect();
        suffixes.push(self.default_nasal.as_str());
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        suffixes.dedup();
        suffixes
    }

    pub fn random_vowel<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<char> {
        choose(rng, &self.vowels, "vowel inventory").copied()
    }

    pub fn random_consonant<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<char> {
        choose(rng, &self.consonants, "consonant inventory").copied()
    }

    /// One consonant followed by one vowel
    pub fn cv_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        Ok([self.random_consonant(rng)?, self.random_vowel(rng)?]
            .iter()
            .collect())
    }

    /// A closed syllable. Never legal inside a word; only used to build
    /// malformed quiz candidates.
    pub fn cvc_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        Ok([
            self.random_consonant(rng)?,
            self.random_vowel(rng)?,
            self.random_consonant(rng)?,
        ]
        .iter()
        .collect())
    }

    /// Coin a noun: a vowel followed by one to three CV syllables
    pub fn coin_noun<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let mut word = self.random_vowel(rng)?.to_string();
        let syllables = rng.gen_range(NOUN_SYLLABLES.0..=NOUN_SYLLABLES.1);
        for _ in 0..syllables {
            word.push_str(&self.cv_syllable(rng)?);
        }
        trace!(%word, "coined noun");
        Ok(word)
    }

    /// Coin a verb: a noun stem with an assimilated nasal suffix
    pub fn coin_verb<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let word = self.append_nasal(&self.coin_noun(rng)?);
        trace!(%word, "coined verb");
        Ok(word)
    }

    /// Append the nasal selected by the second-to-last character of `word`.
    ///
    /// For a `...CV` stem that character is the final consonant. Words shorter
    /// than two characters take the default nasal.
    pub fn append_nasal(&self, word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        let nasal = match chars.len().checked_sub(2) {
            Some(idx) => self.nasal_for(chars[idx]),
            None => self.default_nasal.as_str(),
        };
        format!("{}{}", word, nasal)
    }

    /// "an" before a vowel-initial gloss, "a" otherwise
    pub fn indefinite_article_for(&self, word: &str) -> &'static str {
        match word.chars().next() {
            Some(c) if self.is_vowel(c) => "an",
            _ => "a",
        }
    }
}
