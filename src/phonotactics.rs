//! Well-formedness rules for words of a generated language.
//!
//! Each rule checks one constraint on sound sequences. A [`Phonotactics`]
//! chain runs them in order and reports the first one a word breaks, which
//! is what the answer key of the phonotactic exercise prints.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::phonology::Phonology;
use crate::utils::Result;

/// A broken phonotactic constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the rule that rejected the word
    pub rule: String,
    /// Human readable explanation
    pub detail: String,
}

impl Violation {
    fn new(rule: &str, detail: String) -> Self {
        Violation {
            rule: rule.to_string(),
            detail,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.detail)
    }
}

/// Trait for a single phonotactic constraint
pub trait PhonotacticRule: Send + Sync + fmt::Debug {
    /// Check `word`, returning the violation if it breaks this rule
    fn check(&self, word: &str) -> Option<Violation>;

    /// Get the name of this rule
    fn name(&self) -> &str;

    /// Check if this rule applies to a given word
    fn applies_to(&self, _word: &str) -> bool {
        true
    }
}

/// Split a word into its stem and its word-final nasal suffix, if any
fn split_nasal<'a>(phonology: &Phonology, word: &'a str) -> (&'a str, Option<&'a str>) {
    for suffix in phonology.nasal_suffixes() {
        if let Some(stem) = word.strip_suffix(suffix) {
            return (stem, Some(&word[stem.len()..]));
        }
    }
    (word, None)
}

/// Every letter must come from the sound inventory
#[derive(Debug, Clone)]
pub struct InventoryRule {
    letters: Vec<char>,
}

impl InventoryRule {
    pub fn new(phonology: &Phonology) -> Self {
        let mut letters: Vec<char> = phonology
            .vowels()
            .iter()
            .chain(phonology.consonants())
            .copied()
            .collect();
        letters.extend(phonology.nasal_suffixes().iter().flat_map(|s| s.chars()));
        letters.sort_unstable();
        letters.dedup();
        InventoryRule { letters }
    }
}

impl PhonotacticRule for InventoryRule {
    fn check(&self, word: &str) -> Option<Violation> {
        word.chars()
            .find(|c| !self.letters.contains(c))
            .map(|c| Violation::new(self.name(), format!("'{}' is not a sound of the language", c)))
    }

    fn name(&self) -> &str {
        "inventory"
    }
}

/// Words start with a vowel
#[derive(Debug, Clone)]
pub struct VowelInitialRule {
    phonology: Phonology,
}

impl VowelInitialRule {
    pub fn new(phonology: &Phonology) -> Self {
        VowelInitialRule {
            phonology: phonology.clone(),
        }
    }
}

impl PhonotacticRule for VowelInitialRule {
    fn check(&self, word: &str) -> Option<Violation> {
        match word.chars().next() {
            Some(c) if self.phonology.is_vowel(c) => None,
            Some(c) => Some(Violation::new(self.name(), format!("starts with '{}'", c))),
            None => Some(Violation::new(self.name(), "empty word".to_string())),
        }
    }

    fn name(&self) -> &str {
        "vowel-initial"
    }
}

/// Nasals only occur at the very end of a word
#[derive(Debug, Clone)]
pub struct FinalNasalRule {
    phonology: Phonology,
    nasal_letters: Vec<char>,
}

impl FinalNasalRule {
    pub fn new(phonology: &Phonology) -> Self {
        let nasal_letters = phonology
            .nasal_suffixes()
            .iter()
            .filter_map(|s| s.chars().next())
            .collect();
        FinalNasalRule {
            phonology: phonology.clone(),
            nasal_letters,
        }
    }
}

impl PhonotacticRule for FinalNasalRule {
    fn check(&self, word: &str) -> Option<Violation> {
        let (stem, _) = split_nasal(&self.phonology, word);
        stem.chars()
            .find(|c| self.nasal_letters.contains(c))
            .map(|c| Violation::new(self.name(), format!("nasal '{}' is not word-final", c)))
    }

    fn name(&self) -> &str {
        "final-nasal"
    }
}

/// Stems are a chain of open syllables: no clusters and no codas
#[derive(Debug, Clone)]
pub struct OpenSyllableRule {
    phonology: Phonology,
    shape: Regex,
}

impl OpenSyllableRule {
    pub fn new(phonology: &Phonology) -> Result<Self> {
        let class = |chars: &[char]| {
            chars
                .iter()
                .map(|c| regex::escape(&c.to_string()))
                .collect::<String>()
        };
        let vowels = class(phonology.vowels());
        let consonants = class(phonology.consonants());
        let shape = Regex::new(&format!(
            "^[{c}]?[{v}](?:[{c}][{v}])*$",
            c = consonants,
            v = vowels
        ))?;
        Ok(OpenSyllableRule {
            phonology: phonology.clone(),
            shape,
        })
    }
}

impl PhonotacticRule for OpenSyllableRule {
    fn check(&self, word: &str) -> Option<Violation> {
        let (stem, _) = split_nasal(&self.phonology, word);
        if self.shape.is_match(stem) {
            None
        } else {
            Some(Violation::new(
                self.name(),
                format!("'{}' is not a sequence of open syllables", stem),
            ))
        }
    }

    fn name(&self) -> &str {
        "open-syllables"
    }
}

/// A final nasal agrees in place with the consonant before the last vowel
#[derive(Debug, Clone)]
pub struct AssimilationRule {
    phonology: Phonology,
}

impl AssimilationRule {
    pub fn new(phonology: &Phonology) -> Self {
        AssimilationRule {
            phonology: phonology.clone(),
        }
    }
}

impl PhonotacticRule for AssimilationRule {
    fn check(&self, word: &str) -> Option<Violation> {
        let (stem, nasal) = split_nasal(&self.phonology, word);
        nasal?;
        let expected = self.phonology.append_nasal(stem);
        if expected == word {
            None
        } else {
            Some(Violation::new(
                self.name(),
                format!("'{}' should end in '{}'", stem, &expected[stem.len()..]),
            ))
        }
    }

    fn name(&self) -> &str {
        "assimilation"
    }

    fn applies_to(&self, word: &str) -> bool {
        split_nasal(&self.phonology, word).1.is_some()
    }
}

/// An ordered chain of phonotactic rules
#[derive(Debug)]
pub struct Phonotactics {
    rules: Vec<Box<dyn PhonotacticRule>>,
}

impl Phonotactics {
    /// Create an empty chain that accepts every word
    pub fn new() -> Self {
        Phonotactics { rules: Vec::new() }
    }

    /// The rules every coined word obeys
    pub fn standard(phonology: &Phonology) -> Result<Self> {
        Ok(Phonotactics::new()
            .add(InventoryRule::new(phonology))
            .add(VowelInitialRule::new(phonology))
            .add(FinalNasalRule::new(phonology))
            .add(OpenSyllableRule::new(phonology)?)
            .add(AssimilationRule::new(phonology)))
    }

    /// Add another rule to the end of the chain
    pub fn add<P: PhonotacticRule + 'static>(mut self, rule: P) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules, in the order they run
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// The first rule `word` breaks
    pub fn check(&self, word: &str) -> Option<Violation> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(word))
            .find_map(|rule| rule.check(word))
    }

    /// Every rule `word` breaks
    pub fn violations(&self, word: &str) -> Vec<Violation> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(word))
            .filter_map(|rule| rule.check(word))
            .collect()
    }

    pub fn is_well_formed(&self, word: &str) -> bool {
        self.check(word).is_none()
    }
}

impl Default for Phonotactics {
    fn default() -> Self {
        Phonotactics::new()
    }
}
