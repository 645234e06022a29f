//! Conlang-Gen procedurally generates toy languages for language-acquisition
//! practice.
//!
//! Each language gets a small sound system, a lexicon of coined nouns,
//! pronouns and verbs with English glosses, and a verb-final sentence
//! grammar. From a language the crate builds glossed example sentences and
//! two learner exercises: spotting the ungrammatical sentence, and judging
//! whether a word could belong to the language.
//!
//! # Example
//!
//! ```rust
//! use conlang_gen::{GlossedLanguage, Phonology};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let language = GlossedLanguage::generate(Phonology::default(), &mut rng).unwrap();
//!
//! let sentence = language.sentence(&mut rng).unwrap();
//! assert!(sentence.text.ends_with('.'));
//! assert!(sentence.gloss.ends_with('.'));
//! ```

pub mod exercises;
pub mod language;
pub mod lexicon;
pub mod phonology;
pub mod phonotactics;
pub mod report;
pub mod utils;

pub use language::{GlossedLanguage, Sentence};
pub use lexicon::{Lexicon, LexiconEntry, PronounCases};
pub use phonology::Phonology;
pub use phonotactics::{Phonotactics, Violation};
pub use report::{Report, ReportConfig};
pub use utils::{LanguageError, Result};
