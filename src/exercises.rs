use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::language::GlossedLanguage;
use crate::phonotactics::{Phonotactics, Violation};
use crate::utils::Result;

/// Three sentences, exactly one of which is ungrammatical
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammaticalityItem {
    pub options: Vec<String>,
    /// Index into `options` of the ungrammatical sentence
    pub ungrammatical: usize,
}

/// How a phonotactic quiz candidate was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Verb,
    Noun,
    /// vowel + CVC + CV
    IllegalCoda,
    /// noun without its initial vowel
    ConsonantInitial,
    /// verb without its first two letters, plus a vowel after the nasal
    MedialNasal,
    /// noun without its first two letters, plus "wa"
    ForeignSound,
}

impl CandidateKind {
    /// Whether candidates of this kind are built to obey the phonotactics
    pub fn is_well_formed(&self) -> bool {
        matches!(self, CandidateKind::Verb | CandidateKind::Noun)
    }
}

/// A word the learner judges as possible or impossible in the language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonotacticItem {
    pub word: String,
    pub kind: CandidateKind,
    pub well_formed: bool,
    /// First rule the word breaks, if any
    pub violation: Option<Violation>,
}

/// Two grammatical sentences and one ungrammatical one, shuffled
pub fn grammaticality_item<R: Rng + ?Sized>(
    language: &GlossedLanguage,
    rng: &mut R,
) -> Result<GrammaticalityItem> {
    let mut options = vec![
        (language.sentence(rng)?.text, true),
        (language.sentence(rng)?.text, true),
        (language.ungrammatical_sentence(rng)?, false),
    ];
    options.shuffle(rng);

    let ungrammatical = options
        .iter()
        .position(|(_, grammatical)| !grammatical)
        .unwrap_or_default();
    Ok(GrammaticalityItem {
        options: options.into_iter().map(|(text, _)| text).collect(),
        ungrammatical,
    })
}

/// `count` grammaticality judgement items
pub fn grammaticality_exercise<R: Rng + ?Sized>(
    language: &GlossedLanguage,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GrammaticalityItem>> {
    let items = (0..count)
        .map(|_| grammaticality_item(language, rng))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = items.len(), "built grammaticality exercise");
    Ok(items)
}

/// The full candidate pool, unshuffled: three verbs, six nouns, then one
/// candidate of each malformed kind
pub fn phonotactic_candidates<R: Rng + ?Sized>(
    language: &GlossedLanguage,
    rng: &mut R,
) -> Result<Vec<(String, CandidateKind)>> {
    let phonology = language.phonology();
    let mut candidates = Vec::new();

    for _ in 0..3 {
        candidates.push((phonology.coin_verb(rng)?, CandidateKind::Verb));
    }
    for _ in 0..6 {
        candidates.push((phonology.coin_noun(rng)?, CandidateKind::Noun));
    }

    let illegal_coda = format!(
        "{}{}{}",
        phonology.random_vowel(rng)?,
        phonology.cvc_syllable(rng)?,
        phonology.cv_syllable(rng)?
    );
    candidates.push((illegal_coda, CandidateKind::IllegalCoda));

    let consonant_initial: String = phonology.coin_noun(rng)?.chars().skip(1).collect();
    candidates.push((consonant_initial, CandidateKind::ConsonantInitial));

    let mut medial_nasal: String = phonology.coin_verb(rng)?.chars().skip(2).collect();
    medial_nasal.push(phonology.random_vowel(rng)?);
    candidates.push((medial_nasal, CandidateKind::MedialNasal));

    let mut foreign_sound: String = phonology.coin_noun(rng)?.chars().skip(2).collect();
    foreign_sound.push_str("wa");
    candidates.push((foreign_sound, CandidateKind::ForeignSound));

    Ok(candidates)
}

/// `count` shuffled candidates judged against `rules`.
///
/// Every malformed candidate is kept; the remaining slots are filled with
/// well-formed words drawn from the pool.
pub fn phonotactic_exercise<R: Rng + ?Sized>(
    language: &GlossedLanguage,
    rules: &Phonotactics,
    count: usize,
    rng: &mut R,
) -> Result<Vec<PhonotacticItem>> {
    let (mut well_formed, mut candidates): (Vec<_>, Vec<_>) = phonotactic_candidates(language, rng)?
        .into_iter()
        .partition(|(_, kind)| kind.is_well_formed());

    candidates.shuffle(rng);
    candidates.truncate(count);
    well_formed.shuffle(rng);
    well_formed.truncate(count - candidates.len());
    candidates.extend(well_formed);
    candidates.shuffle(rng);

    let items: Vec<PhonotacticItem> = candidates
        .into_iter()
        .map(|(word, kind)| {
            let violation = rules.check(&word);
            PhonotacticItem {
                well_formed: violation.is_none(),
                word,
                kind,
                violation,
            }
        })
        .collect();
    debug!(count = items.len(), "built phonotactic exercise");
    Ok(items)
}
