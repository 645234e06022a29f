use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::lexicon::{Lexicon, LexiconBuilder, LexiconEntry, PronounCases};
use crate::phonology::Phonology;
use crate::utils::{sentence_case, LanguageError, Result};

/// A sentence in the generated language together with its English gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub gloss: String,
}

/// Word orders that are wrong in the generated language, which is strictly
/// agent-patient-action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrongOrder {
    /// agent, action, patient
    Svo,
    /// action, agent, patient
    Vso,
}

/// A complete toy language: its sound system, its lexicon and the rules for
/// building glossed sentences from it
#[derive(Debug, Clone)]
pub struct GlossedLanguage {
    phonology: Phonology,
    nouns: Lexicon,
    pronouns: Lexicon,
    actors: Lexicon,
    verbs: Lexicon,
    pronoun_cases: PronounCases,
    words: Lexicon,
}

impl GlossedLanguage {
    /// Assemble a language from already glossed word lists.
    ///
    /// Every pronoun must be glossed with a nominative form known to
    /// `pronoun_cases`.
    pub fn new(
        phonology: Phonology,
        nouns: Lexicon,
        pronouns: Lexicon,
        verbs: Lexicon,
        pronoun_cases: PronounCases,
    ) -> Result<Self> {
        if let Some(entry) = pronouns
            .iter()
            .find(|entry| !pronoun_cases.is_nominative(&entry.gloss))
        {
            return Err(LanguageError::UnknownPronoun {
                word: entry.word.clone(),
                gloss: entry.gloss.clone(),
            });
        }

        let actors = nouns.merged(&pronouns);
        let words = verbs.merged(&actors);
        Ok(GlossedLanguage {
            phonology,
            nouns,
            pronouns,
            actors,
            verbs,
            pronoun_cases,
            words,
        })
    }

    /// Coin a fresh language over `phonology`
    pub fn generate<R: Rng + ?Sized>(phonology: Phonology, rng: &mut R) -> Result<Self> {
        let pronoun_cases = PronounCases::default();
        let builder = LexiconBuilder::new(&phonology, &pronoun_cases);

        let nouns = builder.nouns(rng)?;
        let pronouns = builder.pronouns(rng);
        let verbs = builder.verbs(rng)?;

        let language = GlossedLanguage::new(phonology, nouns, pronouns, verbs, pronoun_cases)?;
        info!(words = language.words.len(), "generated language");
        Ok(language)
    }

    pub fn phonology(&self) -> &Phonology {
        &self.phonology
    }

    pub fn nouns(&self) -> &Lexicon {
        &self.nouns
    }

    pub fn pronouns(&self) -> &Lexicon {
        &self.pronouns
    }

    /// Nouns followed by pronouns
    pub fn actors(&self) -> &Lexicon {
        &self.actors
    }

    pub fn verbs(&self) -> &Lexicon {
        &self.verbs
    }

    pub fn pronoun_cases(&self) -> &PronounCases {
        &self.pronoun_cases
    }

    /// The whole lexicon: verbs, then nouns, then pronouns
    pub fn words(&self) -> &Lexicon {
        &self.words
    }

    /// A random noun or pronoun
    pub fn actor<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&LexiconEntry> {
        self.actors.choose(rng, "actor lexicon")
    }

    /// A random verb
    pub fn action<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&LexiconEntry> {
        self.verbs.choose(rng, "verb lexicon")
    }

    /// A grammatical sentence and its gloss.
    ///
    /// The sentence is verb-final (`agent patient action`) while the gloss
    /// follows English order (`agent action patient`). Verbs take `-s` in
    /// the gloss unless the agent is a pronoun, and pronoun patients are
    /// glossed in the objective case.
    pub fn sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sentence> {
        let agent = self.actor(rng)?;
        let patient = self.actor(rng)?;
        let action = self.action(rng)?;

        // verb agreement
        let mut action_gloss = action.gloss.clone();
        if !self.pronoun_cases.is_nominative(&agent.gloss) {
            action_gloss.push('s');
        }

        let patient_gloss = self.pronoun_cases.objective_or_same(&patient.gloss);

        Ok(Sentence {
            text: sentence_case(&[agent.word.as_str(), patient.word.as_str(), action.word.as_str()]),
            gloss: sentence_case(&[agent.gloss.as_str(), action_gloss.as_str(), patient_gloss]),
        })
    }

    /// A sentence in one of the wrong word orders, using bare words with no
    /// agreement
    pub fn ungrammatical_sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let agent = self.actor(rng)?;
        let patient = self.actor(rng)?;
        let action = self.action(rng)?;

        let order = if rng.gen_bool(0.5) {
            WrongOrder::Svo
        } else {
            WrongOrder::Vso
        };

        let words = match order {
            WrongOrder::Svo => [&agent.word, &action.word, &patient.word],
            WrongOrder::Vso => [&action.word, &agent.word, &patient.word],
        };
        Ok(sentence_case(&words.map(|w| w.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_language() -> GlossedLanguage {
        let nouns: Lexicon = [("opa", "a cat"), ("ekidu", "an elder")].into_iter().collect();
        let pronouns: Lexicon = [("a", "I"), ("e", "they")].into_iter().collect();
        let verbs: Lexicon = [("ibum", "see")].into_iter().collect();
        GlossedLanguage::new(
            Phonology::default(),
            nouns,
            pronouns,
            verbs,
            PronounCases::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_words_order() {
        let language = fixed_language();
        let words: Vec<&str> = language.words().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["ibum", "opa", "ekidu", "a", "e"]);
        assert_eq!(language.actors().len(), 4);
    }

    #[test]
    fn test_sentence_agreement_and_case() {
        let language = fixed_language();
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..100 {
            let sentence = language.sentence(&mut rng).unwrap();
            let words: Vec<String> = sentence
                .text
                .trim_end_matches('.')
                .split(' ')
                .map(|w| w.to_lowercase())
                .collect();
            assert_eq!(words.len(), 3);
            assert_eq!(words[2], "ibum");

            let agent_gloss = language.actors().gloss_of(&words[0]).unwrap();
            let patient_gloss = language.actors().gloss_of(&words[1]).unwrap();
            let verb = if language.pronoun_cases().is_nominative(agent_gloss) {
                "see"
            } else {
                "sees"
            };
            let patient = language.pronoun_cases().objective_or_same(patient_gloss);
            let expected = crate::utils::sentence_case(&[agent_gloss, verb, patient]);
            assert_eq!(sentence.gloss, expected);
        }
    }

    #[test]
    fn test_pronoun_patient_is_objective() {
        let nouns = Lexicon::new();
        let pronouns: Lexicon = [("a", "I")].into_iter().collect();
        let verbs: Lexicon = [("ubam", "hear")].into_iter().collect();
        let language =
            GlossedLanguage::new(Phonology::default(), nouns, pronouns, verbs, PronounCases::default())
                .unwrap();
        let mut rng = StdRng::seed_from_u64(22);

        let sentence = language.sentence(&mut rng).unwrap();
        assert_eq!(sentence.text, "A a ubam.");
        assert_eq!(sentence.gloss, "I hear me.");
    }

    #[test]
    fn test_noun_agent_takes_s() {
        let nouns: Lexicon = [("opa", "a cat")].into_iter().collect();
        let verbs: Lexicon = [("ubam", "bite")].into_iter().collect();
        let language = GlossedLanguage::new(
            Phonology::default(),
            nouns,
            Lexicon::new(),
            verbs,
            PronounCases::default(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(23);

        let sentence = language.sentence(&mut rng).unwrap();
        assert_eq!(sentence.text, "Opa opa ubam.");
        assert_eq!(sentence.gloss, "A cat bites a cat.");
    }

    #[test]
    fn test_ungrammatical_orders() {
        let nouns: Lexicon = [("opa", "a cat")].into_iter().collect();
        let pronouns: Lexicon = [("e", "we")].into_iter().collect();
        let verbs: Lexicon = [("ubam", "bite")].into_iter().collect();
        let language =
            GlossedLanguage::new(Phonology::default(), nouns, pronouns, verbs, PronounCases::default())
                .unwrap();
        let mut rng = StdRng::seed_from_u64(24);

        let mut seen_svo = false;
        let mut seen_vso = false;
        for _ in 0..100 {
            let text = language.ungrammatical_sentence(&mut rng).unwrap().to_lowercase();
            let words: Vec<&str> = text.trim_end_matches('.').split(' ').collect();
            assert_eq!(words.len(), 3);
            assert_ne!(words[2], "ubam", "verb-final order is grammatical: {}", text);
            if words[1] == "ubam" {
                seen_svo = true;
            } else {
                assert_eq!(words[0], "ubam");
                seen_vso = true;
            }
        }
        assert!(seen_svo && seen_vso);
    }

    #[test]
    fn test_empty_lexicon_errors() {
        let language = GlossedLanguage::new(
            Phonology::default(),
            Lexicon::new(),
            Lexicon::new(),
            Lexicon::new(),
            PronounCases::default(),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(25);
        assert!(language.sentence(&mut rng).is_err());
    }

    #[test]
    fn test_pronoun_without_case_forms_rejected() {
        let pronouns: Lexicon = [("a", "I"), ("e", "she")].into_iter().collect();
        let verbs: Lexicon = [("ubam", "hear")].into_iter().collect();
        let err = GlossedLanguage::new(
            Phonology::default(),
            Lexicon::new(),
            pronouns,
            verbs,
            PronounCases::default(),
        )
        .unwrap_err();

        match err {
            LanguageError::UnknownPronoun { word, gloss } => {
                assert_eq!(word, "e");
                assert_eq!(gloss, "she");
            }
            other => panic!("Expected UnknownPronoun, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = GlossedLanguage::generate(Phonology::default(), &mut StdRng::seed_from_u64(99)).unwrap();
        let second = GlossedLanguage::generate(Phonology::default(), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first.words(), second.words());
        assert_eq!(first.pronouns().len(), 5);
        assert_eq!(first.verbs().len() + first.actors().len(), first.words().len());
    }
}
