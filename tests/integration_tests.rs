use conlang_gen::exercises::{phonotactic_candidates, CandidateKind};
use conlang_gen::lexicon::{ACTION_GLOSSES, PRONOUN_PAIRS};
use conlang_gen::phonology::VOWELS;
use conlang_gen::{GlossedLanguage, Phonology, Phonotactics, Report, ReportConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn split_sentence(text: &str) -> Vec<String> {
    text.trim_end_matches('.')
        .split(' ')
        .map(|w| w.to_lowercase())
        .collect()
}

#[test]
fn test_generated_language_shape() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let language = GlossedLanguage::generate(Phonology::default(), &mut rng).unwrap();

        // Pronouns are the five vowels, each glossed with a distinct nominative
        let pronoun_words: Vec<&str> = language.pronouns().iter().map(|e| e.word.as_str()).collect();
        let vowels: Vec<String> = VOWELS.iter().map(|v| v.to_string()).collect();
        assert_eq!(pronoun_words, vowels);
        let mut glosses: Vec<&str> = language.pronouns().iter().map(|e| e.gloss.as_str()).collect();
        glosses.sort();
        let mut nominatives: Vec<&str> = PRONOUN_PAIRS.iter().map(|(nom, _)| *nom).collect();
        nominatives.sort();
        assert_eq!(glosses, nominatives);

        for noun in language.nouns().iter() {
            assert!([3, 5, 7].contains(&noun.word.len()), "noun {}", noun.word);
            assert!(noun.gloss.starts_with("a ") || noun.gloss.starts_with("an "));
        }
        for verb in language.verbs().iter() {
            assert!(ACTION_GLOSSES.contains(&verb.gloss.as_str()));
        }
    }
}

#[test]
fn test_sentence_properties() {
    let mut rng = StdRng::seed_from_u64(8);
    let language = GlossedLanguage::generate(Phonology::default(), &mut rng).unwrap();
    let cases = language.pronoun_cases();

    for _ in 0..200 {
        let sentence = language.sentence(&mut rng).unwrap();
        let words = split_sentence(&sentence.text);
        assert_eq!(words.len(), 3);

        let agent_gloss = language.actors().gloss_of(&words[0]).unwrap();
        let patient_gloss = language.actors().gloss_of(&words[1]).unwrap();
        let action_gloss = language.verbs().gloss_of(&words[2]).unwrap();

        let gloss = sentence.gloss.trim_end_matches('.');
        let agent_part = conlang_gen::utils::capitalize(agent_gloss);
        assert!(gloss.starts_with(&agent_part), "{}", sentence.gloss);

        let rest = &gloss[agent_part.len() + 1..];
        let expected_verb = if cases.is_nominative(agent_gloss) {
            action_gloss.to_string()
        } else {
            format!("{}s", action_gloss)
        };
        assert!(rest.starts_with(&expected_verb), "{}", sentence.gloss);
        assert_eq!(
            &rest[expected_verb.len() + 1..],
            cases.objective_or_same(patient_gloss),
            "{}",
            sentence.gloss
        );
    }
}

#[test]
fn test_ungrammatical_never_verb_final() {
    let mut rng = StdRng::seed_from_u64(9);
    let language = GlossedLanguage::generate(Phonology::default(), &mut rng).unwrap();

    for _ in 0..200 {
        let text = language.ungrammatical_sentence(&mut rng).unwrap();
        let words = split_sentence(&text);
        assert_eq!(words.len(), 3);
        assert!(!language.verbs().contains_word(&words[2]), "{}", text);
        assert!(
            language.verbs().contains_word(&words[0]) || language.verbs().contains_word(&words[1]),
            "{}",
            text
        );
    }
}

#[test]
fn test_malformed_candidates_are_rejected() {
    let mut rng = StdRng::seed_from_u64(10);
    let language = GlossedLanguage::generate(Phonology::default(), &mut rng).unwrap();
    let rules = Phonotactics::standard(language.phonology()).unwrap();

    for _ in 0..100 {
        for (word, kind) in phonotactic_candidates(&language, &mut rng).unwrap() {
            let violation = rules.check(&word);
            match kind {
                CandidateKind::Verb | CandidateKind::Noun => {
                    assert_eq!(violation, None, "{}", word)
                }
                CandidateKind::ForeignSound => {
                    assert_eq!(violation.unwrap().rule, "inventory", "{}", word)
                }
                CandidateKind::ConsonantInitial => {
                    assert_eq!(violation.unwrap().rule, "vowel-initial", "{}", word)
                }
                CandidateKind::MedialNasal => {
                    assert_eq!(violation.unwrap().rule, "final-nasal", "{}", word)
                }
                CandidateKind::IllegalCoda => {
                    assert_eq!(violation.unwrap().rule, "open-syllables", "{}", word)
                }
            }
        }
    }
}

#[test]
fn test_report_sections() {
    let report = Report::from_seed(&ReportConfig::default(), 1234).unwrap();
    let text = report.text(false).to_string();

    let headers: Vec<&str> = text
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with(' '))
        .collect();
    assert_eq!(
        headers,
        vec![
            "LEXICON",
            "EXAMPLE SENTENCES",
            "GRAMMATICALITY EXERCISES",
            "PHONOTACTIC EXERCISES"
        ]
    );
    assert_eq!(text.matches("Which sentence is ungrammatical?").count(), 10);
    assert_eq!(text.matches("YES   NO").count(), 10);
    assert!(!text.contains("ANSWER KEY"));
    assert!(report.text(true).to_string().contains("ANSWER KEY"));
}

#[test]
fn test_seeded_reports_are_reproducible() {
    let config = ReportConfig::default();
    let first = Report::from_seed(&config, 55).unwrap();
    let second = Report::from_seed(&config, 55).unwrap();
    let other = Report::from_seed(&config, 56).unwrap();

    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_ne!(first.lexicon, other.lexicon);
}

#[test]
fn test_custom_config_sizes() {
    let config = ReportConfig {
        sentences: 3,
        grammaticality_items: 2,
        phonotactic_items: 20,
    };
    let report = Report::from_seed(&config, 3).unwrap();
    assert_eq!(report.sentences.len(), 3);
    assert_eq!(report.grammaticality.len(), 2);
    // The candidate pool only holds thirteen words
    assert_eq!(report.phonotactics.len(), 13);
}

#[test]
fn test_default_reports_show_each_malformed_kind_once() {
    let malformed = [
        CandidateKind::IllegalCoda,
        CandidateKind::ConsonantInitial,
        CandidateKind::MedialNasal,
        CandidateKind::ForeignSound,
    ];
    for seed in 0..300 {
        let report = Report::from_seed(&ReportConfig::default(), seed).unwrap();
        assert_eq!(report.phonotactics.len(), 10);
        for kind in malformed {
            let shown = report.phonotactics.iter().filter(|item| item.kind == kind).count();
            assert_eq!(shown, 1, "seed {} shows {} {:?} candidates", seed, shown, kind);
        }
    }
}

#[test]
fn test_grammaticality_numbers_are_aligned() {
    let report = Report::from_seed(&ReportConfig::default(), 4).unwrap();
    let text = report.text(false).to_string();

    assert!(text.contains("\n   1. Which sentence is ungrammatical?\n"));
    assert!(text.contains("\n  10. Which sentence is ungrammatical?\n"));
}
