use std::fmt;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::exercises::{grammaticality_exercise, phonotactic_exercise, GrammaticalityItem, PhonotacticItem};
use crate::language::{GlossedLanguage, Sentence};
use crate::lexicon::Lexicon;
use crate::phonology::Phonology;
use crate::phonotactics::Phonotactics;
use crate::utils::Result;

/// Sizes of the report sections
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Number of glossed example sentences
    pub sentences: usize,
    /// Number of grammaticality judgement items
    pub grammaticality_items: usize,
    /// Number of phonotactic judgement candidates
    pub phonotactic_items: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            sentences: 20,
            grammaticality_items: 10,
            phonotactic_items: 10,
        }
    }
}

/// Everything printed for one generated language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Seed the report was generated from, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub lexicon: Lexicon,
    pub sentences: Vec<Sentence>,
    pub grammaticality: Vec<GrammaticalityItem>,
    pub phonotactics: Vec<PhonotacticItem>,
}

impl Report {
    /// Generate a new language and all report sections from `rng`
    pub fn generate<R: Rng + ?Sized>(config: &ReportConfig, rng: &mut R) -> Result<Self> {
        let language = GlossedLanguage::generate(Phonology::default(), rng)?;
        let rules = Phonotactics::standard(language.phonology())?;

        let sentences = (0..config.sentences)
            .map(|_| language.sentence(rng))
            .collect::<Result<Vec<_>>>()?;
        let grammaticality = grammaticality_exercise(&language, config.grammaticality_items, rng)?;
        let phonotactics = phonotactic_exercise(&language, &rules, config.phonotactic_items, rng)?;

        Ok(Report {
            seed: None,
            lexicon: language.words().clone(),
            sentences,
            grammaticality,
            phonotactics,
        })
    }

    /// Generate a reproducible report
    pub fn from_seed(config: &ReportConfig, seed: u64) -> Result<Self> {
        info!(seed, "generating report");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut report = Report::generate(config, &mut rng)?;
        report.seed = Some(seed);
        Ok(report)
    }

    /// Text rendering of the report, optionally followed by the answer key
    pub fn text(&self, with_answers: bool) -> TextReport<'_> {
        TextReport {
            report: self,
            with_answers,
        }
    }

    /// Pretty-printed JSON rendering of the report
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the text rendering to `out`
    pub fn write_text<W: Write>(&self, out: &mut W, with_answers: bool) -> Result<()> {
        write!(out, "{}", self.text(with_answers))?;
        out.flush()?;
        Ok(())
    }

    /// Write the JSON rendering to `out`, followed by a newline
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Plain text view of a [`Report`]
pub struct TextReport<'a> {
    report: &'a Report,
    with_answers: bool,
}

/// Letter label for the option at `index`
fn option_label(index: usize) -> char {
    (b'a' + index as u8) as char
}

impl TextReport<'_> {
    fn fmt_lexicon(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LEXICON")?;
        writeln!(f)?;
        for entry in self.report.lexicon.iter() {
            writeln!(f, "  - {:<10} {}", format!("{}:", entry.word), entry.gloss)?;
        }
        Ok(())
    }

    fn fmt_sentences(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\nEXAMPLE SENTENCES")?;
        for sentence in &self.report.sentences {
            writeln!(f)?;
            writeln!(f, "  - {}", sentence.text)?;
            writeln!(f, "    {}", sentence.gloss)?;
        }
        Ok(())
    }

    fn fmt_grammaticality(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\nGRAMMATICALITY EXERCISES")?;
        for (i, item) in self.report.grammaticality.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "  {:>2}. Which sentence is ungrammatical?", i + 1)?;
            for (j, option) in item.options.iter().enumerate() {
                writeln!(f, "     {}) {}", option_label(j), option)?;
            }
        }
        Ok(())
    }

    fn fmt_phonotactics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\nPHONOTACTIC EXERCISES")?;
        writeln!(f)?;
        writeln!(f, "  Could each of these be a word of the language?")?;
        writeln!(f)?;
        for (i, item) in self.report.phonotactics.iter().enumerate() {
            writeln!(f, "  {:>2}. {:<12} YES   NO", i + 1, item.word)?;
        }
        Ok(())
    }

    fn fmt_answers(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\nANSWER KEY")?;
        writeln!(f)?;
        writeln!(f, "  Grammaticality")?;
        for (i, item) in self.report.grammaticality.iter().enumerate() {
            writeln!(f, "  {:>2}. {}", i + 1, option_label(item.ungrammatical))?;
        }
        writeln!(f)?;
        writeln!(f, "  Phonotactics")?;
        for (i, item) in self.report.phonotactics.iter().enumerate() {
            match &item.violation {
                None => writeln!(f, "  {:>2}. {:<12} YES", i + 1, item.word)?,
                Some(violation) => {
                    writeln!(f, "  {:>2}. {:<12} NO    ({})", i + 1, item.word, violation)?
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_lexicon(f)?;
        self.fmt_sentences(f)?;
        self.fmt_grammaticality(f)?;
        self.fmt_phonotactics(f)?;
        if self.with_answers {
            self.fmt_answers(f)?;
        }
        Ok(())
    }
}
