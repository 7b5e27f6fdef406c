//! Identity of the predicate under analysis: its target lemma and its FrameNet frame, read either
//! off a gold semantic argument or off the word sense annotation of the sentence.

use regex::Regex;

use crate::error::AnnotationGap;
use crate::language::Language;
use crate::sentence::{select_covered, Sentence, Span};

lazy_static! {
  // Role%lemma.v%id%Frame, further fields are ignored
  static ref GOLD_ROLE: Regex = Regex::new(r"^([^%]+)%([^%]+)%([^%]*)%([^%]+)").unwrap();
  static ref VERBAL_TARGET: Regex = Regex::new(r"\.v$").unwrap();
  static ref VERB_SUFFIX: Regex = Regex::new(r"\.v").unwrap();
  // item#n%%lemma%Frame%id
  static ref SENSE_ID: Regex = Regex::new(r"%%[^%]*%([^%]+)").unwrap();
}

/// A parsed gold semantic argument label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldRole {
  /// the FrameNet role
  pub role: String,
  /// the target lemma, without part-of-speech suffix
  pub target: String,
  /// the FrameNet frame
  pub frame: String,
  /// whether the target is a verb (`lemma.v`)
  pub verbal: bool,
}

impl GoldRole {
  /// Parses a `Role%lemma.v%id%Frame` label
  pub fn parse(label: &str, language: Language) -> Result<GoldRole, AnnotationGap> {
    let captures = GOLD_ROLE
      .captures(label)
      .ok_or_else(|| AnnotationGap::MalformedGoldRole(label.to_string()))?;
    let target = &captures[2];
    Ok(GoldRole {
      role: captures[1].to_string(),
      target: VERB_SUFFIX.replace_all(target, "").into_owned(),
      frame: language.normalize_frame(&captures[4]),
      verbal: VERBAL_TARGET.is_match(target),
    })
  }
}

/// The disambiguated target verb of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateSense {
  /// lemma the governor has to match; the first word of a phrasal verb
  pub target: String,
  /// the FrameNet frame of the sense
  pub frame: String,
  /// where the sense is annotated
  pub span: Span,
}

impl PredicateSense {
  /// Reads the first WSD item and the first sense of the sentence. Only one target verb per
  /// sentence carries a sense.
  pub fn from_sentence(sentence: &Sentence, language: Language) -> Result<Self, AnnotationGap> {
    let item = select_covered(&sentence.wsd_items, sentence.span())
      .first()
      .cloned()
      .ok_or(AnnotationGap::MissingWsdItem)?;
    let target = item
      .label
      .split_whitespace()
      .next()
      .ok_or(AnnotationGap::MissingWsdItem)?
      .to_string();
    let sense = select_covered(&sentence.senses, sentence.span())
      .first()
      .cloned()
      .ok_or(AnnotationGap::MissingSense)?;
    let frame = SENSE_ID
      .captures(&sense.label)
      .map(|captures| language.normalize_frame(&captures[1]))
      .filter(|frame| !frame.is_empty())
      .ok_or_else(|| AnnotationGap::MalformedSense(sense.label.clone()))?;
    Ok(PredicateSense {
      target,
      frame,
      span: sense.span,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gold_role_fields() {
    let gold = GoldRole::parse("Speaker%say.v%1234%Statement", Language::English).unwrap();
    assert_eq!(gold.role, "Speaker");
    assert_eq!(gold.target, "say");
    assert_eq!(gold.frame, "Statement");
    assert!(gold.verbal);

    let nominal = GoldRole::parse("Speaker%statement.n%77%Statement", Language::English).unwrap();
    assert!(!nominal.verbal);
    assert_eq!(nominal.target, "statement.n");
  }

  #[test]
  fn german_gold_frames_lose_salsa_suffix() {
    let gold = GoldRole::parse("Sprecher%sagen.v%9%Statement-salsa1", Language::German).unwrap();
    assert_eq!(gold.frame, "Statement");
  }

  #[test]
  fn malformed_gold_role() {
    assert_eq!(
      GoldRole::parse("Speaker%say.v", Language::English),
      Err(AnnotationGap::MalformedGoldRole("Speaker%say.v".to_string()))
    );
  }

  #[test]
  fn sense_of_phrasal_verb() {
    let sentence = Sentence::from_tokens(&[
      ("They", "they", "PR"),
      ("gave", "give", "V"),
      ("up", "up", "PP"),
    ])
    .with_wsd_item(1..3, " give up ")
    .with_sense(1..3, "give_up#12%%give_up%Quitting%4711");
    let sense = PredicateSense::from_sentence(&sentence, Language::English).unwrap();
    assert_eq!(sense.target, "give");
    assert_eq!(sense.frame, "Quitting");
    assert_eq!(sense.span, Span::new(5, 12));
  }

  #[test]
  fn missing_sense_layers() {
    let sentence = Sentence::from_tokens(&[("Go", "go", "V")]);
    assert_eq!(
      PredicateSense::from_sentence(&sentence, Language::English),
      Err(AnnotationGap::MissingWsdItem)
    );
    let sentence = sentence.with_wsd_item(0..1, "go");
    assert_eq!(
      PredicateSense::from_sentence(&sentence, Language::English),
      Err(AnnotationGap::MissingSense)
    );
    let sentence = sentence.with_sense(0..1, "go#1");
    assert_eq!(
      PredicateSense::from_sentence(&sentence, Language::English),
      Err(AnnotationGap::MalformedSense("go#1".to_string()))
    );
  }
}
