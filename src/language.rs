//! The two language variants of the annotator. They share the cascade and the translation step
//! and differ in rule tables and feature vocabularies.

use std::fmt;

use crate::rules::{self, RoleClassifier};

/// Source language of the annotated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  /// Stanford collapsed dependencies, WordNet supersense fields, Stanford NER tags
  English,
  /// TIGER-style dependency labels, German semantic field names, IOB location tags
  German,
}

impl Language {
  /// The rule cascade for this language
  pub fn classifier(self) -> RoleClassifier {
    match self {
      Language::English => RoleClassifier::new(rules::english::RULES),
      Language::German => RoleClassifier::new(rules::german::RULES),
    }
  }

  /// Whether the annotator can run in prediction mode for this language
  pub fn supports_prediction(self) -> bool { self == Language::English }

  /// Normalizes a named entity tag to the vocabulary of the rule table
  pub fn normalize_named_entity(self, tag: &str) -> String {
    let tag = tag.to_lowercase();
    match self {
      Language::English if tag == "organization" => "group".to_string(),
      _ => tag,
    }
  }

  /// Normalizes a frame name as found in sense ids and gold roles.
  /// SALSA frames of the German corpus carry a `-salsa…` suffix.
  pub fn normalize_frame(self, frame: &str) -> String {
    let frame = frame.trim();
    match self {
      Language::German if frame.contains("salsa") => {
        frame.split('-').next().unwrap_or(frame).to_string()
      },
      _ => frame.to_string(),
    }
  }

  /// Label for the set of predicted roles in the run summary
  pub fn predicted_roles_label(self) -> &'static str {
    match self {
      Language::English => "set of predicted roles",
      Language::German => "set of predicted VerbNet roles",
    }
  }

  /// short name for messages
  pub fn name(self) -> &'static str {
    match self {
      Language::English => "english",
      Language::German => "german",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn organizations_are_groups_in_english_only() {
    assert_eq!(Language::English.normalize_named_entity("ORGANIZATION"), "group");
    assert_eq!(Language::English.normalize_named_entity("PERSON"), "person");
    assert_eq!(Language::German.normalize_named_entity("ORGANIZATION"), "organization");
    assert_eq!(Language::German.normalize_named_entity("I-LOC"), "i-loc");
  }

  #[test]
  fn salsa_frames_are_cut() {
    assert_eq!(Language::German.normalize_frame("Statement-salsa1"), "Statement");
    assert_eq!(Language::German.normalize_frame(" Statement "), "Statement");
    assert_eq!(Language::English.normalize_frame("Statement-salsa1"), "Statement-salsa1");
  }
}
