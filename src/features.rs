//! The feature vector the rule cascade is evaluated on, one per dependency edge

use crate::error::AnnotationGap;
use crate::language::Language;
use crate::sentence::{select_covered, select_covering, Sentence, Token};

/// Named entity tag of dependents not covered by any named entity
pub const NOT_A_NAMED_ENTITY: &str = "notANamedEntity";

/// Lexical and semantic features of a dependency edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyFeatures {
  /// dependency relation label
  pub relation: String,
  /// part of speech of the dependent
  pub dependent_pos: String,
  /// semantic field of the dependent
  pub dependent_field: String,
  /// normalized named entity tag of the dependent
  pub named_entity: String,
  /// semantic field of the governor
  pub governor_field: String,
}

impl DependencyFeatures {
  /// Features of a `relation` edge with nothing else known
  pub fn new(relation: &str) -> Self {
    DependencyFeatures {
      relation: relation.to_string(),
      dependent_pos: String::new(),
      dependent_field: String::new(),
      named_entity: NOT_A_NAMED_ENTITY.to_string(),
      governor_field: String::new(),
    }
  }

  /// sets the dependent's part of speech
  pub fn with_dependent_pos(mut self, pos: &str) -> Self {
    self.dependent_pos = pos.to_string();
    self
  }

  /// sets the dependent's semantic field
  pub fn with_dependent_field(mut self, field: &str) -> Self {
    self.dependent_field = field.to_string();
    self
  }

  /// sets the dependent's named entity tag
  pub fn with_named_entity(mut self, tag: &str) -> Self {
    self.named_entity = tag.to_string();
    self
  }

  /// sets the governor's semantic field
  pub fn with_governor_field(mut self, field: &str) -> Self {
    self.governor_field = field.to_string();
    self
  }

  /// Reads the features of the edge `governor -relation-> dependent` off the annotation
  /// layers of `sentence`. Both tokens need a semantic field; the named entity is optional.
  pub fn extract(
    sentence: &Sentence,
    relation: &str,
    governor: &Token,
    dependent: &Token,
    language: Language,
  ) -> Result<Self, AnnotationGap>
  {
    let named_entity = match select_covering(&sentence.named_entities, dependent.span).first() {
      Some(entity) => language.normalize_named_entity(&entity.label),
      None => NOT_A_NAMED_ENTITY.to_string(),
    };
    Ok(DependencyFeatures {
      relation: relation.to_string(),
      dependent_pos: dependent.pos.clone(),
      dependent_field: semantic_field(sentence, dependent)?,
      named_entity,
      governor_field: semantic_field(sentence, governor)?,
    })
  }
}

/// The first semantic field annotated within the token
fn semantic_field(sentence: &Sentence, token: &Token) -> Result<String, AnnotationGap> {
  match select_covered(&sentence.semantic_fields, token.span).first() {
    Some(field) => Ok(field.label.clone()),
    None => Err(AnnotationGap::MissingSemanticField(
      sentence.covered_text(token.span).to_string(),
    )),
  }
}
