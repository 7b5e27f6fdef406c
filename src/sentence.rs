//! Annotated sentences as delivered by the upstream pipeline (tokenizer, tagger, lemmatizer,
//! parser, NER, semantic field tagger, word sense disambiguation) and the predicate-argument
//! annotations the role annotator adds to them.
//!
//! All offsets are byte offsets into `Sentence::text`. Annotation layers are plain vectors;
//! `select_covered` and `select_covering` query them in annotation index order, i.e. by begin
//! offset ascending and end offset descending.

use std::cmp::Reverse;
use std::ops::Range;

use log::warn;

/// A half-open byte range `[begin, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
  /// first byte
  pub begin: usize,
  /// one past the last byte
  pub end: usize,
}

impl Span {
  /// Creates a span
  pub fn new(begin: usize, end: usize) -> Self { Span { begin, end } }

  /// true if `other` lies within this span
  pub fn covers(&self, other: &Span) -> bool { self.begin <= other.begin && other.end <= self.end }

  /// length in bytes
  pub fn len(&self) -> usize { self.end.saturating_sub(self.begin) }

  /// true for zero-length spans
  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

/// A token with its lemma and coarse part-of-speech tag (`V`, `NN`, `NP`, `CARD`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  /// position in the sentence text
  pub span: Span,
  /// lemma
  pub lemma: String,
  /// coarse part-of-speech tag
  pub pos: String,
}

/// A labeled syntactic dependency between two tokens, given as token indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
  /// relation label, e.g. `nsubj` or `prep_with`
  pub relation: String,
  /// index of the governing token
  pub governor: usize,
  /// index of the dependent token
  pub dependent: usize,
}

/// A span carrying a single string label. Used for semantic fields, named entities,
/// constituents (label = phrase type), WSD items (label = subject of disambiguation),
/// senses (label = sense id) and gold semantic arguments (label = `Role%lemma.v%id%Frame`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSpan {
  /// the annotated range
  pub span: Span,
  /// the annotation value
  pub label: String,
}

/// A semantic argument produced by the annotator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticArgument {
  /// the argument constituent
  pub span: Span,
  /// FrameNet role label(s)
  pub role: String,
}

/// A frame-evoking predicate produced by the annotator, linked to its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticPredicate {
  /// the sense-bearing target
  pub span: Span,
  /// the FrameNet frame
  pub category: String,
  /// the arguments
  pub arguments: Vec<SemanticArgument>,
}

/// One sentence with all its annotation layers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
  /// the covered text
  pub text: String,
  /// tokens, in order
  pub tokens: Vec<Token>,
  /// dependency edges
  pub dependencies: Vec<Dependency>,
  /// semantic field layer
  pub semantic_fields: Vec<LabeledSpan>,
  /// named entity layer
  pub named_entities: Vec<LabeledSpan>,
  /// phrase structure constituents
  pub constituents: Vec<LabeledSpan>,
  /// word sense disambiguation targets
  pub wsd_items: Vec<LabeledSpan>,
  /// FrameNet senses of the WSD targets
  pub senses: Vec<LabeledSpan>,
  /// gold semantic arguments (evaluation corpora only)
  pub gold_arguments: Vec<LabeledSpan>,
  /// output layer: predicates with their arguments
  pub predicates: Vec<SemanticPredicate>,
}

impl Sentence {
  /// Builds a sentence from `(text, lemma, pos)` triples, separating tokens by single spaces
  pub fn from_tokens(tokens: &[(&str, &str, &str)]) -> Sentence {
    let mut sentence = Sentence::default();
    for (text, lemma, pos) in tokens {
      if !sentence.text.is_empty() {
        sentence.text.push(' ');
      }
      let begin = sentence.text.len();
      sentence.text.push_str(text);
      sentence.tokens.push(Token {
        span: Span::new(begin, sentence.text.len()),
        lemma: lemma.to_string(),
        pos: pos.to_string(),
      });
    }
    sentence
  }

  /// The span of the whole sentence
  pub fn span(&self) -> Span { Span::new(0, self.text.len()) }

  /// The text covered by `span`, empty if the span is not a valid range of the text
  pub fn covered_text(&self, span: Span) -> &str {
    self.text.get(span.begin..span.end).unwrap_or("")
  }

  /// The token at `index`
  pub fn token(&self, index: usize) -> Option<&Token> { self.tokens.get(index) }

  /// The span from the first to the last token of a token index range
  pub fn tokens_span(&self, tokens: Range<usize>) -> Option<Span> {
    if tokens.start >= tokens.end {
      return None;
    }
    let first = self.tokens.get(tokens.start)?;
    let last = self.tokens.get(tokens.end - 1)?;
    Some(Span::new(first.span.begin, last.span.end))
  }

  /// Adds a dependency edge between two token indices
  pub fn with_dependency(mut self, relation: &str, governor: usize, dependent: usize) -> Self {
    self.dependencies.push(Dependency {
      relation: relation.to_string(),
      governor,
      dependent,
    });
    self
  }

  /// Annotates a semantic field over a token range
  pub fn with_semantic_field(self, tokens: Range<usize>, field: &str) -> Self {
    self.with_label(tokens, field, |s| &mut s.semantic_fields)
  }

  /// Annotates a named entity over a token range
  pub fn with_named_entity(self, tokens: Range<usize>, tag: &str) -> Self {
    self.with_label(tokens, tag, |s| &mut s.named_entities)
  }

  /// Annotates a constituent over a token range
  pub fn with_constituent(self, tokens: Range<usize>, phrase_type: &str) -> Self {
    self.with_label(tokens, phrase_type, |s| &mut s.constituents)
  }

  /// Annotates a WSD target over a token range
  pub fn with_wsd_item(self, tokens: Range<usize>, subject: &str) -> Self {
    self.with_label(tokens, subject, |s| &mut s.wsd_items)
  }

  /// Annotates a FrameNet sense over a token range
  pub fn with_sense(self, tokens: Range<usize>, sense_id: &str) -> Self {
    self.with_label(tokens, sense_id, |s| &mut s.senses)
  }

  /// Annotates a gold semantic argument over a token range
  pub fn with_gold_argument(self, tokens: Range<usize>, role: &str) -> Self {
    self.with_label(tokens, role, |s| &mut s.gold_arguments)
  }

  fn with_label<F>(mut self, tokens: Range<usize>, label: &str, layer: F) -> Self
  where F: FnOnce(&mut Sentence) -> &mut Vec<LabeledSpan> {
    match self.tokens_span(tokens.clone()) {
      Some(span) => layer(&mut self).push(LabeledSpan {
        span,
        label: label.to_string(),
      }),
      None => warn!(
        "ignoring \"{}\" annotation over invalid token range {:?}",
        label, tokens
      ),
    }
    self
  }
}

/// Annotations of `layer` lying within `span`, in annotation index order
pub fn select_covered(layer: &[LabeledSpan], span: Span) -> Vec<&LabeledSpan> {
  index_order(layer.iter().filter(|a| span.covers(&a.span)).collect())
}

/// Annotations of `layer` covering `span`, in annotation index order
pub fn select_covering(layer: &[LabeledSpan], span: Span) -> Vec<&LabeledSpan> {
  index_order(layer.iter().filter(|a| a.span.covers(&span)).collect())
}

fn index_order(mut annotations: Vec<&LabeledSpan>) -> Vec<&LabeledSpan> {
  annotations.sort_by_key(|a| (a.span.begin, Reverse(a.span.end)));
  annotations
}

#[cfg(test)]
mod tests {
  use super::*;

  fn said_sentence() -> Sentence {
    Sentence::from_tokens(&[
      ("John", "John", "NP"),
      ("said", "say", "V"),
      ("nothing", "nothing", "NN"),
    ])
  }

  #[test]
  fn tokens_get_consecutive_spans() {
    let sentence = said_sentence();
    assert_eq!(sentence.text, "John said nothing");
    assert_eq!(sentence.tokens[1].span, Span::new(5, 9));
    assert_eq!(sentence.covered_text(sentence.tokens[2].span), "nothing");
    assert_eq!(sentence.tokens_span(0..2), Some(Span::new(0, 9)));
    assert_eq!(sentence.tokens_span(2..4), None);
  }

  #[test]
  fn covering_annotations_come_outermost_first() {
    let sentence = said_sentence()
      .with_constituent(1..3, "VP")
      .with_constituent(2..3, "NP")
      .with_constituent(0..3, "S");
    let phrases: Vec<&str> = select_covering(&sentence.constituents, sentence.tokens[2].span)
      .iter()
      .map(|c| c.label.as_str())
      .collect();
    assert_eq!(phrases, ["S", "VP", "NP"]);
  }

  #[test]
  fn covered_annotations_stay_within_span() {
    let sentence = said_sentence()
      .with_semantic_field(0..1, "person")
      .with_semantic_field(1..2, "communication");
    let fields = select_covered(&sentence.semantic_fields, sentence.tokens[1].span);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].label, "communication");
  }

  #[test]
  fn invalid_ranges_are_ignored() {
    let sentence = said_sentence().with_semantic_field(3..4, "person");
    assert!(sentence.semantic_fields.is_empty());
  }
}
