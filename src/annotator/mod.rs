//! The annotation orchestrator. For every dependency edge governed by the verb under analysis it
//! derives the edge's features, runs the rule cascade and the VerbNet to FrameNet translation,
//! and then either scores the result against the gold arguments (evaluation) or attaches
//! predicate and argument annotations to the sentence (prediction).
//!
//! Per-edge problems (missing annotations, malformed labels) skip the edge with a warning; only
//! configuration and resource problems at startup are fatal.

pub mod counters;
pub mod diagnostics;
pub mod parameters;
pub mod predicate;

use std::collections::BTreeSet;

use log::{debug, info, warn};
use rayon::prelude::*;

pub use self::counters::EvaluationCounters;
pub use self::diagnostics::DiagnosticWriter;
pub use self::parameters::{AnnotationMode, AnnotatorParameters};
pub use self::predicate::{GoldRole, PredicateSense};

use crate::error::{AnnotationGap, ConfigError, InitializationError};
use crate::features::DependencyFeatures;
use crate::language::Language;
use crate::rules::{CandidateRoles, RoleClassifier, NO_ROLE_LABEL};
use crate::semlink::SemLinkMapping;
use crate::sentence::{
  select_covering, Dependency, SemanticArgument, SemanticPredicate, Sentence, Token,
};
use crate::translator::{RoleTranslator, Translation};

/// Part-of-speech short name of verbs
pub const VERB_POS: &str = "V";

/// Labels the dependents of verbs with FrameNet roles
pub struct RoleAnnotator {
  language: Language,
  mode: AnnotationMode,
  mapping: SemLinkMapping,
  classifier: RoleClassifier,
  diagnostics: DiagnosticWriter,
}

impl RoleAnnotator {
  /// Validates `parameters`, loads the role mapping and opens the diagnostic output
  pub fn initialize(parameters: &AnnotatorParameters) -> Result<Self, InitializationError> {
    let (mode, output_file, mapping_location) = parameters.check()?;
    let mapping = SemLinkMapping::load_from_dir(&mapping_location)?;
    let diagnostics = DiagnosticWriter::create(&output_file);
    info!(
      "{} role annotator in {} mode, diagnostics to {}",
      parameters.language,
      mode.name(),
      output_file.display()
    );
    Ok(RoleAnnotator::new(parameters.language, mode, mapping, diagnostics)?)
  }

  /// An annotator over an already loaded mapping
  pub fn new(
    language: Language,
    mode: AnnotationMode,
    mapping: SemLinkMapping,
    diagnostics: DiagnosticWriter,
  ) -> Result<Self, ConfigError>
  {
    if mode == AnnotationMode::Prediction && !language.supports_prediction() {
      return Err(ConfigError::UnsupportedMode {
        language: language.name(),
        mode: mode.name(),
      });
    }
    Ok(RoleAnnotator {
      language,
      mode,
      mapping,
      classifier: language.classifier(),
      diagnostics,
    })
  }

  /// The language variant
  pub fn language(&self) -> Language { self.language }

  /// The annotation mode
  pub fn mode(&self) -> AnnotationMode { self.mode }

  /// The loaded role mapping
  pub fn mapping(&self) -> &SemLinkMapping { &self.mapping }

  /// Annotates one sentence, accumulating into `counters`
  pub fn process(&self, sentence: &mut Sentence, counters: &mut EvaluationCounters) {
    debug!("sentence text: {}", sentence.text);
    let predicates = self.annotate(sentence, counters);
    sentence.predicates.extend(predicates);
  }

  /// Annotates all sentences on the rayon pool, one set of counters per worker
  pub fn process_all(&self, sentences: &mut [Sentence]) -> EvaluationCounters {
    sentences
      .par_iter_mut()
      .fold(EvaluationCounters::new, |mut counters, sentence| {
        self.process(sentence, &mut counters);
        counters
      })
      .reduce(EvaluationCounters::new, EvaluationCounters::merge)
  }

  /// Reports the run to the log and the diagnostic output, then releases the output
  pub fn collection_process_complete(self, counters: &EvaluationCounters) -> RunSummary {
    let summary = RunSummary {
      language: self.language,
      mode: self.mode,
      counters: counters.clone(),
    };
    for line in summary.lines() {
      info!("{}", line);
      self.diagnostics.record(&line);
    }
    self.diagnostics.close();
    summary
  }

  fn annotate(
    &self,
    sentence: &Sentence,
    counters: &mut EvaluationCounters,
  ) -> Vec<SemanticPredicate>
  {
    let sense = match self.mode {
      AnnotationMode::Evaluation => None,
      AnnotationMode::Prediction => {
        if !self.has_verbal_edge(sentence) {
          return Vec::new();
        }
        match PredicateSense::from_sentence(sentence, self.language) {
          Ok(sense) => {
            debug!("target: {}, frame: {}", sense.target, sense.frame);
            Some(sense)
          },
          Err(gap) => {
            warn!("skipping sentence \"{}\": {}", sentence.text, gap);
            return Vec::new();
          },
        }
      },
    };

    let mut predicates = Vec::new();
    let mut sentence_roles = BTreeSet::new();
    for dependency in &sentence.dependencies {
      let outcome = match sense {
        Some(ref sense) => self.predict_edge(sentence, dependency, sense, counters),
        None => self.evaluate_edge(sentence, dependency, &mut sentence_roles, counters),
      };
      match outcome {
        Ok(Some(predicate)) => predicates.push(predicate),
        Ok(None) => {},
        Err(gap) => warn!("skipping {} dependency: {}", dependency.relation, gap),
      }
    }

    if self.mode == AnnotationMode::Evaluation {
      debug!("semantic roles in sentence: {:?}", sentence_roles);
      counters.all_semantic_arguments += sentence_roles.len() as u64;
    }
    predicates
  }

  fn has_verbal_edge(&self, sentence: &Sentence) -> bool {
    sentence.dependencies.iter().any(|dependency| {
      sentence
        .token(dependency.governor)
        .map_or(false, |governor| governor.pos == VERB_POS)
    })
  }

  /// Scores an edge against the first gold argument covering its dependent
  fn evaluate_edge(
    &self,
    sentence: &Sentence,
    dependency: &Dependency,
    sentence_roles: &mut BTreeSet<String>,
    counters: &mut EvaluationCounters,
  ) -> Result<Option<SemanticPredicate>, AnnotationGap>
  {
    let (governor, dependent) = match verbal_edge(sentence, dependency)? {
      Some(tokens) => tokens,
      None => return Ok(None),
    };
    let gold_arguments = select_covering(&sentence.gold_arguments, dependent.span);
    let first_gold = match gold_arguments.first() {
      Some(argument) => *argument,
      None => {
        debug!("no gold argument covers \"{}\"", sentence.covered_text(dependent.span));
        return Ok(None);
      },
    };
    for argument in &gold_arguments {
      if let Ok(gold) = GoldRole::parse(&argument.label, self.language) {
        if gold.verbal {
          sentence_roles.insert(argument.label.clone());
        }
      }
    }

    let gold = GoldRole::parse(&first_gold.label, self.language)?;
    if governor.lemma != gold.target {
      debug!(
        "governor and target do not match: {} {}",
        sentence.covered_text(governor.span),
        gold.target
      );
      return Ok(None);
    }
    let features = DependencyFeatures::extract(
      sentence,
      &dependency.relation,
      governor,
      dependent,
      self.language,
    )?;
    let candidates = match self.classify(&features, counters) {
      Some(candidates) => candidates,
      None => return Ok(None),
    };
    let translation = RoleTranslator::new(&self.mapping).translate(candidates, &gold.frame);
    if !translation.has_mapping() {
      return Ok(None);
    }

    counters.predicted_roles += 1;
    if translation.contains(&gold.role) {
      counters.correctly_predicted_roles += 1;
    }
    let record = format!(
      "{}\t gold:{}\t goldSpan:{}",
      edge_record(sentence, dependency, governor, dependent, &features, &translation),
      gold.role,
      sentence.covered_text(first_gold.span)
    );
    debug!("{}", record);
    self.diagnostics.record(&record);
    Ok(None)
  }

  /// Labels an edge of the disambiguated target verb, yielding a predicate with the
  /// innermost constituent covering the dependent as its argument
  fn predict_edge(
    &self,
    sentence: &Sentence,
    dependency: &Dependency,
    sense: &PredicateSense,
    counters: &mut EvaluationCounters,
  ) -> Result<Option<SemanticPredicate>, AnnotationGap>
  {
    let (governor, dependent) = match verbal_edge(sentence, dependency)? {
      Some(tokens) => tokens,
      None => return Ok(None),
    };
    if governor.lemma != sense.target {
      return Ok(None);
    }
    let features = DependencyFeatures::extract(
      sentence,
      &dependency.relation,
      governor,
      dependent,
      self.language,
    )?;
    let candidates = match self.classify(&features, counters) {
      Some(candidates) => candidates,
      None => return Ok(None),
    };
    let translation = RoleTranslator::new(&self.mapping).translate(candidates, &sense.frame);
    if translation.has_mapping() {
      counters.predicted_roles += 1;
    }

    let predicate = match translation.joined_frame_roles() {
      Some(role) => match select_covering(&sentence.constituents, dependent.span).last() {
        Some(constituent) => {
          debug!("argument phrase type: {}", constituent.label);
          Some(SemanticPredicate {
            span: sense.span,
            category: sense.frame.clone(),
            arguments: vec![SemanticArgument {
              span: constituent.span,
              role,
            }],
          })
        },
        None => {
          warn!(
            "no constituent covers \"{}\", argument not annotated",
            sentence.covered_text(dependent.span)
          );
          None
        },
      },
      None => None,
    };
    let record = edge_record(sentence, dependency, governor, dependent, &features, &translation);
    debug!("{}", record);
    self.diagnostics.record(&record);
    Ok(predicate)
  }

  fn classify(
    &self,
    features: &DependencyFeatures,
    counters: &mut EvaluationCounters,
  ) -> Option<CandidateRoles>
  {
    let candidates = self.classifier.classify(features);
    match candidates {
      Some(roles) => {
        debug!("{} -> {}", features.relation, roles);
        counters
          .set_of_predicted_roles
          .extend(roles.roles().iter().map(|role| role.to_string()));
      },
      None => debug!("{} -> {}", features.relation, NO_ROLE_LABEL),
    }
    candidates
  }
}

/// The governor and dependent of an edge, `None` unless the governor is a verb
fn verbal_edge<'s>(
  sentence: &'s Sentence,
  dependency: &Dependency,
) -> Result<Option<(&'s Token, &'s Token)>, AnnotationGap>
{
  let governor = sentence
    .token(dependency.governor)
    .ok_or(AnnotationGap::MissingToken(dependency.governor))?;
  if governor.pos != VERB_POS {
    return Ok(None);
  }
  let dependent = sentence
    .token(dependency.dependent)
    .ok_or(AnnotationGap::MissingToken(dependency.dependent))?;
  Ok(Some((governor, dependent)))
}

fn edge_record(
  sentence: &Sentence,
  dependency: &Dependency,
  governor: &Token,
  dependent: &Token,
  features: &DependencyFeatures,
  translation: &Translation,
) -> String
{
  format!(
    "dependency:{}\t governor:{}/{}\t dependent:{}/{}/{}/{}\t role:{}",
    dependency.relation,
    governor.lemma,
    features.governor_field,
    sentence.covered_text(dependent.span),
    features.dependent_pos,
    features.dependent_field,
    features.named_entity,
    translation
  )
}

/// End of run report
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
  /// language variant of the run
  pub language: Language,
  /// annotation mode of the run
  pub mode: AnnotationMode,
  /// final counts
  pub counters: EvaluationCounters,
}

impl RunSummary {
  /// correct / predicted, `None` if nothing was predicted
  pub fn precision(&self) -> Option<f64> { self.counters.precision() }

  /// The summary as written to the log and the diagnostic output
  pub fn lines(&self) -> Vec<String> {
    let mut lines = Vec::new();
    if self.mode == AnnotationMode::Evaluation {
      let precision = match self.precision() {
        Some(precision) => format!("{:.4}", precision),
        None => "undefined".to_string(),
      };
      lines.push(format!(
        "Correctly predicted roles:\t{}\t precision \t{}",
        self.counters.correctly_predicted_roles, precision
      ));
      lines.push(format!(
        "Total Number of gold semantic arguments that belong to a verbal predicate:\t{}",
        self.counters.all_semantic_arguments
      ));
    }
    lines.push(format!(
      "Total Number of automatically labeled arguments:\t{}",
      self.counters.predicted_roles
    ));
    let roles: Vec<&str> = self
      .counters
      .set_of_predicted_roles
      .iter()
      .map(String::as_str)
      .collect();
    lines.push(format!(
      "{}:\t[{}]",
      self.language.predicted_roles_label(),
      roles.join(", ")
    ));
    lines
  }
}
