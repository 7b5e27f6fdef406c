//! Corpus level evaluation counters, accumulated per worker and merged at the end of a run

use std::collections::BTreeSet;

/// Counts gathered while annotating a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationCounters {
  /// gold arguments of verbal predicates, distinct role strings per sentence
  pub all_semantic_arguments: u64,
  /// predictions for which the mapping had an entry
  pub predicted_roles: u64,
  /// predictions whose FrameNet roles contain the gold role
  pub correctly_predicted_roles: u64,
  /// every candidate VerbNet role produced so far
  pub set_of_predicted_roles: BTreeSet<String>,
}

impl EvaluationCounters {
  /// Zeroed counters
  pub fn new() -> Self { EvaluationCounters::default() }

  /// Adds up the counts of two workers
  pub fn merge(mut self, other: EvaluationCounters) -> EvaluationCounters {
    self.all_semantic_arguments += other.all_semantic_arguments;
    self.predicted_roles += other.predicted_roles;
    self.correctly_predicted_roles += other.correctly_predicted_roles;
    self.set_of_predicted_roles.extend(other.set_of_predicted_roles);
    self
  }

  /// correct / predicted, `None` while nothing was predicted
  pub fn precision(&self) -> Option<f64> {
    if self.predicted_roles == 0 {
      None
    } else {
      Some(self.correctly_predicted_roles as f64 / self.predicted_roles as f64)
    }
  }
}
