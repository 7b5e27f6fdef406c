//! Ordered rule cascades mapping a dependency's features to candidate VerbNet roles.
//!
//! A rule table is a static slice of `Rule`s. Classification walks the table in order and the
//! first rule whose guards all hold wins; there is no scoring and no backtracking. Tables start
//! with the semantic field overrides (`RuleTier::FieldOverride`), which apply to every relation,
//! followed by the relation specific rules (`RuleTier::Relation`), where later rules for a
//! relation are fallbacks for the more specific ones before them. If nothing matches, the
//! dependent gets no role.

pub mod english;
pub mod german;

use std::fmt;

use crate::features::DependencyFeatures;

/// Separates the roles of a candidate set in its string form
pub const ROLE_SEPARATOR: &str = "%";
/// How the absence of a candidate role is written in diagnostics
pub const NO_ROLE_LABEL: &str = "noRoleLabel";

pub(crate) const AGENT: &[&str] = &["Agent", "Co-Agent", "Pivot"];
pub(crate) const EXPERIENCER: &[&str] = &["Experiencer", "Pivot"];
pub(crate) const PATIENT: &[&str] = &["Patient", "Co-Patient", "Beneficiary"];
pub(crate) const THEME: &[&str] = &["Theme", "Co-Theme", "Topic"];
pub(crate) const ATTRIBUTE: &[&str] = &["Attribute", "Predicate"];
pub(crate) const VALUE: &[&str] = &["Value", "Asset"];
pub(crate) const LOCATION_OR_ORIGIN: &[&str] = &["Location", "InitialLocation"];
pub(crate) const LOCATION: &[&str] = &["Location"];
pub(crate) const TIME: &[&str] = &["Time"];
pub(crate) const DESTINATION: &[&str] = &["Destination"];
pub(crate) const SOURCE: &[&str] = &["Source"];
pub(crate) const RECIPIENT: &[&str] = &["Recipient"];
pub(crate) const INSTRUMENT: &[&str] = &["Instrument"];
pub(crate) const STIMULUS: &[&str] = &["Stimulus"];
pub(crate) const CAUSE: &[&str] = &["Cause"];
pub(crate) const EXTENT: &[&str] = &["Extent"];
pub(crate) const GOAL: &[&str] = &["Goal"];
pub(crate) const PREDICATE: &[&str] = &["Predicate"];

/// Precedence class of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleTier {
  /// Semantic field of the dependent decides, whatever the relation
  FieldOverride,
  /// Keyed on the dependency relation
  Relation,
}

/// A single condition on the features of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
  /// The dependent has this part of speech
  DependentPos(&'static str),
  /// The dependent has this semantic field
  DependentField(&'static str),
  /// The dependent has this named entity tag
  NamedEntity(&'static str),
  /// The governor's semantic field is one of these
  GovernorField(&'static [&'static str]),
  /// The governor's semantic field is none of these
  NotGovernorField(&'static [&'static str]),
  /// Neither the semantic field nor the named entity tag of the dependent is one of these
  NotDependent(&'static [&'static str]),
  /// At least one of the guards holds
  AnyOf(&'static [Guard]),
}

impl Guard {
  /// Checks the guard against the features of a dependency
  pub fn holds(&self, features: &DependencyFeatures) -> bool {
    match *self {
      Guard::DependentPos(pos) => features.dependent_pos == pos,
      Guard::DependentField(field) => features.dependent_field == field,
      Guard::NamedEntity(tag) => features.named_entity == tag,
      Guard::GovernorField(fields) => fields.contains(&features.governor_field.as_str()),
      Guard::NotGovernorField(fields) => !fields.contains(&features.governor_field.as_str()),
      Guard::NotDependent(labels) => {
        !labels.contains(&features.dependent_field.as_str())
          && !labels.contains(&features.named_entity.as_str())
      },
      Guard::AnyOf(guards) => guards.iter().any(|guard| guard.holds(features)),
    }
  }
}

/// One row of a rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  /// precedence class
  pub tier: RuleTier,
  /// dependency relation the rule is keyed on, `None` for field overrides
  pub relation: Option<&'static str>,
  /// conjunctive conditions besides the relation
  pub guards: &'static [Guard],
  /// the candidate roles assigned when the rule fires, never empty
  pub roles: &'static [&'static str],
}

impl Rule {
  /// A semantic field override, tried before any relation rule
  pub const fn field_override(guards: &'static [Guard], roles: &'static [&'static str]) -> Rule {
    Rule {
      tier: RuleTier::FieldOverride,
      relation: None,
      guards,
      roles,
    }
  }

  /// A rule keyed on a dependency relation
  pub const fn relation(
    relation: &'static str,
    guards: &'static [Guard],
    roles: &'static [&'static str],
  ) -> Rule
  {
    Rule {
      tier: RuleTier::Relation,
      relation: Some(relation),
      guards,
      roles,
    }
  }

  /// true if the relation and all guards hold
  pub fn matches(&self, features: &DependencyFeatures) -> bool {
    self
      .relation
      .map_or(true, |relation| relation == features.relation)
      && self.guards.iter().all(|guard| guard.holds(features))
  }

  /// The roles of the rule as a candidate set
  pub fn candidates(&self) -> CandidateRoles { CandidateRoles(self.roles) }
}

/// An ordered, non-empty set of equally plausible VerbNet roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateRoles(&'static [&'static str]);

impl CandidateRoles {
  /// The roles, in table order
  pub fn roles(&self) -> &'static [&'static str] { self.0 }

  /// true if `role` is one of the candidates
  pub fn contains(&self, role: &str) -> bool { self.0.contains(&role) }
}

impl fmt::Display for CandidateRoles {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for (index, role) in self.0.iter().enumerate() {
      if index > 0 {
        write!(f, "{}", ROLE_SEPARATOR)?;
      }
      f.write_str(role)?;
    }
    Ok(())
  }
}

/// Runs a rule table over dependency features
#[derive(Debug, Clone, Copy)]
pub struct RoleClassifier {
  rules: &'static [Rule],
}

impl RoleClassifier {
  /// A classifier over `rules`, which must be ordered by tier
  pub fn new(rules: &'static [Rule]) -> Self { RoleClassifier { rules } }

  /// The rule table
  pub fn rules(&self) -> &'static [Rule] { self.rules }

  /// Index of the first rule matching `features`
  pub fn matching_rule(&self, features: &DependencyFeatures) -> Option<usize> {
    self.rules.iter().position(|rule| rule.matches(features))
  }

  /// The candidate roles of the first matching rule, `None` if no rule matches
  pub fn classify(&self, features: &DependencyFeatures) -> Option<CandidateRoles> {
    self
      .matching_rule(features)
      .map(|index| self.rules[index].candidates())
  }
}
