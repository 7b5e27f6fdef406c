use srl_rules::features::DependencyFeatures;
use srl_rules::language::Language;
use srl_rules::rules::{CandidateRoles, Rule};
use srl_rules::semlink::SemLinkMapping;
use srl_rules::translator::{RoleTranslator, NO_MAPPING_LABEL};

fn mapping() -> SemLinkMapping { SemLinkMapping::load_from_dir("tests/resources").unwrap() }

fn subject_of_communication() -> CandidateRoles {
  let features = DependencyFeatures::new("nsubj")
    .with_dependent_pos("NP")
    .with_dependent_field("person")
    .with_governor_field("communication");
  Language::English.classifier().classify(&features).unwrap()
}

#[test]
fn speaker_survives_unmapped_alternatives() {
  let mapping = mapping();
  let candidates = subject_of_communication();
  assert_eq!(candidates.to_string(), "Agent%Co-Agent%Pivot");

  let translation = RoleTranslator::new(&mapping).translate(candidates, "Statement");
  assert!(translation.has_mapping());
  assert!(translation.contains("Speaker"));
  assert_eq!(translation.joined_frame_roles(), Some("Speaker".to_string()));
  assert_eq!(translation.to_string(), "Agent%Co-Agent%Pivot/[Speaker]");
}

#[test]
fn roles_of_all_candidates_are_merged() {
  let mapping = mapping();
  let candidates = Rule::relation("iobj", &[], &["Recipient", "Agent"]).candidates();
  let translation = RoleTranslator::new(&mapping).translate(candidates, "Statement");
  assert!(translation.contains("Addressee"));
  assert!(translation.contains("Speaker"));
  assert_eq!(
    translation.joined_frame_roles(),
    Some("Addressee%Speaker".to_string())
  );
}

#[test]
fn roles_of_all_classes_are_merged() {
  let mut mapping = SemLinkMapping::new();
  mapping.insert("Statement", "37.7", "Agent", "Speaker");
  mapping.insert("Statement", "48.1.2", "Agent", "Medium");
  let translation =
    RoleTranslator::new(&mapping).translate(subject_of_communication(), "Statement");
  assert_eq!(translation.frame_role_label(), "[Medium, Speaker]");
}

#[test]
fn unmapped_candidates_have_no_entry() {
  let mapping = mapping();
  let translator = RoleTranslator::new(&mapping);
  let instrument = Rule::relation("prep_with", &[], &["Instrument"]).candidates();

  let translation = translator.translate(instrument, "Statement");
  assert!(!translation.has_mapping());
  assert_eq!(translation.frame_roles, None);
  assert!(!translation.contains("Instrument"));
  assert_eq!(translation.to_string(), format!("Instrument/{}", NO_MAPPING_LABEL));

  // frame unknown to the mapping
  let translation = translator.translate(subject_of_communication(), "Desiring");
  assert!(!translation.has_mapping());
  assert_eq!(translation.joined_frame_roles(), None);
}

#[test]
fn membership_is_exact() {
  let mapping = mapping();
  let translation =
    RoleTranslator::new(&mapping).translate(subject_of_communication(), "Statement");
  assert!(!translation.contains("Speak"));
  assert!(!translation.contains("Agent"));
}

#[test]
fn translation_is_repeatable() {
  let mapping = mapping();
  let translator = RoleTranslator::new(&mapping);
  let first = translator.translate(subject_of_communication(), "Getting");
  let second = translator.translate(subject_of_communication(), "Getting");
  assert_eq!(first, second);
  assert!(first.contains("Recipient"));
}
