use srl_rules::features::DependencyFeatures;
use srl_rules::language::Language;
use srl_rules::rules::{english, german, RuleTier};

fn english_roles(features: &DependencyFeatures) -> Option<Vec<&'static str>> {
  Language::English
    .classifier()
    .classify(features)
    .map(|candidates| candidates.roles().to_vec())
}

fn german_roles(features: &DependencyFeatures) -> Option<Vec<&'static str>> {
  Language::German
    .classifier()
    .classify(features)
    .map(|candidates| candidates.roles().to_vec())
}

#[test]
fn tables_are_ordered_by_tier() {
  for table in &[english::RULES, german::RULES] {
    assert!(table.windows(2).all(|pair| pair[0].tier <= pair[1].tier));
    for rule in table.iter() {
      assert!(!rule.roles.is_empty());
      assert_eq!(rule.relation.is_none(), rule.tier == RuleTier::FieldOverride);
    }
  }
}

#[test]
fn mental_governor_subject_is_experiencer() {
  let features = DependencyFeatures::new("nsubj")
    .with_dependent_pos("NP")
    .with_dependent_field("person")
    .with_governor_field("cognition");
  assert_eq!(english_roles(&features), Some(vec!["Experiencer", "Pivot"]));

  let features = features.with_governor_field("communication");
  assert_eq!(
    english_roles(&features),
    Some(vec!["Agent", "Co-Agent", "Pivot"])
  );
}

#[test]
fn possession_object_is_goal() {
  let features = DependencyFeatures::new("dobj")
    .with_dependent_pos("NN")
    .with_dependent_field("artifact")
    .with_governor_field("possession");
  assert_eq!(english_roles(&features), Some(vec!["Goal"]));
}

#[test]
fn location_field_preempts_relation_rules() {
  for relation in &["nsubj", "dobj", "prep_with", "prep_at", "xcomp", "unknown"] {
    let features = DependencyFeatures::new(relation)
      .with_dependent_pos("NN")
      .with_dependent_field("location")
      .with_governor_field("possession");
    assert_eq!(
      english_roles(&features),
      Some(vec!["Location", "InitialLocation"]),
      "relation {}",
      relation
    );
  }
}

#[test]
fn location_entity_preempts_relation_rules() {
  let features = DependencyFeatures::new("nsubj")
    .with_dependent_pos("NP")
    .with_dependent_field("group")
    .with_named_entity("location")
    .with_governor_field("cognition");
  assert_eq!(
    english_roles(&features),
    Some(vec!["Location", "InitialLocation"])
  );
}

#[test]
fn first_matching_rule_wins() {
  let classifier = Language::English.classifier();
  let specific = DependencyFeatures::new("prep_at")
    .with_dependent_pos("CARD")
    .with_governor_field("perception");
  let fallback = specific.clone().with_governor_field("motion");
  let general = fallback.clone().with_dependent_pos("NN");

  let specific_rule = classifier.matching_rule(&specific).unwrap();
  let fallback_rule = classifier.matching_rule(&fallback).unwrap();
  let general_rule = classifier.matching_rule(&general).unwrap();
  assert!(specific_rule < fallback_rule && fallback_rule < general_rule);
  assert_eq!(english_roles(&specific), Some(vec!["Stimulus"]));
  assert_eq!(english_roles(&fallback), Some(vec!["Value", "Asset"]));
  assert_eq!(english_roles(&general), Some(vec!["Location"]));
}

#[test]
fn guards_are_conjunctive() {
  let both = DependencyFeatures::new("prep_in")
    .with_dependent_pos("NN")
    .with_governor_field("communication");
  assert_eq!(english_roles(&both), Some(vec!["Theme", "Co-Theme", "Topic"]));

  // part of speech flipped: falls through to the proper noun rule
  let pos_flipped = both
    .clone()
    .with_dependent_pos("NP")
    .with_governor_field("stative");
  assert_eq!(english_roles(&pos_flipped), Some(vec!["Location"]));

  // governor field flipped: falls through to the catch-all
  let field_flipped = both.with_governor_field("motion");
  assert_eq!(english_roles(&field_flipped), Some(vec!["Location"]));
  let catch_all = english::RULES
    .iter()
    .position(|rule| rule.relation == Some("prep_in") && rule.guards.is_empty());
  assert_eq!(
    Language::English.classifier().matching_rule(&field_flipped),
    catch_all
  );
}

#[test]
fn unmatched_features_get_no_role() {
  let unknown = DependencyFeatures::new("det")
    .with_dependent_pos("ART")
    .with_dependent_field("artifact");
  assert_eq!(english_roles(&unknown), None);

  // prep_before only fires for numbers
  let before = DependencyFeatures::new("prep_before")
    .with_dependent_pos("NN")
    .with_dependent_field("act");
  assert_eq!(english_roles(&before), None);
  assert_eq!(english_roles(&before.with_dependent_pos("CARD")), Some(vec!["Time"]));
}

#[test]
fn people_are_not_instruments() {
  let tool = DependencyFeatures::new("prep_with")
    .with_dependent_pos("NN")
    .with_dependent_field("artifact");
  assert_eq!(english_roles(&tool), Some(vec!["Instrument"]));
  assert_eq!(english_roles(&tool.clone().with_dependent_field("person")), None);
  assert_eq!(english_roles(&tool.with_named_entity("group")), None);
}

#[test]
fn classification_is_repeatable() {
  let classifier = Language::English.classifier();
  let features = DependencyFeatures::new("iobj")
    .with_dependent_pos("NP")
    .with_dependent_field("person")
    .with_governor_field("communication");
  let first = classifier.classify(&features);
  assert_eq!(first, classifier.classify(&features));
  assert_eq!(first.map(|c| c.to_string()), Some("Recipient".to_string()));
}

#[test]
fn german_subjects() {
  let subject = DependencyFeatures::new("SB")
    .with_dependent_pos("NE")
    .with_dependent_field("Mensch")
    .with_governor_field("Kognition");
  assert_eq!(german_roles(&subject), Some(vec!["Experiencer", "Pivot"]));
  assert_eq!(
    german_roles(&subject.with_governor_field("Kommunikation")),
    Some(vec!["Agent", "Co-Agent", "Pivot"])
  );
}

#[test]
fn german_objects() {
  let object = DependencyFeatures::new("OA")
    .with_dependent_pos("NN")
    .with_dependent_field("Artefakt")
    .with_governor_field("Besitz");
  assert_eq!(german_roles(&object), Some(vec!["Goal"]));
  assert_eq!(
    german_roles(&object.clone().with_governor_field("Bewegung")),
    Some(vec!["Patient", "Co-Patient", "Beneficiary"])
  );
  let dative = DependencyFeatures::new("DA").with_governor_field("Kommunikation");
  assert_eq!(german_roles(&dative), Some(vec!["Recipient"]));
}

#[test]
fn german_place_overrides() {
  let by_field = DependencyFeatures::new("OA")
    .with_dependent_field("Ort")
    .with_governor_field("Besitz");
  assert_eq!(
    german_roles(&by_field),
    Some(vec!["Location", "InitialLocation"])
  );
  let by_entity = DependencyFeatures::new("SB")
    .with_dependent_field("Gruppe")
    .with_named_entity("i-loc");
  assert_eq!(
    german_roles(&by_entity),
    Some(vec!["Location", "InitialLocation"])
  );
  // English vocabulary means nothing to the German table
  assert_eq!(german_roles(&DependencyFeatures::new("nsubj")), None);
}
