//! Rule table for English: Stanford collapsed dependency relations, WordNet supersenses as
//! semantic fields (`location`, `cognition`, ...) and lower-cased Stanford NER tags.

use super::Guard::*;
use super::*;

const PERSON_OR_GROUP: &[&str] = &["person", "group"];
const MOTION_OR_STATIVE: &[&str] = &["motion", "stative"];
const COMMUNICATION_OR_COGNITION: &[&str] = &["communication", "cognition"];
const MENTAL: &[&str] = &["emotion", "perception", "cognition"];

/// The English cascade, in evaluation order
pub static RULES: &[Rule] = &[
  Rule::field_override(
    &[AnyOf(&[DependentField("location"), NamedEntity("location")])],
    LOCATION_OR_ORIGIN,
  ),
  Rule::field_override(&[DependentField("time")], TIME),
  Rule::field_override(&[DependentField("quantity")], VALUE),
  Rule::relation("prep_with", &[NotDependent(PERSON_OR_GROUP)], INSTRUMENT),
  Rule::relation("prep_to", &[NotDependent(PERSON_OR_GROUP)], DESTINATION),
  Rule::relation("prep_to", &[], PATIENT),
  Rule::relation("prep_against", &[], RECIPIENT),
  Rule::relation("prep_after", &[], TIME),
  Rule::relation("prepc_after", &[], TIME),
  Rule::relation("prep_before", &[DependentPos("CARD")], TIME),
  Rule::relation("prepc_before", &[], TIME),
  Rule::relation("prep_at", &[GovernorField(&["perception"])], STIMULUS),
  Rule::relation("prep_at", &[GovernorField(&["possession"])], VALUE),
  Rule::relation("prep_at", &[DependentPos("CARD")], VALUE),
  Rule::relation("prep_at", &[], LOCATION),
  Rule::relation("prep_under", &[NotGovernorField(MOTION_OR_STATIVE)], THEME),
  Rule::relation("prep_as", &[GovernorField(COMMUNICATION_OR_COGNITION)], ATTRIBUTE),
  Rule::relation("prep_for", &[NotDependent(PERSON_OR_GROUP)], CAUSE),
  Rule::relation("prep_for", &[], PATIENT),
  Rule::relation("prep_on", &[GovernorField(&["body"])], LOCATION),
  Rule::relation("prep_on", &[GovernorField(&["contact"])], DESTINATION),
  Rule::relation("prep_on", &[GovernorField(&["communication"])], TIME),
  Rule::relation("prep_on", &[NotGovernorField(MOTION_OR_STATIVE)], THEME),
  Rule::relation("prep_on", &[], LOCATION),
  Rule::relation("prep_from", &[GovernorField(&["motion"])], SOURCE),
  Rule::relation("prep_away_from", &[], SOURCE),
  Rule::relation("prep_through", &[GovernorField(&["motion"])], LOCATION),
  Rule::relation("prep_below", &[GovernorField(&["motion"])], DESTINATION),
  Rule::relation("prep_into", &[GovernorField(&["motion"])], DESTINATION),
  Rule::relation("prep_into", &[], LOCATION),
  Rule::relation("prepc_on", &[GovernorField(&["cognition"])], THEME),
  Rule::relation("prep_over", &[GovernorField(&["communication"])], THEME),
  Rule::relation(
    "prep_in",
    &[DependentPos("NN"), NotGovernorField(&["motion"])],
    THEME,
  ),
  Rule::relation("prep_in", &[NotGovernorField(MOTION_OR_STATIVE)], THEME),
  Rule::relation("prep_in", &[DependentPos("CARD")], TIME),
  Rule::relation("prep_in", &[DependentPos("NP")], LOCATION),
  Rule::relation("prep_in", &[], LOCATION),
  Rule::relation("prep_prior_to", &[DependentPos("CARD")], TIME),
  Rule::relation("prep_during", &[], TIME),
  Rule::relation("prep_of", &[GovernorField(COMMUNICATION_OR_COGNITION)], THEME),
  Rule::relation("prepc_of", &[], CAUSE),
  Rule::relation("prep_over", &[GovernorField(&["motion"])], LOCATION),
  Rule::relation("nsubj", &[GovernorField(MENTAL)], EXPERIENCER),
  Rule::relation("nsubj", &[], AGENT),
  Rule::relation("agent", &[], AGENT),
  Rule::relation("nsubjpass", &[], PATIENT),
  Rule::relation("csubj", &[], THEME),
  Rule::relation("iobj", &[GovernorField(&["communication"])], RECIPIENT),
  Rule::relation("iobj", &[], PATIENT),
  Rule::relation("dobj", &[GovernorField(&["motion", "change"])], EXTENT),
  Rule::relation("dobj", &[GovernorField(&["possession"])], GOAL),
  Rule::relation("dobj", &[GovernorField(&["communication"])], PREDICATE),
  Rule::relation("dobj", &[], PATIENT),
  Rule::relation("obj", &[], THEME),
  Rule::relation("ccomp", &[], THEME),
  Rule::relation("xcomp", &[], THEME),
];
