//! Rule table for German: TIGER-style dependency labels (`SB`, `OA`, `DA`, ...), German semantic
//! field names (`Ort`, `Kognition`, ...) and lower-cased IOB named entity tags.

use super::Guard::*;
use super::*;

/// The German cascade, in evaluation order
pub static RULES: &[Rule] = &[
  Rule::field_override(
    &[AnyOf(&[DependentField("Ort"), NamedEntity("i-loc")])],
    LOCATION_OR_ORIGIN,
  ),
  Rule::field_override(&[DependentField("Zeit")], TIME),
  Rule::field_override(&[DependentField("Menge")], VALUE),
  // instrumental
  Rule::relation("MI", &[], INSTRUMENT),
  // directional modifier
  Rule::relation("MW", &[], DESTINATION),
  // genitive object
  Rule::relation("OG", &[], THEME),
  // prepositional object
  Rule::relation("OP", &[GovernorField(&["Perzeption"])], STIMULUS),
  Rule::relation("NMC", &[], VALUE),
  // locative
  Rule::relation("ML", &[], LOCATION),
  Rule::relation("OP", &[], THEME),
  // second accusative
  Rule::relation(
    "OA2",
    &[GovernorField(&["Kommunikation", "Kognition"])],
    ATTRIBUTE,
  ),
  Rule::relation(
    "SB",
    &[GovernorField(&["Gefuehl", "Perzeption", "Kognition"])],
    EXPERIENCER,
  ),
  Rule::relation("SB", &[], AGENT),
  // passivised subject
  Rule::relation("SBP", &[], PATIENT),
  // dative object
  Rule::relation("DA", &[GovernorField(&["Kommunikation"])], RECIPIENT),
  Rule::relation("DA", &[], PATIENT),
  // accusative object
  Rule::relation("OA", &[GovernorField(&["Veraenderung"])], EXTENT),
  Rule::relation("OA", &[GovernorField(&["Besitz"])], GOAL),
  Rule::relation("OA", &[GovernorField(&["Kommunikation"])], PREDICATE),
  Rule::relation("OA", &[], PATIENT),
  Rule::relation("OA2", &[], THEME),
  // clausal object
  Rule::relation("OC", &[], THEME),
  // reported speech
  Rule::relation("RS", &[], THEME),
];
