//! # Rule-based semantic role labeling
//! Labels the syntactic dependents of verbs with FrameNet roles: an ordered rule cascade maps
//! each dependency edge to candidate VerbNet roles, which the SemLink VerbNet-FrameNet role
//! mapping then translates into the roles of the verb's frame.
//!
//! The annotator consumes sentences already carrying dependency, part-of-speech, lemma, named
//! entity, semantic field and word sense layers (see `sentence`), and either scores its
//! predictions against gold arguments or adds predicate-argument annotations.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

#[macro_use]
extern crate lazy_static;

pub mod annotator;
pub mod error;
pub mod features;
pub mod language;
pub mod rules;
pub mod semlink;
pub mod sentence;
pub mod translator;
