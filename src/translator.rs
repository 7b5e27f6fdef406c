//! Translation of candidate VerbNet roles into FrameNet roles of a given frame.
//!
//! The frame selects its VerbNet classes from the SemLink mapping; every candidate role is looked
//! up in the role map of every class and all FrameNet roles found are merged. Candidate roles
//! without an entry contribute nothing. If nothing is found at all, the translation carries no
//! mapping entry, which is distinct from (and never represented as) an empty role set.

use std::collections::BTreeSet;
use std::fmt;

use crate::rules::{CandidateRoles, ROLE_SEPARATOR};
use crate::semlink::SemLinkMapping;

/// How a missing mapping entry is written in diagnostics
pub const NO_MAPPING_LABEL: &str = "noSemlinkEntry";

/// Candidate VerbNet roles together with the FrameNet roles they translate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
  /// the translated candidates
  pub candidates: CandidateRoles,
  /// the FrameNet roles, `None` if the mapping has no entry for any candidate
  pub frame_roles: Option<BTreeSet<String>>,
}

impl Translation {
  /// true if at least one candidate role has a FrameNet counterpart in the frame
  pub fn has_mapping(&self) -> bool { self.frame_roles.is_some() }

  /// true if `role` is among the translated FrameNet roles
  pub fn contains(&self, role: &str) -> bool {
    self
      .frame_roles
      .as_ref()
      .map_or(false, |roles| roles.contains(role))
  }

  /// The FrameNet roles joined by the role separator, `None` without mapping entry
  pub fn joined_frame_roles(&self) -> Option<String> {
    self.frame_roles.as_ref().map(|roles| {
      roles
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(ROLE_SEPARATOR)
    })
  }

  /// The FrameNet roles as written in diagnostics, e.g. `[Message, Speaker]`
  pub fn frame_role_label(&self) -> String {
    match self.frame_roles {
      Some(ref roles) => format!(
        "[{}]",
        roles.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
      ),
      None => NO_MAPPING_LABEL.to_string(),
    }
  }
}

impl fmt::Display for Translation {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}/{}", self.candidates, self.frame_role_label())
  }
}

/// Looks candidate roles up in a SemLink mapping
#[derive(Debug, Clone, Copy)]
pub struct RoleTranslator<'m> {
  mapping: &'m SemLinkMapping,
}

impl<'m> RoleTranslator<'m> {
  /// A translator over `mapping`
  pub fn new(mapping: &'m SemLinkMapping) -> Self { RoleTranslator { mapping } }

  /// Translates `candidates` into FrameNet roles of `frame`, merging the results of all
  /// candidate roles and all VerbNet classes of the frame. A dependent without candidate roles
  /// has nothing to translate; callers keep that absence as is.
  pub fn translate(&self, candidates: CandidateRoles, frame: &str) -> Translation {
    let mut frame_roles = BTreeSet::new();
    let classes = self.mapping.lookup_classes_for_frame(frame);
    for role in candidates.roles() {
      for vn_class in classes {
        let found = self
          .mapping
          .lookup_role_map(frame, vn_class)
          .and_then(|role_map| role_map.get(*role));
        if let Some(fn_roles) = found {
          frame_roles.extend(fn_roles.iter().cloned());
        }
      }
    }
    Translation {
      candidates,
      frame_roles: if frame_roles.is_empty() {
        None
      } else {
        Some(frame_roles)
      },
    }
  }
}
