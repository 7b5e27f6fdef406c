//! Error types shared by the mapping store, the configuration layer and the annotator

use std::path::PathBuf;

use thiserror::Error;

/// Failures loading the SemLink role mapping resource. These abort startup.
#[derive(Debug, Error)]
pub enum ResourceError {
  /// The mapping file does not exist
  #[error("role mapping resource not found: {}", .0.display())]
  Missing(PathBuf),
  /// The mapping file exists but could not be read as an XML document
  #[error("could not parse role mapping resource {}: {reason}", .path.display())]
  Unparseable {
    /// location of the resource
    path: PathBuf,
    /// parser diagnostic
    reason: String,
  },
}

/// Invalid or incomplete annotator configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// A mandatory parameter was not supplied
  #[error("mandatory parameter \"{0}\" is not set")]
  MissingParameter(&'static str),
  /// The requested mode is not available for the language variant
  #[error("{mode} mode is not supported for the {language} annotator")]
  UnsupportedMode {
    /// language variant name
    language: &'static str,
    /// annotation mode name
    mode: &'static str,
  },
}

/// Everything that can go wrong in `RoleAnnotator::initialize`
#[derive(Debug, Error)]
pub enum InitializationError {
  /// bad configuration
  #[error(transparent)]
  Config(#[from] ConfigError),
  /// missing or unreadable mapping resource
  #[error(transparent)]
  Resource(#[from] ResourceError),
}

/// An annotation the annotator needs for a dependency edge is absent or unusable.
/// The edge is skipped, the sentence and the run continue.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotationGap {
  /// A dependency points at a token index outside the sentence
  #[error("dependency refers to missing token {0}")]
  MissingToken(usize),
  /// No semantic field annotation is covered by the token
  #[error("no semantic field annotated for \"{0}\"")]
  MissingSemanticField(String),
  /// The sentence carries no word sense disambiguation target
  #[error("no WSD item annotated in sentence")]
  MissingWsdItem,
  /// The sentence carries no FrameNet sense
  #[error("no sense annotated in sentence")]
  MissingSense,
  /// The sense id does not have the `item%%lemma%Frame%id` shape
  #[error("malformed sense id \"{0}\"")]
  MalformedSense(String),
  /// The gold role does not have the `Role%lemma.v%id%Frame` shape
  #[error("malformed gold role \"{0}\"")]
  MalformedGoldRole(String),
}
