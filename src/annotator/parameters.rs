//! The `annotator::parameters` submodule holds the configuration surface of a `RoleAnnotator`

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::language::Language;

/// What the annotator does with its predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationMode {
  /// Score predictions against gold semantic arguments
  Evaluation,
  /// Add predicate and argument annotations to the sentences
  Prediction,
}

impl AnnotationMode {
  /// short name for messages
  pub fn name(self) -> &'static str {
    match self {
      AnnotationMode::Evaluation => "evaluation",
      AnnotationMode::Prediction => "prediction",
    }
  }
}

/// Parameters of a `RoleAnnotator`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorParameters {
  /// language variant, selects the rule table and the feature vocabulary
  pub language: Language,
  /// evaluation or prediction. Mandatory for English, German only evaluates
  pub mode: Option<AnnotationMode>,
  /// file receiving the tab separated diagnostic trail
  pub output_file: Option<PathBuf>,
  /// directory holding the SemLink role mapping resource
  pub mapping_location: Option<PathBuf>,
}

impl Default for AnnotatorParameters {
  /// English, nothing configured
  fn default() -> AnnotatorParameters {
    AnnotatorParameters {
      language: Language::English,
      mode: None,
      output_file: None,
      mapping_location: None,
    }
  }
}

impl AnnotatorParameters {
  /// English annotator in the given mode
  pub fn english<P, Q>(mode: AnnotationMode, output_file: P, mapping_location: Q) -> Self
  where
    P: Into<PathBuf>,
    Q: Into<PathBuf>,
  {
    AnnotatorParameters {
      language: Language::English,
      mode: Some(mode),
      output_file: Some(output_file.into()),
      mapping_location: Some(mapping_location.into()),
    }
  }

  /// German annotator, which always evaluates
  pub fn german<P, Q>(output_file: P, mapping_location: Q) -> Self
  where
    P: Into<PathBuf>,
    Q: Into<PathBuf>,
  {
    AnnotatorParameters {
      language: Language::German,
      mode: Some(AnnotationMode::Evaluation),
      output_file: Some(output_file.into()),
      mapping_location: Some(mapping_location.into()),
    }
  }

  /// Validates the parameters, returning the effective mode, the output file and the mapping
  /// location. Reports the first problem found.
  pub fn check(&self) -> Result<(AnnotationMode, PathBuf, PathBuf), ConfigError> {
    let mode = match (self.language, self.mode) {
      (_, Some(AnnotationMode::Prediction)) if !self.language.supports_prediction() => {
        return Err(ConfigError::UnsupportedMode {
          language: self.language.name(),
          mode: AnnotationMode::Prediction.name(),
        });
      },
      (_, Some(mode)) => mode,
      (Language::German, None) => AnnotationMode::Evaluation,
      (Language::English, None) => return Err(ConfigError::MissingParameter("mode")),
    };
    let output_file = self
      .output_file
      .clone()
      .ok_or(ConfigError::MissingParameter("output_file"))?;
    let mapping_location = self
      .mapping_location
      .clone()
      .ok_or(ConfigError::MissingParameter("mapping_location"))?;
    Ok((mode, output_file, mapping_location))
  }
}
