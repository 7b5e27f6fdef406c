use std::process;

use clap::{Parser, ValueEnum};
use log::{error, info};

use srl_rules::features::DependencyFeatures;
use srl_rules::language::Language;
use srl_rules::rules::NO_ROLE_LABEL;
use srl_rules::semlink::SemLinkMapping;
use srl_rules::translator::RoleTranslator;

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
  English,
  German,
}

impl From<LanguageArg> for Language {
  fn from(language: LanguageArg) -> Language {
    match language {
      LanguageArg::English => Language::English,
      LanguageArg::German => Language::German,
    }
  }
}

/// Classifies a single dependency and translates the candidate roles into FrameNet roles
#[derive(Parser)]
#[command(name = "srl-rules")]
#[command(about = "Probe the role labeling rules and the SemLink role mapping")]
struct Args {
  /// Directory holding VN-FNRoleMapping.txt
  #[arg(long)]
  mapping_dir: String,

  /// Rule table to use
  #[arg(long, value_enum, default_value = "english")]
  language: LanguageArg,

  /// Dependency relation, e.g. nsubj or SB
  #[arg(long)]
  relation: String,

  /// Part of speech of the dependent
  #[arg(long, default_value = "")]
  dependent_pos: String,

  /// Semantic field of the dependent
  #[arg(long, default_value = "")]
  dependent_field: String,

  /// Named entity tag of the dependent
  #[arg(long)]
  named_entity: Option<String>,

  /// Semantic field of the governing verb
  #[arg(long, default_value = "")]
  governor_field: String,

  /// FrameNet frame to translate into
  #[arg(long)]
  frame: Option<String>,
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let args = Args::parse();
  let language = Language::from(args.language);

  let mapping = match SemLinkMapping::load_from_dir(&args.mapping_dir) {
    Ok(mapping) => mapping,
    Err(e) => {
      error!("{}", e);
      process::exit(1);
    },
  };

  let mut features = DependencyFeatures::new(&args.relation)
    .with_dependent_pos(&args.dependent_pos)
    .with_dependent_field(&args.dependent_field)
    .with_governor_field(&args.governor_field);
  if let Some(ref tag) = args.named_entity {
    features = features.with_named_entity(&language.normalize_named_entity(tag));
  }

  let classifier = language.classifier();
  let candidates = match classifier.classify(&features) {
    Some(candidates) => candidates,
    None => {
      println!("{}", NO_ROLE_LABEL);
      return;
    },
  };
  if let Some(index) = classifier.matching_rule(&features) {
    info!("rule {} of the {} table fired", index, language);
  }
  match args.frame {
    Some(ref frame) => {
      let frame = language.normalize_frame(frame);
      println!("{}", RoleTranslator::new(&mapping).translate(candidates, &frame));
    },
    None => println!("{}", candidates),
  }
}
