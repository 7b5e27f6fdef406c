//! Loading and lookup of the SemLink VerbNet-FrameNet role mapping.
//!
//! The resource lists, for each (FrameNet frame, VerbNet class) pair, the correspondences between
//! VerbNet thematic roles and FrameNet frame elements:
//!
//! ```xml
//! <verbnet-framenet_RoleMappings>
//!   <vncls class="37.7" fnframe="Statement">
//!     <roles>
//!       <role fnrole="Speaker" vnrole="Agent"/>
//!     </roles>
//!   </vncls>
//! </verbnet-framenet_RoleMappings>
//! ```
//!
//! Loading is lenient: malformed records are skipped with a warning, only a missing or unreadable
//! file is an error. The loaded mapping is immutable and can be shared between threads.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use libxml::parser::Parser;
use libxml::readonly::RoNode;
use log::{info, warn};

use crate::error::ResourceError;

/// File name of the mapping resource inside the configured mapping location
pub const MAPPING_FILE_NAME: &str = "VN-FNRoleMapping.txt";

/// Maps a VerbNet role to the FrameNet roles it corresponds to, for one (frame, class) pair
pub type RoleMap = HashMap<String, BTreeSet<String>>;

/// The two indices built from the mapping resource
#[derive(Debug, Clone, Default)]
pub struct SemLinkMapping {
  /// frame -> VerbNet class -> role map
  role_maps: HashMap<String, HashMap<String, RoleMap>>,
  /// frame -> VerbNet classes, in order of first appearance
  frame_classes: HashMap<String, Vec<String>>,
}

/// One `vncls` record of the resource
struct ClassRecord {
  frame: String,
  vn_class: String,
  roles: Vec<(String, String)>,
}

impl SemLinkMapping {
  /// Create an empty mapping
  pub fn new() -> Self { SemLinkMapping::default() }

  /// Loads `MAPPING_FILE_NAME` from the directory `mapping_location`
  pub fn load_from_dir<P: AsRef<Path>>(mapping_location: P) -> Result<Self, ResourceError> {
    SemLinkMapping::load(mapping_location.as_ref().join(MAPPING_FILE_NAME))
  }

  /// Loads the mapping resource at `path`
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
    let path = path.as_ref();
    if !path.is_file() {
      return Err(ResourceError::Missing(path.to_path_buf()));
    }
    let path_str = path.to_str().ok_or_else(|| ResourceError::Unparseable {
      path: path.to_path_buf(),
      reason: "path is not valid UTF-8".to_string(),
    })?;
    let parser = Parser::default();
    let document = parser
      .parse_file(path_str)
      .map_err(|e| ResourceError::Unparseable {
        path: path.to_path_buf(),
        reason: format!("{:?}", e),
      })?;
    let root = document
      .get_root_readonly()
      .ok_or_else(|| ResourceError::Unparseable {
        path: path.to_path_buf(),
        reason: "document has no root element".to_string(),
      })?;

    let mut mapping = SemLinkMapping::new();
    let mut skipped = 0;
    for node in root.get_child_elements() {
      if node.get_name() != "vncls" {
        warn!(
          "{}: ignoring unexpected \"{}\" element",
          path.display(),
          node.get_name()
        );
        continue;
      }
      match ClassRecord::load_from_node(node) {
        Ok(record) => mapping.add_record(record),
        Err(reason) => {
          skipped += 1;
          warn!("{}: skipping malformed record: {}", path.display(), reason);
        },
      }
    }

    if mapping.is_empty() {
      warn!(
        "{}: no usable role mapping records found ({} skipped)",
        path.display(),
        skipped
      );
    } else {
      info!(
        "Read SemLink mapping from {}: {} frame/class records for {} frames, {} skipped",
        path.display(),
        mapping.record_count(),
        mapping.frame_count(),
        skipped
      );
    }
    Ok(mapping)
  }

  /// Records that `vn_role` of `vn_class` corresponds to `fn_role` of `frame`
  pub fn insert(&mut self, frame: &str, vn_class: &str, vn_role: &str, fn_role: &str) {
    self
      .class_role_map(frame, vn_class)
      .entry(vn_role.to_string())
      .or_insert_with(BTreeSet::new)
      .insert(fn_role.to_string());
  }

  fn add_record(&mut self, record: ClassRecord) {
    let role_map = self.class_role_map(&record.frame, &record.vn_class);
    for (vn_role, fn_role) in record.roles {
      role_map
        .entry(vn_role)
        .or_insert_with(BTreeSet::new)
        .insert(fn_role);
    }
  }

  /// Role map of a (frame, class) pair, registering the pair if it is new
  fn class_role_map(&mut self, frame: &str, vn_class: &str) -> &mut RoleMap {
    let classes = self
      .frame_classes
      .entry(frame.to_string())
      .or_insert_with(Vec::new);
    if !classes.iter().any(|c| c == vn_class) {
      classes.push(vn_class.to_string());
    }
    self
      .role_maps
      .entry(frame.to_string())
      .or_insert_with(HashMap::new)
      .entry(vn_class.to_string())
      .or_insert_with(HashMap::new)
  }

  /// The VerbNet-to-FrameNet role map of a (frame, class) pair, if the pair is listed
  pub fn lookup_role_map(&self, frame: &str, vn_class: &str) -> Option<&RoleMap> {
    self.role_maps.get(frame)?.get(vn_class)
  }

  /// The VerbNet classes associated with `frame`, empty if the frame is not listed
  pub fn lookup_classes_for_frame(&self, frame: &str) -> &[String] {
    match self.frame_classes.get(frame) {
      Some(classes) => classes.as_slice(),
      None => &[],
    }
  }

  /// Number of distinct (frame, class) pairs
  pub fn record_count(&self) -> usize { self.frame_classes.values().map(Vec::len).sum() }

  /// Number of distinct frames
  pub fn frame_count(&self) -> usize { self.frame_classes.len() }

  /// true if nothing was loaded
  pub fn is_empty(&self) -> bool { self.frame_classes.is_empty() }
}

impl ClassRecord {
  /// loads a `ClassRecord` from a `vncls` node
  fn load_from_node(node: RoNode) -> Result<ClassRecord, String> {
    let vn_class = require_node_property(node, "class")?;
    let frame = require_node_property(node, "fnframe")?;
    let mut roles = Vec::new();
    for wrapper in node.get_child_elements() {
      if wrapper.get_name() != "roles" {
        continue;
      }
      for role in wrapper.get_child_elements() {
        if role.get_name() != "role" {
          continue;
        }
        match (
          require_node_property(role, "vnrole"),
          require_node_property(role, "fnrole"),
        ) {
          (Ok(vn_role), Ok(fn_role)) => roles.push((vn_role, fn_role)),
          (Err(reason), _) | (_, Err(reason)) => {
            warn!("{} {}: skipping role: {}", frame, vn_class, reason)
          },
        }
      }
    }
    Ok(ClassRecord {
      frame,
      vn_class,
      roles,
    })
  }
}

/// Gets a non-empty property from a node (or an `Err`, if it doesn't have the property)
fn require_node_property(node: RoNode, property: &str) -> Result<String, String> {
  match node.get_property(property) {
    None => Err(format!(
      "\"{}\" node misses \"{}\" property",
      node.get_name(),
      property
    )),
    Some(ref value) if value.trim().is_empty() => Err(format!(
      "\"{}\" node has an empty \"{}\" property",
      node.get_name(),
      property
    )),
    Some(value) => Ok(value.trim().to_string()),
  }
}
