use std::fmt;
use std::path::{Path, PathBuf};

use crate::objects::PbxObject;
use crate::parser::{self, ParseError};
use crate::types::id::{IdAllocator, IdRef};
use crate::types::map::PMap;
use crate::types::value::Value;
use crate::writer;

/// Everything that can go wrong opening, parsing or saving a project —
/// propagated with `?`, never panicked on.
#[derive(Debug)]
pub enum ProjectError {
    Io(std::io::Error),
    Parse(ParseError),
    /// The document parsed but lacked the top-level shape a pbxproj must
    /// have (no `objects` map, no `rootObject`, etc).
    Malformed(&'static str),
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::Io(e) => write!(f, "i/o error: {e}"),
            ProjectError::Parse(e) => write!(f, "parse error: {e}"),
            ProjectError::Malformed(msg) => write!(f, "malformed project: {msg}"),
        }
    }
}

impl std::error::Error for ProjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectError::Io(e) => Some(e),
            ProjectError::Parse(e) => Some(e),
            ProjectError::Malformed(_) => None,
        }
    }
}

impl From<std::io::Error> for ProjectError {
    fn from(e: std::io::Error) -> Self {
        ProjectError::Io(e)
    }
}

impl From<ParseError> for ProjectError {
    fn from(e: ParseError) -> Self {
        ProjectError::Parse(e)
    }
}

/// One dangling id reference found by
/// [`find_orphaned_references_detailed`](XcodeProject::find_orphaned_references_detailed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedReference {
    pub referrer_uuid: String,
    pub referrer_isa: String,
    pub property: String,
    pub orphan_uuid: String,
}

/// An in-memory `.pbxproj` document: the flat `objects` table plus the
/// handful of top-level fields every document carries.
#[derive(Debug, Clone)]
pub struct XcodeProject {
    archive_version: i64,
    object_version: i64,
    classes: PMap,
    root_object: String,
    objects: PMap,
    allocator: IdAllocator,
    file_path: Option<PathBuf>,
}

impl XcodeProject {
    /// Parse a `.pbxproj` document's text into a project, with no filesystem
    /// association.
    pub fn from_pbxproj(text: &str) -> Result<Self, ProjectError> {
        let value = parser::parse(text)?;
        let map = value.as_map().ok_or(ProjectError::Malformed("top-level value is not a map"))?;

        let archive_version = map.get_integer("archiveVersion", 1);
        let object_version = map.get_integer("objectVersion", 46);
        let classes = map.get_map("classes").cloned().unwrap_or_default();
        let objects = map.get_map("objects").ok_or(ProjectError::Malformed("missing objects table"))?.clone();
        let root_object = map
            .get_id("rootObject")
            .map(|id| id.to_hex())
            .ok_or(ProjectError::Malformed("missing rootObject"))?;

        Ok(XcodeProject {
            archive_version,
            object_version,
            classes,
            root_object,
            objects,
            allocator: IdAllocator::new(),
            file_path: None,
        })
    }

    /// Read and parse a `.pbxproj` file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut project = Self::from_pbxproj(&text)?;
        project.file_path = Some(path.to_path_buf());
        Ok(project)
    }

    /// Build a fresh, empty project with a minted root `PBXProject`. `Isa`-bearing objects created later share this allocator's
    /// salt.
    pub fn empty(name: &str) -> Self {
        let allocator = IdAllocator::new();
        let main_group_id = allocator.mint_with_comment("");
        let config_list_id = allocator.mint_with_comment(format!("Build configuration list for PBXProject \"{name}\""));
        let root_id = allocator.mint_with_comment("Project object");

        let mut objects = PMap::new();

        let mut main_group = PbxObject::new(main_group_id.clone(), "PBXGroup");
        main_group.map_mut().set_array("children", vec![]);
        main_group.map_mut().set_string("sourceTree", "<group>");
        objects.put(main_group_id.to_hex(), None, Value::Object(main_group));

        let mut config_list = PbxObject::new(config_list_id.clone(), "XCConfigurationList");
        config_list.map_mut().set_array("buildConfigurations", vec![]);
        config_list.map_mut().set_string("defaultConfigurationIsVisible", "0");
        objects.put(config_list_id.to_hex(), None, Value::Object(config_list));

        let mut root = PbxObject::new(root_id.clone(), "PBXProject");
        root.map_mut().set_id("buildConfigurationList", config_list_id.clone());
        root.map_mut().set_string("compatibilityVersion", "Xcode 14.0");
        root.map_mut().set_id("mainGroup", main_group_id.clone());
        root.map_mut().set_array("targets", vec![]);
        objects.put(root_id.to_hex(), None, Value::Object(root));

        let mut project = XcodeProject {
            archive_version: crate::types::constants::LAST_KNOWN_ARCHIVE_VERSION,
            object_version: crate::types::constants::DEFAULT_OBJECT_VERSION,
            classes: PMap::new(),
            root_object: root_id.to_hex(),
            objects,
            allocator,
            file_path: None,
        };
        // Even a target-less project carries both groups and a recorded
        // productRefGroup (spec scenario: two PBXGroups for mainGroup and
        // Products, up front, not created lazily on the first target).
        project.products_group();
        project
    }

    pub fn to_pbxproj(&self) -> String {
        writer::serializer::build(self)
    }

    pub fn save(&self) -> Result<(), ProjectError> {
        let path = self.file_path.as_ref().ok_or(ProjectError::Malformed("no file_path set"))?;
        self.save_to(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ProjectError> {
        std::fs::write(path, self.to_pbxproj())?;
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn archive_version(&self) -> i64 {
        self.archive_version
    }

    pub fn object_version(&self) -> i64 {
        self.object_version
    }

    pub fn classes(&self) -> &PMap {
        &self.classes
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    pub fn objects(&self) -> &PMap {
        &self.objects
    }

    /// The directory containing the `.xcodeproj` bundle, used as the base
    /// for `SOURCE_ROOT`-relative paths.
    pub fn get_project_root(&self) -> Option<String> {
        let path = self.file_path.as_ref()?;
        let xcodeproj_dir = if path.extension().and_then(|e| e.to_str()) == Some("pbxproj") {
            path.parent()?
        } else {
            path
        };
        let root = if xcodeproj_dir.extension().and_then(|e| e.to_str()) == Some("xcodeproj") {
            xcodeproj_dir.parent()?
        } else {
            xcodeproj_dir
        };
        Some(root.to_string_lossy().replace('\\', "/"))
    }

    pub fn get_object(&self, id_hex: &str) -> Option<&PbxObject> {
        self.objects.get(id_hex).and_then(Value::as_object)
    }

    pub fn get_object_mut(&mut self, id_hex: &str) -> Option<&mut PbxObject> {
        self.objects.get_mut(id_hex).and_then(Value::as_object_mut)
    }

    pub fn root_object(&self) -> Option<&PbxObject> {
        self.get_object(&self.root_object)
    }

    pub fn root_object_mut(&mut self) -> Option<&mut PbxObject> {
        let id = self.root_object.clone();
        self.get_object_mut(&id)
    }

    pub fn objects_by_isa<'a>(&'a self, isa: &'a str) -> impl Iterator<Item = &'a PbxObject> + 'a {
        self.objects.iter().filter_map(move |(_, v)| v.as_object()).filter(move |o| o.isa() == isa)
    }

    pub fn native_targets(&self) -> Vec<&PbxObject> {
        self.objects_by_isa("PBXNativeTarget").collect()
    }

    /// Every object with at least one reference key pointing at `id_hex`.
    pub fn get_referrers(&self, id_hex: &str) -> Vec<&PbxObject> {
        self.objects
            .iter()
            .filter_map(|(_, v)| v.as_object())
            .filter(|o| o.is_referencing(id_hex))
            .collect()
    }

    /// Mint a fresh id guaranteed not to collide with any existing key.
    pub fn get_unique_id(&self) -> IdRef {
        loop {
            let id = self.allocator.mint();
            if !self.objects.contains_key(&id.to_hex()) {
                return id;
            }
        }
    }

    /// Mint an id, build an empty object of `isa`, and insert it.
    pub fn create_object(&mut self, isa: &str, comment: Option<&str>) -> IdRef {
        let id = match comment {
            Some(c) => self.allocator.mint_with_comment(c),
            None => self.allocator.mint(),
        };
        let obj = PbxObject::new(id.clone(), isa);
        self.objects.put(id.to_hex(), None, Value::Object(obj));
        id
    }

    pub fn remove_object(&mut self, id_hex: &str) -> Option<Value> {
        self.objects.remove(id_hex)
    }

    /// Ids referenced from some object's reference keys but absent from the
    /// objects table — dangling pointers left over from editing.
    pub fn find_orphaned_references(&self) -> Vec<String> {
        let mut refs = std::collections::HashSet::new();
        for (_, v) in self.objects.iter() {
            if let Some(obj) = v.as_object() {
                refs.extend(obj.collect_references());
            }
        }
        refs.into_iter().filter(|r| !self.objects.contains_key(r)).collect()
    }

    /// Same scan as [`find_orphaned_references`](Self::find_orphaned_references),
    /// but attributed back to the referrer and the property that holds the
    /// dangling id — the shape napi/wasm consumers need to point a user at
    /// the broken edit.
    pub fn find_orphaned_references_detailed(&self) -> Vec<OrphanedReference> {
        let mut out = Vec::new();
        for (_, v) in self.objects.iter() {
            let Some(obj) = v.as_object() else { continue };
            for key in obj.reference_keys() {
                match obj.map().get(key) {
                    Some(Value::Id(id)) if !self.objects.contains_key(&id.to_hex()) => {
                        out.push(OrphanedReference {
                            referrer_uuid: obj.id().to_hex(),
                            referrer_isa: obj.isa().to_string(),
                            property: (*key).to_string(),
                            orphan_uuid: id.to_hex(),
                        });
                    }
                    Some(Value::Array(items)) => {
                        for item in items {
                            if let Value::Id(id) = item {
                                if !self.objects.contains_key(&id.to_hex()) {
                                    out.push(OrphanedReference {
                                        referrer_uuid: obj.id().to_hex(),
                                        referrer_isa: obj.isa().to_string(),
                                        property: (*key).to_string(),
                                        orphan_uuid: id.to_hex(),
                                    });
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        out
    }

    pub fn main_group_id(&self) -> Option<String> {
        self.root_object()?.map().get_id("mainGroup").map(|id| id.to_hex())
    }

    pub fn product_ref_group_id(&self) -> Option<String> {
        self.root_object()?.map().get_id("productRefGroup").map(|id| id.to_hex())
    }

    pub fn build_configuration_list_id(&self) -> Option<String> {
        self.root_object()?.map().get_id("buildConfigurationList").map(|id| id.to_hex())
    }

    pub fn target_ids(&self) -> Vec<String> {
        match self.root_object().and_then(|o| o.get_array("targets")) {
            Some(targets) => targets.iter().filter_map(|v| v.as_id()).map(|id| id.to_hex()).collect(),
            None => vec![],
        }
    }

    pub fn find_target_by_product_type(&self, product_type: &str) -> Option<&PbxObject> {
        self.target_ids()
            .into_iter()
            .filter_map(|id| self.get_object(&id))
            .find(|t| t.get_string("productType") == Some(product_type))
    }

    pub fn find_main_app_target(&self) -> Option<&PbxObject> {
        self.find_target_by_product_type("com.apple.product-type.application")
    }

    /// The first build phase of kind `isa` among `target`'s `buildPhases`.
    pub fn find_build_phase<'a>(&'a self, target: &PbxObject, isa: &str) -> Option<&'a PbxObject> {
        let phases = target.get_array("buildPhases")?;
        phases
            .iter()
            .filter_map(|v| v.as_id())
            .filter_map(|id| self.get_object(&id.to_hex()))
            .find(|p| p.isa() == isa)
    }

    /// The named configuration, falling back to `defaultConfigurationName`
    /// then to the first configuration in the list.
    pub fn get_default_configuration<'a>(&'a self, config_list: &PbxObject) -> Option<&'a PbxObject> {
        let configs = config_list.get_array("buildConfigurations")?;
        let default_name = config_list.get_string("defaultConfigurationName");

        if let Some(name) = default_name {
            if let Some(found) = configs
                .iter()
                .filter_map(|v| v.as_id())
                .filter_map(|id| self.get_object(&id.to_hex()))
                .find(|c| c.get_string("name") == Some(name))
            {
                return Some(found);
            }
        }

        configs.iter().filter_map(|v| v.as_id()).find_map(|id| self.get_object(&id.to_hex()))
    }

    pub fn get_build_setting(&self, config: &PbxObject, key: &str) -> Option<String> {
        let settings = config.map().get_map("buildSettings")?;
        settings.get(key).and_then(Value::as_literal).map(|s| s.to_string())
    }

    pub fn set_build_setting(&mut self, config_id: &str, key: &str, value: impl Into<String>) {
        if let Some(config) = self.get_object_mut(config_id) {
            let settings = config.map_mut();
            let mut map = settings.get_map("buildSettings").cloned().unwrap_or_default();
            map.set_string(key, value);
            settings.replace("buildSettings", Value::Map(map));
        }
    }

    pub fn remove_build_setting(&mut self, config_id: &str, key: &str) {
        if let Some(config) = self.get_object_mut(config_id) {
            if let Some(Value::Map(map)) = config.map_mut().get_mut("buildSettings") {
                map.remove(key);
            }
        }
    }

    fn target_configuration_ids(&self, target_id_hex: &str) -> Vec<String> {
        let Some(target) = self.get_object(target_id_hex) else { return vec![] };
        let Some(config_list_id) = target.map().get_id("buildConfigurationList").map(|id| id.to_hex()) else {
            return vec![];
        };
        let Some(config_list) = self.get_object(&config_list_id) else { return vec![] };
        match config_list.get_array("buildConfigurations") {
            Some(configs) => configs.iter().filter_map(Value::as_id).map(|id| id.to_hex()).collect(),
            None => vec![],
        }
    }

    /// Read a build setting from a target's first configuration.
    pub fn get_target_build_setting(&self, target_id_hex: &str, key: &str) -> Option<String> {
        let config_id = self.target_configuration_ids(target_id_hex).into_iter().next()?;
        let config = self.get_object(&config_id)?;
        self.get_build_setting(config, key)
    }

    /// Set a build setting across every configuration of a target.
    pub fn set_target_build_setting(&mut self, target_id_hex: &str, key: &str, value: impl Into<String>) -> bool {
        let ids = self.target_configuration_ids(target_id_hex);
        if ids.is_empty() {
            return false;
        }
        let value = value.into();
        for id in ids {
            self.set_build_setting(&id, key, value.clone());
        }
        true
    }

    /// Remove a build setting from every configuration of a target.
    pub fn remove_target_build_setting(&mut self, target_id_hex: &str, key: &str) -> bool {
        let ids = self.target_configuration_ids(target_id_hex);
        if ids.is_empty() {
            return false;
        }
        for id in &ids {
            self.remove_build_setting(id, key);
        }
        true
    }

    /// Render the whole document as a JSON value, for napi/wasm interop.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "archiveVersion": self.archive_version,
            "classes": self.classes.to_json(),
            "objectVersion": self.object_version,
            "objects": self.objects.to_json(),
            "rootObject": self.root_object,
        })
    }

    /// Rebuild a project from the JSON shape `to_json` produces — the
    /// inverse conversion the napi/wasm `build`/`buildFromJSON` bindings
    /// need.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, ProjectError> {
        let obj = json.as_object().ok_or(ProjectError::Malformed("top-level JSON value is not an object"))?;

        let archive_version = obj.get("archiveVersion").and_then(|v| v.as_i64()).unwrap_or(1);
        let object_version = obj.get("objectVersion").and_then(|v| v.as_i64()).unwrap_or(46);
        let classes = obj.get("classes").map(json_to_pmap).unwrap_or_default();

        let objects_json = obj
            .get("objects")
            .and_then(|v| v.as_object())
            .ok_or(ProjectError::Malformed("missing objects table"))?;

        let mut objects = PMap::new();
        for (id_hex, value) in objects_json {
            let bytes = IdRef::parse_hex(id_hex).ok_or(ProjectError::Malformed("objects table key is not a 24-hex id"))?;
            let map = json_to_pmap(value);
            objects.put(id_hex.clone(), None, Value::Object(PbxObject::from_map(IdRef::from_bytes(bytes), map)));
        }

        let root_object = obj
            .get("rootObject")
            .and_then(|v| v.as_str())
            .ok_or(ProjectError::Malformed("missing rootObject"))?
            .to_string();

        Ok(XcodeProject {
            archive_version,
            object_version,
            classes,
            root_object,
            objects,
            allocator: IdAllocator::new(),
            file_path: None,
        })
    }
}

/// Generic (non-reifying) JSON → [`Value`] conversion: only the `objects`
/// table's direct entries become [`Value::Object`] — nested maps stay
/// [`Value::Map`], matching how pbxproj itself only ever reifies at that
/// one level.
fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::String(s) => match IdRef::parse_hex(s) {
            Some(bytes) => Value::Id(IdRef::from_bytes(bytes)),
            None => Value::Literal(s.clone()),
        },
        serde_json::Value::Number(n) => Value::Literal(n.to_string()),
        serde_json::Value::Bool(b) => Value::boolean(*b),
        serde_json::Value::Null => Value::Literal(String::new()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(json_to_value).collect()),
        serde_json::Value::Object(_) => Value::Map(json_to_pmap(json)),
    }
}

fn json_to_pmap(json: &serde_json::Value) -> PMap {
    let mut map = PMap::new();
    if let Some(obj) = json.as_object() {
        for (key, value) in obj {
            map.put(key.clone(), None, json_to_value(value));
        }
    }
    map
}
