use std::collections::HashSet;
use std::sync::LazyLock;

use crate::types::id::IdRef;
use crate::types::isa::Isa;
use crate::types::map::PMap;
use crate::types::value::Value;

/// A reified pbxproj object: a [`PMap`] plus the `isa` that triggered
/// reification and the id it is keyed under in the owning document's
/// `objects` table. Composition, not inheritance — every kind-specific
/// accessor below reads and writes the same backing `map`.
#[derive(Debug, Clone)]
pub struct PbxObject {
    id: IdRef,
    isa: String,
    map: PMap,
}

impl PbxObject {
    /// Construct an empty object of the given kind, with `isa` already
    /// present in its backing map (as real pbxproj objects always carry it).
    pub fn new(id: IdRef, isa: impl Into<String>) -> Self {
        let isa = isa.into();
        let mut map = PMap::new();
        map.put("isa", None, Value::Literal(isa.clone()));
        PbxObject { id, isa, map }
    }

    /// Reify a parsed [`PMap`] that was seen to contain an `isa` key.
    pub fn from_map(id: IdRef, map: PMap) -> Self {
        let isa = map
            .get("isa")
            .and_then(|v| v.as_literal())
            .unwrap_or("Unknown")
            .to_string();
        PbxObject { id, isa, map }
    }

    pub fn id(&self) -> &IdRef {
        &self.id
    }

    pub fn isa(&self) -> &str {
        &self.isa
    }

    pub fn kind(&self) -> Option<Isa> {
        self.isa.parse().ok()
    }

    pub fn map(&self) -> &PMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut PMap {
        &mut self.map
    }

    pub fn into_map(self) -> PMap {
        self.map
    }

    // ── generic typed helpers, usable regardless of isa ──

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.map.get(key).and_then(|v| v.as_literal())
    }

    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.map.get_array(key)
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.map.set_string(key, value);
    }

    pub fn set_array(&mut self, key: impl Into<String>, value: Vec<Value>) {
        self.map.set_array(key, value);
    }

    pub fn display_name(&self) -> Option<String> {
        self.get_string("name")
            .or_else(|| self.get_string("productName"))
            .or_else(|| self.get_string("path"))
            .map(|s| s.to_string())
    }

    /// Which of this object's keys hold id references, based on `isa`.
    /// Unknown kinds hold none, so orphan-reference scanning and removal
    /// degrade gracefully for objects outside the registry.
    pub fn reference_keys(&self) -> &'static [&'static str] {
        match self.isa.as_str() {
            "PBXProject" => &["buildConfigurationList", "mainGroup", "productRefGroup", "targets", "packageReferences"],
            "PBXNativeTarget" | "PBXAggregateTarget" | "PBXLegacyTarget" => &[
                "buildConfigurationList",
                "dependencies",
                "buildPhases",
                "buildRules",
                "productReference",
                "packageProductDependencies",
                "fileSystemSynchronizedGroups",
            ],
            "PBXGroup" | "PBXVariantGroup" | "XCVersionGroup" => &["children"],
            "XCConfigurationList" => &["buildConfigurations"],
            "XCBuildConfiguration" => &["baseConfigurationReference"],
            "PBXBuildFile" => &["fileRef", "productRef"],
            "PBXTargetDependency" => &["target", "targetProxy"],
            "PBXContainerItemProxy" => &["containerPortal"],
            "PBXReferenceProxy" => &["remoteRef"],
            _ if self.isa.ends_with("BuildPhase") => &["files"],
            _ => &[],
        }
    }

    /// Collect every id this object refers to, as hex strings.
    pub fn collect_references(&self) -> HashSet<String> {
        let mut refs = HashSet::new();
        for key in self.reference_keys() {
            match self.map.get(key) {
                Some(Value::Id(id)) => {
                    refs.insert(id.to_hex());
                }
                Some(Value::Array(items)) => {
                    for item in items {
                        if let Value::Id(id) = item {
                            refs.insert(id.to_hex());
                        }
                    }
                }
                _ => {}
            }
        }
        refs
    }

    pub fn is_referencing(&self, id_hex: &str) -> bool {
        self.collect_references().iter().any(|r| r == id_hex)
    }

    // ── isa-scoped accessors (only meaningful for the named kinds) ──

    /// `PBXGroup`/`PBXVariantGroup`/`XCVersionGroup` children, in document order.
    pub fn children(&self) -> Option<&[Value]> {
        self.map.get_array("children")
    }

    /// Sort this group's `children` by display comment (falls back to the
    /// raw id hex when a child carries no comment), matching Xcode's own
    /// alphabetized group rendering (invariant 6).
    pub fn sort_children_by_display_name(&mut self) {
        if !matches!(self.isa.as_str(), "PBXGroup" | "PBXVariantGroup" | "XCVersionGroup") {
            return;
        }
        if let Some(Value::Array(children)) = self.map.get_mut("children") {
            children.sort_by(|a, b| {
                let ka = a.as_id().map(|id| id.comment.clone().unwrap_or_else(|| id.to_hex()));
                let kb = b.as_id().map(|id| id.comment.clone().unwrap_or_else(|| id.to_hex()));
                ka.cmp(&kb)
            });
        }
    }
}

/// The 24 canonical Xcode object kinds this crate actively builds or
/// specializes behavior for. Anything outside this set still
/// parses and round-trips fine as a generic [`PbxObject`] — it just gets no
/// kind-specific accessor support.
pub static KNOWN_KINDS: LazyLock<[&'static str; 24]> = LazyLock::new(|| {
    [
        "Xcodeproj",
        "PBXProject",
        "PBXGroup",
        "PBXVariantGroup",
        "PBXFileReference",
        "PBXBuildFile",
        "PBXAggregateTarget",
        "PBXNativeTarget",
        "PBXLegacyTarget",
        "PBXTargetDependency",
        "PBXContainerItemProxy",
        "PBXReferenceProxy",
        "PBXBuildRule",
        "PBXBuildStyle",
        "PBXAppleScriptBuildPhase",
        "PBXCopyFilesBuildPhase",
        "PBXFrameworksBuildPhase",
        "PBXHeadersBuildPhase",
        "PBXResourcesBuildPhase",
        "PBXShellScriptBuildPhase",
        "PBXSourcesBuildPhase",
        "XCBuildConfiguration",
        "XCConfigurationList",
        "XCVersionGroup",
    ]
});

pub fn is_known_kind(isa: &str) -> bool {
    KNOWN_KINDS.contains(&isa)
}
