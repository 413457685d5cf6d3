//! Incremental project construction: build a complete,
//! Xcode-openable project from a declarative [`ProjectSpec`], or grow one
//! target at a time via [`XcodeProject::add_library`]/[`add_tool`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::{self, FileTypeFlags};
use crate::objects::PbxObject;
use crate::types::constants::ProjectDefaultBuildSettings;
use crate::types::id::IdRef;
use crate::types::value::Value;

use super::globre;
use super::xcode_project::XcodeProject;

/// One named build configuration (`Debug`, `Release`, ...) and the settings
/// that distinguish it from the project's common defaults.
#[derive(Debug, Clone)]
pub struct ConfigSpec {
    pub name: String,
    pub optimization_level: Option<String>,
    pub preprocessor_definitions: Vec<String>,
    pub macosx_deployment_target: Option<String>,
    pub sdkroot: Option<String>,
}

impl ConfigSpec {
    pub fn debug() -> ConfigSpec {
        ConfigSpec {
            name: "Debug".to_string(),
            optimization_level: Some("0".to_string()),
            preprocessor_definitions: vec!["DEBUG=1".to_string(), "$(inherited)".to_string()],
            macosx_deployment_target: None,
            sdkroot: None,
        }
    }

    pub fn release() -> ConfigSpec {
        ConfigSpec {
            name: "Release".to_string(),
            optimization_level: Some("s".to_string()),
            preprocessor_definitions: vec![],
            macosx_deployment_target: None,
            sdkroot: None,
        }
    }
}

/// A static or dynamic library target.
#[derive(Debug, Clone)]
pub struct LibrarySpec {
    pub name: String,
    pub sources_glob: String,
    pub dynamic: bool,
}

/// An executable target, optionally linking against libraries built in the
/// same project.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: String,
    pub sources_glob: String,
    pub dependencies: Vec<String>,
}

/// The whole project to build: one or more configurations, libraries, and
/// tools, resolved relative to `root`.
#[derive(Debug, Clone)]
pub struct ProjectSpec {
    pub name: String,
    pub root: PathBuf,
    pub configs: Vec<ConfigSpec>,
    pub libraries: Vec<LibrarySpec>,
    pub tools: Vec<ToolSpec>,
}

struct BuiltTarget {
    target_id: IdRef,
    product_file_ref: IdRef,
}

impl XcodeProject {
    /// Append an `XCBuildConfiguration` to the project's top-level
    /// configuration list, seeded with the default warning/analyzer
    /// settings plus `spec`'s overrides.
    pub fn add_configuration(&mut self, spec: &ConfigSpec) -> IdRef {
        let is_debug = spec.name == "Debug";
        let config_id = self.create_object("XCBuildConfiguration", Some(&spec.name));

        {
            let config = self.get_object_mut(&config_id.to_hex()).expect("just created");
            config.map_mut().set_string("name", &spec.name);
        }

        let mut defaults = ProjectDefaultBuildSettings::all();
        let tier = if is_debug { ProjectDefaultBuildSettings::debug() } else { ProjectDefaultBuildSettings::release() };
        defaults.extend(tier);

        for (k, v) in defaults {
            self.set_build_setting(&config_id.to_hex(), k, v);
        }

        self.set_build_setting(&config_id.to_hex(), "CLANG_CXX_LANGUAGE_STANDARD", "gnu++20");
        self.set_build_setting(&config_id.to_hex(), "GCC_C_LANGUAGE_STANDARD", "gnu17");

        if let Some(level) = &spec.optimization_level {
            self.set_build_setting(&config_id.to_hex(), "GCC_OPTIMIZATION_LEVEL", level.clone());
        }
        if !spec.preprocessor_definitions.is_empty() {
            self.set_build_setting(
                &config_id.to_hex(),
                "GCC_PREPROCESSOR_DEFINITIONS",
                spec.preprocessor_definitions.join(" "),
            );
        }
        if let Some(target) = &spec.macosx_deployment_target {
            self.set_build_setting(&config_id.to_hex(), "MACOSX_DEPLOYMENT_TARGET", target.clone());
        }
        if let Some(sdk) = &spec.sdkroot {
            self.set_build_setting(&config_id.to_hex(), "SDKROOT", sdk.clone());
        }

        let config_list_id = self.build_configuration_list_id().expect("empty() always creates one");
        if let Some(list) = self.get_object_mut(&config_list_id) {
            let mut configs: Vec<Value> = list.get_array("buildConfigurations").unwrap_or(&[]).to_vec();
            configs.push(Value::Id(config_id.clone()));
            list.set_array("buildConfigurations", configs);
        }

        config_id
    }

    /// The project's own configuration names (`Debug`, `Release`, ...),
    /// read back from its top-level `XCConfigurationList` so per-target
    /// configuration lists always mirror it. Falls back to the stock
    /// `Debug`/`Release` pair for a project with none configured yet.
    fn project_configuration_names(&self) -> Vec<String> {
        let names: Vec<String> = self
            .build_configuration_list_id()
            .and_then(|list_id| self.get_object(&list_id))
            .map(|list| {
                list.get_array("buildConfigurations")
                    .unwrap_or(&[])
                    .iter()
                    .filter_map(|v| v.as_id())
                    .filter_map(|id| self.get_object(&id.to_hex()))
                    .filter_map(|config| config.get_string("name").map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        if names.is_empty() {
            vec!["Debug".to_string(), "Release".to_string()]
        } else {
            names
        }
    }

    /// The project's `Products` group, creating it (and wiring it as
    /// `productRefGroup`) on first use.
    pub(crate) fn products_group(&mut self) -> IdRef {
        if let Some(existing) = self.product_ref_group_id() {
            return IdRef::from_bytes(IdRef::parse_hex(&existing).expect("valid id key"));
        }

        let group_id = self.create_object("PBXGroup", Some("Products"));
        {
            let group = self.get_object_mut(&group_id.to_hex()).expect("just created");
            group.map_mut().set_string("name", "Products");
            group.map_mut().set_array("children", vec![]);
            group.map_mut().set_string("sourceTree", "<group>");
        }

        let main_group_id = self.main_group_id().expect("empty() always creates one");
        if let Some(main_group) = self.get_object_mut(&main_group_id) {
            let mut children: Vec<Value> = main_group.get_array("children").unwrap_or(&[]).to_vec();
            children.push(Value::Id(group_id.clone()));
            main_group.set_array("children", children);
        }

        if let Some(root) = self.root_object_mut() {
            root.map_mut().set_id("productRefGroup", group_id.clone());
        }

        group_id
    }

    /// Find an existing `PBXGroup` child of `parent_hex` whose `path`
    /// equals `component`, or create and attach a fresh one.
    fn find_or_create_child_group(&mut self, parent_hex: &str, component: &str) -> String {
        if let Some(parent) = self.get_object(parent_hex) {
            for child in parent.get_array("children").unwrap_or(&[]) {
                if let Some(id) = child.as_id() {
                    let hex = id.to_hex();
                    if self.get_object(&hex).map(|o| o.isa() == "PBXGroup" && o.get_string("path") == Some(component)).unwrap_or(false) {
                        return hex;
                    }
                }
            }
        }

        let group_id = self.create_object("PBXGroup", Some(component));
        {
            let group = self.get_object_mut(&group_id.to_hex()).expect("just created");
            group.map_mut().set_string("name", component);
            group.map_mut().set_string("path", component);
            group.map_mut().set_string("sourceTree", "<group>");
            group.map_mut().set_array("children", vec![]);
        }
        if let Some(parent) = self.get_object_mut(parent_hex) {
            let mut children: Vec<Value> = parent.get_array("children").unwrap_or(&[]).to_vec();
            children.push(Value::Id(group_id.clone()));
            parent.set_array("children", children);
        }
        group_id.to_hex()
    }

    /// Walk (creating as needed) the `PBXGroup` chain under `root_hex`
    /// matching `dirs`, a source path's directory components. Each
    /// intermediate group is deduplicated by `path` so sibling targets
    /// sharing a directory share its group too.
    fn ensure_group_chain(&mut self, root_hex: &str, dirs: &[&str]) -> String {
        let mut parent_hex = root_hex.to_string();
        for component in dirs {
            parent_hex = self.find_or_create_child_group(&parent_hex, component);
        }
        parent_hex
    }

    /// Resolve `glob_pattern` against `base_dir` and create a
    /// `PBXFileReference` (deduplicated by resolved path) for each match,
    /// walking/creating the `PBXGroup` chain matching each match's
    /// directory components under the main group. Returns the main
    /// group id and the ordered file reference ids.
    fn add_source_group(&mut self, _target_name: &str, glob_pattern: &str, base_dir: &Path) -> (IdRef, Vec<IdRef>) {
        let main_group_id = self.main_group_id().expect("empty() always creates one");

        let mut seen: HashMap<String, IdRef> = HashMap::new();
        let mut ordered_refs = Vec::new();
        let mut touched_groups: Vec<String> = Vec::new();

        let mut paths = globre::expand(glob_pattern, base_dir);
        paths.sort();

        for path in paths {
            let file_ref_id = seen.entry(path.clone()).or_insert_with(|| {
                let mut components: Vec<&str> = path.split('/').collect();
                let file_name = components.pop().unwrap_or(&path).to_string();
                let parent_hex = self.ensure_group_chain(&main_group_id, &components);

                let uti = catalog::lookup_path(&path).map(|e| e.uti).unwrap_or("text");
                let id = self.create_object("PBXFileReference", Some(&file_name));
                {
                    let file_ref = self.get_object_mut(&id.to_hex()).expect("just created");
                    file_ref.map_mut().set_string("lastKnownFileType", uti);
                    file_ref.map_mut().set_string("path", file_name.clone());
                    file_ref.map_mut().set_string("sourceTree", "<group>");
                }
                if let Some(parent) = self.get_object_mut(&parent_hex) {
                    let mut children: Vec<Value> = parent.get_array("children").unwrap_or(&[]).to_vec();
                    children.push(Value::Id(id.clone()));
                    parent.set_array("children", children);
                }
                touched_groups.push(parent_hex);
                id
            });
            ordered_refs.push(file_ref_id.clone());
        }

        for hex in touched_groups {
            if let Some(group) = self.get_object_mut(&hex) {
                group.sort_children_by_display_name();
            }
        }

        let group_id = IdRef::from_bytes(IdRef::parse_hex(&main_group_id).expect("valid id key"));
        (group_id, ordered_refs)
    }

    /// Wrap each `Compiler`-flagged file reference in a `PBXBuildFile` and
    /// build the target's `PBXSourcesBuildPhase`. Non-compiler inputs
    /// (headers, resources) stay in the group but are not compiled.
    fn add_sources_phase(&mut self, file_refs: &[IdRef], phase_name: &str) -> IdRef {
        let mut build_files = Vec::new();
        for file_ref in file_refs {
            let is_compiler_input = self
                .get_object(&file_ref.to_hex())
                .and_then(|f| f.get_string("path"))
                .and_then(catalog::lookup_path)
                .map(|e| e.flags.contains(FileTypeFlags::COMPILER))
                .unwrap_or(false);
            if !is_compiler_input {
                continue;
            }
            let build_file_id = self.create_object("PBXBuildFile", None);
            if let Some(build_file) = self.get_object_mut(&build_file_id.to_hex()) {
                build_file.map_mut().set_id("fileRef", file_ref.clone());
            }
            build_files.push(Value::Id(build_file_id));
        }

        let phase_id = self.create_object("PBXSourcesBuildPhase", Some(phase_name));
        if let Some(phase) = self.get_object_mut(&phase_id.to_hex()) {
            phase.map_mut().set_integer("buildActionMask", 2147483647);
            phase.map_mut().set_array("files", build_files);
            phase.map_mut().set_bool("runOnlyForDeploymentPostprocessing", false);
        }
        phase_id
    }

    /// Common machinery for library and tool targets: group, sources phase,
    /// product reference, native target, and its membership in the
    /// project's `targets` array.
    fn add_native_target(
        &mut self,
        name: &str,
        sources_glob: &str,
        base_dir: &Path,
        product_type: &str,
        product_prefix: &str,
        product_extension: &str,
        product_uti: &str,
    ) -> BuiltTarget {
        let (_, file_refs) = self.add_source_group(name, sources_glob, base_dir);
        let sources_phase_id = self.add_sources_phase(&file_refs, "Sources");

        let config_list_id = self.create_object("XCConfigurationList", Some(&format!("Build configuration list for PBXNativeTarget \"{name}\"")));
        for config_name in self.project_configuration_names() {
            let config_id = self.create_object("XCBuildConfiguration", Some(&config_name));
            if let Some(config) = self.get_object_mut(&config_id.to_hex()) {
                config.map_mut().set_string("name", &config_name);
            }
            self.set_build_setting(&config_id.to_hex(), "PRODUCT_NAME", "$(TARGET_NAME)");
            if let Some(list) = self.get_object_mut(&config_list_id.to_hex()) {
                let mut configs: Vec<Value> = list.get_array("buildConfigurations").unwrap_or(&[]).to_vec();
                configs.push(Value::Id(config_id));
                list.set_array("buildConfigurations", configs);
            }
        }

        let product_name = if product_extension.is_empty() {
            format!("{product_prefix}{name}")
        } else {
            format!("{product_prefix}{name}.{product_extension}")
        };

        let products_group = self.products_group();
        let product_ref_id = self.create_object("PBXFileReference", Some(&product_name));
        {
            let product_ref = self.get_object_mut(&product_ref_id.to_hex()).expect("just created");
            product_ref.map_mut().set_string("explicitFileType", product_uti);
            product_ref.map_mut().set_integer("includeInIndex", 0);
            product_ref.map_mut().set_string("path", product_name.clone());
            product_ref.map_mut().set_string("sourceTree", "BUILT_PRODUCTS_DIR");
        }
        if let Some(group) = self.get_object_mut(&products_group.to_hex()) {
            let mut children: Vec<Value> = group.get_array("children").unwrap_or(&[]).to_vec();
            children.push(Value::Id(product_ref_id.clone()));
            group.set_array("children", children);
        }

        let target_id = self.create_object("PBXNativeTarget", Some(name));
        {
            let target = self.get_object_mut(&target_id.to_hex()).expect("just created");
            target.map_mut().set_string("name", name);
            target.map_mut().set_string("productName", name);
            target.map_mut().set_string("productType", product_type);
            target.map_mut().set_id("buildConfigurationList", config_list_id);
            target.map_mut().set_array("buildPhases", vec![Value::Id(sources_phase_id)]);
            target.map_mut().set_array("buildRules", vec![]);
            target.map_mut().set_array("dependencies", vec![]);
            target.map_mut().set_id("productReference", product_ref_id.clone());
        }

        if let Some(root) = self.root_object_mut() {
            let mut targets: Vec<Value> = root.get_array("targets").unwrap_or(&[]).to_vec();
            targets.push(Value::Id(target_id.clone()));
            root.set_array("targets", targets);
        }

        BuiltTarget { target_id, product_file_ref: product_ref_id }
    }

    /// Build a static or dynamic library target from `spec`, resolving its
    /// source glob against `base_dir`.
    pub fn add_library(&mut self, spec: &LibrarySpec, base_dir: &Path) -> IdRef {
        let (product_type, prefix, extension, uti) = if spec.dynamic {
            ("com.apple.product-type.library.dynamic", "", "dylib", "compiled.mach-o.dylib")
        } else {
            ("com.apple.product-type.library.static", "lib", "a", "archive.ar")
        };
        self.add_native_target(&spec.name, &spec.sources_glob, base_dir, product_type, prefix, extension, uti).target_id
    }

    /// Build an executable target from `spec`, linking `dependencies`
    /// (library targets already present in `library_products`) via a
    /// `PBXFrameworksBuildPhase` and `PBXTargetDependency` entries.
    pub fn add_tool(&mut self, spec: &ToolSpec, base_dir: &Path, library_products: &HashMap<String, (IdRef, IdRef)>) -> IdRef {
        let built = self.add_native_target(
            &spec.name,
            &spec.sources_glob,
            base_dir,
            "com.apple.product-type.tool",
            "",
            "",
            "compiled.mach-o.executable",
        );

        if !spec.dependencies.is_empty() {
            let mut link_files = Vec::new();
            let mut dependencies = Vec::new();
            for dep_name in &spec.dependencies {
                let Some((dep_target_id, dep_product_id)) = library_products.get(dep_name) else { continue };

                let build_file_id = self.create_object("PBXBuildFile", None);
                if let Some(build_file) = self.get_object_mut(&build_file_id.to_hex()) {
                    build_file.map_mut().set_id("fileRef", dep_product_id.clone());
                }
                link_files.push(Value::Id(build_file_id));

                let proxy_id = self.create_object("PBXContainerItemProxy", None);
                if let Some(proxy) = self.get_object_mut(&proxy_id.to_hex()) {
                    proxy.map_mut().set_integer("proxyType", 1);
                    proxy.map_mut().set_string("remoteInfo", dep_name);
                    proxy.map_mut().set_id("remoteGlobalIDString", dep_target_id.clone());
                }

                let dependency_id = self.create_object("PBXTargetDependency", None);
                if let Some(dependency) = self.get_object_mut(&dependency_id.to_hex()) {
                    dependency.map_mut().set_id("target", dep_target_id.clone());
                    dependency.map_mut().set_id("targetProxy", proxy_id);
                }
                dependencies.push(Value::Id(dependency_id));
            }

            let frameworks_phase_id = self.create_object("PBXFrameworksBuildPhase", Some("Frameworks"));
            if let Some(phase) = self.get_object_mut(&frameworks_phase_id.to_hex()) {
                phase.map_mut().set_integer("buildActionMask", 2147483647);
                phase.map_mut().set_array("files", link_files);
                phase.map_mut().set_bool("runOnlyForDeploymentPostprocessing", false);
            }

            if let Some(target) = self.get_object_mut(&built.target_id.to_hex()) {
                let mut phases: Vec<Value> = target.get_array("buildPhases").unwrap_or(&[]).to_vec();
                phases.push(Value::Id(frameworks_phase_id));
                target.set_array("buildPhases", phases);
                target.map_mut().set_array("dependencies", dependencies);
            }
        }

        built.target_id
    }
}

/// Build a complete project from a [`ProjectSpec`]: configurations first,
/// libraries next (so their product references exist), tools last (so they
/// can link against the libraries just built).
pub fn build_project(spec: &ProjectSpec) -> XcodeProject {
    let mut project = XcodeProject::empty(&spec.name);

    for config in &spec.configs {
        project.add_configuration(config);
    }

    let mut library_products = HashMap::new();
    for library in &spec.libraries {
        let (product_type, prefix, extension, uti) = if library.dynamic {
            ("com.apple.product-type.library.dynamic", "", "dylib", "compiled.mach-o.dylib")
        } else {
            ("com.apple.product-type.library.static", "lib", "a", "archive.ar")
        };
        let built = project.add_native_target(&library.name, &library.sources_glob, &spec.root, product_type, prefix, extension, uti);
        library_products.insert(library.name.clone(), (built.target_id, built.product_file_ref));
    }

    for tool in &spec.tools {
        project.add_tool(tool, &spec.root, &library_products);
    }

    project
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_project_root(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("sushi-xcode-builder-test-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("Sources/Lib")).unwrap();
        fs::create_dir_all(dir.join("Sources/Tool")).unwrap();
        fs::write(dir.join("Sources/Lib/add.c"), b"").unwrap();
        fs::write(dir.join("Sources/Lib/add.h"), b"").unwrap();
        fs::write(dir.join("Sources/Tool/main.c"), b"").unwrap();
        dir
    }

    #[test]
    fn builds_a_library_and_a_tool_linking_it() {
        let root = scratch_project_root("full");
        let spec = ProjectSpec {
            name: "Demo".to_string(),
            root: root.clone(),
            configs: vec![ConfigSpec::debug(), ConfigSpec::release()],
            libraries: vec![LibrarySpec {
                name: "MathLib".to_string(),
                sources_glob: "Sources/Lib/*.(c|h)".to_string(),
                dynamic: false,
            }],
            tools: vec![ToolSpec {
                name: "MathTool".to_string(),
                sources_glob: "Sources/Tool/*.c".to_string(),
                dependencies: vec!["MathLib".to_string()],
            }],
        };

        let project = build_project(&spec);
        assert_eq!(project.native_targets().len(), 2);

        let lib_target = project.find_target_by_product_type("com.apple.product-type.library.static").unwrap();
        assert_eq!(lib_target.get_string("name"), Some("MathLib"));
        let product_ref_id = lib_target.map().get_id("productReference").unwrap().to_hex();
        let product_ref = project.get_object(&product_ref_id).unwrap();
        assert_eq!(product_ref.get_string("path"), Some("libMathLib.a"));

        let tool_target = project.find_target_by_product_type("com.apple.product-type.tool").unwrap();
        assert_eq!(tool_target.get_array("dependencies").unwrap().len(), 1);

        let frameworks_phase = project.find_build_phase(tool_target, "PBXFrameworksBuildPhase");
        assert!(frameworks_phase.is_some());
        assert_eq!(frameworks_phase.unwrap().get_array("files").unwrap().len(), 1);

        assert!(project.find_orphaned_references().is_empty());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn sources_phase_excludes_headers() {
        let root = scratch_project_root("headers");
        let mut project = XcodeProject::empty("Demo");
        let built = project.add_native_target(
            "MathLib",
            "Sources/Lib/*.(c|h)",
            &root,
            "com.apple.product-type.library.static",
            "lib",
            "a",
            "archive.ar",
        );
        let target = project.get_object(&built.target_id.to_hex()).unwrap();
        let phase = project.find_build_phase(target, "PBXSourcesBuildPhase").unwrap();
        assert_eq!(phase.get_array("files").unwrap().len(), 1);
        let _ = fs::remove_dir_all(&root);
    }

    fn find_child_group<'a>(project: &'a XcodeProject, parent_hex: &str, path: &str) -> Option<&'a PbxObject> {
        let parent = project.get_object(parent_hex)?;
        parent.get_array("children")?.iter().find_map(|v| {
            let hex = v.as_id()?.to_hex();
            let obj = project.get_object(&hex)?;
            (obj.isa() == "PBXGroup" && obj.get_string("path") == Some(path)).then_some(obj)
        })
    }

    #[test]
    fn source_tree_mirrors_directory_structure() {
        let root = scratch_project_root("tree");
        let mut project = XcodeProject::empty("Demo");
        project.add_native_target(
            "MathLib",
            "Sources/Lib/*.(c|h)",
            &root,
            "com.apple.product-type.library.static",
            "lib",
            "a",
            "archive.ar",
        );

        let main_group_id = project.main_group_id().unwrap();
        let sources_group = find_child_group(&project, &main_group_id, "Sources").expect("Sources group under mainGroup");
        assert_eq!(sources_group.get_string("name"), Some("Sources"));
        assert_eq!(sources_group.get_string("sourceTree"), Some("<group>"));

        let sources_group_hex = sources_group.id().to_hex();
        let lib_group = find_child_group(&project, &sources_group_hex, "Lib").expect("Lib group under Sources");
        let file_ref = lib_group
            .get_array("children")
            .unwrap()
            .iter()
            .find_map(|v| v.as_id())
            .and_then(|id| project.get_object(&id.to_hex()))
            .expect("leaf file reference");
        assert_eq!(file_ref.get_string("path"), Some("add.c"));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn per_target_configurations_mirror_the_project_and_set_product_name() {
        let root = scratch_project_root("configs");
        let mut project = XcodeProject::empty("Demo");
        project.add_configuration(&ConfigSpec::debug());
        project.add_configuration(&ConfigSpec::release());

        let built = project.add_native_target(
            "MathLib",
            "Sources/Lib/*.(c|h)",
            &root,
            "com.apple.product-type.library.static",
            "lib",
            "a",
            "archive.ar",
        );
        let target = project.get_object(&built.target_id.to_hex()).unwrap();
        let config_list_id = target.map().get_id("buildConfigurationList").unwrap().to_hex();
        let config_list = project.get_object(&config_list_id).unwrap();
        let configs: Vec<&PbxObject> = config_list
            .get_array("buildConfigurations")
            .unwrap()
            .iter()
            .filter_map(|v| v.as_id())
            .filter_map(|id| project.get_object(&id.to_hex()))
            .collect();

        let names: Vec<&str> = configs.iter().filter_map(|c| c.get_string("name")).collect();
        assert_eq!(names, vec!["Debug", "Release"]);

        for config in &configs {
            assert_eq!(project.get_build_setting(config, "PRODUCT_NAME"), Some("$(TARGET_NAME)".to_string()));
        }
        let _ = fs::remove_dir_all(&root);
    }
}
