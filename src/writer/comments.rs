use std::collections::HashMap;

use crate::types::map::PMap;
use crate::types::value::Value;

/// Build a fallback id → comment table for objects whose own `IdRef` carries
/// no comment (typically builder-minted ids). The writer only consults this
/// when an id reference's `comment` field is `None` — a parsed document
/// keeps whatever comment it was read with.
pub fn create_reference_list(objects: &PMap) -> HashMap<String, String> {
    let mut cache = HashMap::new();

    let mut file_to_phase: HashMap<String, (&str, Option<&str>)> = HashMap::new();
    for (_id, value) in objects.iter() {
        if let Some(obj) = value.as_object() {
            let isa = obj.isa();
            if isa.ends_with("BuildPhase") {
                let phase_name = obj.get_string("name");
                if let Some(files) = obj.get_array("files") {
                    for f in files {
                        if let Value::Id(id) = f {
                            file_to_phase.insert(id.to_hex(), (isa, phase_name));
                        }
                    }
                }
            }
        }
    }

    for (id, value) in objects.iter() {
        get_comment_for_object(id, value, objects, &file_to_phase, &mut cache);
    }

    cache
}

fn get_comment_for_object(
    id: &str,
    value: &Value,
    objects: &PMap,
    file_to_phase: &HashMap<String, (&str, Option<&str>)>,
    cache: &mut HashMap<String, String>,
) -> Option<String> {
    let obj = value.as_object()?;
    let isa = obj.isa();

    if let Some(cached) = cache.get(id) {
        return Some(cached.clone());
    }

    let comment = if isa == "PBXBuildFile" {
        get_pbx_build_file_comment(id, obj.map(), objects, file_to_phase, cache)
    } else if isa == "XCConfigurationList" {
        Some(get_xc_configuration_list_comment(id, objects))
    } else if isa == "XCRemoteSwiftPackageReference" {
        match obj.get_string("repositoryURL") {
            Some(url) => Some(format!("{} \"{}\"", isa, get_repo_name_from_url(url))),
            None => Some(isa.to_string()),
        }
    } else if isa == "XCLocalSwiftPackageReference" {
        match obj.get_string("relativePath") {
            Some(p) => Some(format!("{} \"{}\"", isa, p)),
            None => Some(isa.to_string()),
        }
    } else if isa == "PBXProject" {
        Some("Project object".to_string())
    } else if isa.ends_with("BuildPhase") {
        Some(get_build_phase_name(obj.map(), isa))
    } else if isa == "PBXGroup" {
        let has_name = obj.get_string("name").is_some();
        let has_path = obj.get_string("path").is_some();
        if !has_name && !has_path {
            Some(String::new())
        } else {
            get_default_name(obj.map(), isa)
        }
    } else {
        get_default_name(obj.map(), isa)
    };

    if let Some(ref c) = comment {
        cache.insert(id.to_string(), c.clone());
    }

    comment
}

fn get_default_name(map: &PMap, isa: &str) -> Option<String> {
    map.get_string("name", "")
        .filter(|s| !s.is_empty())
        .or_else(|| map.get_string("productName", "").filter(|s| !s.is_empty()))
        .or_else(|| map.get_string("path", "").filter(|s| !s.is_empty()))
        .or_else(|| Some(isa.to_string()))
}

fn get_pbx_build_file_comment(
    id: &str,
    build_file: &PMap,
    objects: &PMap,
    file_to_phase: &HashMap<String, (&str, Option<&str>)>,
    cache: &mut HashMap<String, String>,
) -> Option<String> {
    let build_phase_name = if let Some(&(isa, name)) = file_to_phase.get(id) {
        name.map(|n| n.to_string())
            .unwrap_or_else(|| get_default_build_phase_name(isa).unwrap_or_default())
    } else {
        "[missing build phase]".to_string()
    };

    let ref_id = build_file
        .get_id("fileRef")
        .or_else(|| build_file.get_id("productRef"))
        .map(|id| id.to_hex());

    let name = if let Some(ref_id) = ref_id {
        if let Some(ref_value) = objects.get(&ref_id) {
            get_comment_for_object(&ref_id, ref_value, objects, file_to_phase, cache)
                .unwrap_or_else(|| "(null)".to_string())
        } else {
            "(null)".to_string()
        }
    } else {
        "(null)".to_string()
    };

    Some(format!("{} in {}", name, build_phase_name))
}

fn get_build_phase_name(map: &PMap, isa: &str) -> String {
    if let Some(name) = map.get_string("name", "").filter(|s| !s.is_empty()) {
        return name;
    }
    get_default_build_phase_name(isa).unwrap_or_default()
}

/// e.g. `"PBXSourcesBuildPhase"` → `"Sources"`.
fn get_default_build_phase_name(isa: &str) -> Option<String> {
    isa.strip_prefix("PBX")?.strip_suffix("BuildPhase").map(|s| s.to_string())
}

fn get_xc_configuration_list_comment(id: &str, objects: &PMap) -> String {
    for (inner_id, value) in objects.iter() {
        if let Some(obj) = value.as_object() {
            let config_list = obj.map().get_id("buildConfigurationList").map(|i| i.to_hex());
            if config_list.as_deref() == Some(id) {
                let isa = obj.isa();

                if let Some(name) = get_default_name_strict(obj.map()) {
                    return format!("Build configuration list for {} \"{}\"", isa, name);
                }

                if let Some(targets) = obj.get_array("targets") {
                    if let Some(Value::Id(first_target)) = targets.first() {
                        if let Some(target_obj) = objects.get(&first_target.to_hex()).and_then(|v| v.as_object()) {
                            let target_name = target_obj
                                .get_string("productName")
                                .or_else(|| target_obj.get_string("name"));
                            if let Some(name) = target_name {
                                return format!("Build configuration list for {} \"{}\"", isa, name);
                            }
                        }
                    }
                }

                let proxy_name = objects.iter().find_map(|(_, v)| {
                    let m = v.as_object()?;
                    if m.isa() == "PBXContainerItemProxy"
                        && m.map().get_id("containerPortal").map(|i| i.to_hex()).as_deref() == Some(inner_id)
                    {
                        m.get_string("remoteInfo").map(|s| s.to_string())
                    } else {
                        None
                    }
                });

                if let Some(name) = proxy_name {
                    return format!("Build configuration list for {} \"{}\"", isa, name);
                }

                return format!("Build configuration list for {}", isa);
            }
        }
    }
    "Build configuration list for [unknown]".to_string()
}

fn get_default_name_strict(map: &PMap) -> Option<String> {
    map.get_string("name", "")
        .filter(|s| !s.is_empty())
        .or_else(|| map.get_string("path", "").filter(|s| !s.is_empty()))
        .or_else(|| map.get_string("productName", "").filter(|s| !s.is_empty()))
}

fn get_repo_name_from_url(repo_url: &str) -> String {
    for prefix in ["https://github.com/", "http://github.com/"] {
        if let Some(path) = repo_url.strip_prefix(prefix) {
            if let Some(name) = path.split('/').last() {
                let name = name.strip_suffix(".git").unwrap_or(name);
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }
    repo_url.to_string()
}

pub fn is_pbx_build_file(isa: &str) -> bool {
    isa == "PBXBuildFile"
}

pub fn is_pbx_file_reference(isa: &str) -> bool {
    isa == "PBXFileReference"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_phase_name_strips_pbx_and_suffix() {
        assert_eq!(get_default_build_phase_name("PBXSourcesBuildPhase"), Some("Sources".to_string()));
        assert_eq!(get_default_build_phase_name("PBXFrameworksBuildPhase"), Some("Frameworks".to_string()));
        assert_eq!(get_default_build_phase_name("PBXProject"), None);
    }

    #[test]
    fn repo_name_from_url_strips_git_suffix() {
        assert_eq!(get_repo_name_from_url("https://github.com/expo/spm-package"), "spm-package");
        assert_eq!(get_repo_name_from_url("https://github.com/user/repo.git"), "repo");
        assert_eq!(get_repo_name_from_url("https://example.com/custom"), "https://example.com/custom");
    }
}
