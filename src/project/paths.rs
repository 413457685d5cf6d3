use crate::objects::PbxObject;

use super::xcode_project::XcodeProject;

/// Resolve the real filesystem path for a file reference or group, combining
/// its resolved source-tree base with its own `path`.
pub fn get_real_path(project: &XcodeProject, object: &PbxObject) -> Option<String> {
    let source_tree_path = get_source_tree_real_path(project, object)?;
    let path = object.get_string("path").unwrap_or("");
    if source_tree_path.is_empty() && path.is_empty() {
        return None;
    }
    if source_tree_path.is_empty() {
        Some(path.to_string())
    } else if path.is_empty() {
        Some(source_tree_path)
    } else {
        Some(format!("{}/{}", source_tree_path, path))
    }
}

/// Resolve the source-tree base path for an object's `sourceTree` value.
pub fn get_source_tree_real_path(project: &XcodeProject, object: &PbxObject) -> Option<String> {
    let source_tree = object.get_string("sourceTree")?;

    match source_tree {
        "<group>" => {
            let parent = get_parent(project, object)?;
            if parent.isa() == "PBXProject" {
                let project_root = project.get_project_root().unwrap_or_default();
                let project_dir = parent.get_string("projectDirPath").unwrap_or("");
                if project_dir.is_empty() {
                    Some(project_root)
                } else {
                    Some(format!("{}/{}", project_root, project_dir))
                }
            } else {
                get_real_path(project, &parent)
            }
        }
        "SOURCE_ROOT" => project.get_project_root(),
        "<absolute>" => Some(String::new()),
        other => Some(other.to_string()),
    }
}

/// Get the full (project-relative) path for an object.
pub fn get_full_path(project: &XcodeProject, object: &PbxObject) -> Option<String> {
    let root_path = get_resolved_root_path(project, object);
    let path = object.get_string("path").unwrap_or("");

    if path.is_empty() {
        root_path
    } else if let Some(root) = root_path {
        if root.is_empty() {
            Some(path.to_string())
        } else {
            Some(format!("{}/{}", root, path))
        }
    } else {
        Some(path.to_string())
    }
}

fn get_resolved_root_path(project: &XcodeProject, object: &PbxObject) -> Option<String> {
    let source_tree = object.get_string("sourceTree")?;

    match source_tree {
        "<group>" => {
            let parent = get_parent(project, object)?;
            if parent.isa() == "PBXProject" {
                Some(String::new())
            } else {
                get_full_path(project, &parent)
            }
        }
        "SOURCE_ROOT" => Some(String::new()),
        "<absolute>" => Some("/".to_string()),
        other => Some(other.to_string()),
    }
}

/// Find the nearest group/project that references `object` as a child.
fn get_parent(project: &XcodeProject, object: &PbxObject) -> Option<PbxObject> {
    let id_hex = object.id().to_hex();
    project
        .get_referrers(&id_hex)
        .into_iter()
        .find(|r| matches!(r.isa(), "PBXGroup" | "PBXVariantGroup" | "PBXProject"))
        .cloned()
}

/// Walk parent groups up to (but excluding) the root, nearest-first reversed
/// to outermost-first.
pub fn get_parents(project: &XcodeProject, object: &PbxObject) -> Vec<PbxObject> {
    if project.main_group_id().as_deref() == Some(object.id().to_hex().as_str()) {
        return vec![];
    }

    match get_parent(project, object) {
        Some(parent) => {
            let mut parents = get_parents(project, &parent);
            parents.push(parent);
            parents
        }
        None => vec![],
    }
}
