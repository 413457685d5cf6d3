//! Pure Rust benchmark — no napi/JS overhead.
//!
//! Run: cargo bench --no-default-features --bench parse_build

use std::time::Instant;

use sushi_xcode::project::XcodeProject;
use sushi_xcode::types::value::Value;

const WARMUP: usize = 10;
const ITERATIONS: usize = 200;

fn median(times: &mut Vec<f64>) -> f64 {
    times.sort_by(|a, b| a.partial_cmp(b).unwrap());
    times[times.len() / 2]
}

fn bench<F: FnMut()>(mut f: F) -> f64 {
    for _ in 0..WARMUP {
        f();
    }
    let mut times = Vec::with_capacity(ITERATIONS);
    for _ in 0..ITERATIONS {
        let start = Instant::now();
        f();
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    median(&mut times)
}

/// Build a project with `file_count` source files wired into one native
/// target's sources phase, exercising the same code paths a real project of
/// that size would.
fn synthetic_project(file_count: usize) -> XcodeProject {
    let mut project = XcodeProject::empty("Bench");
    let mut build_files = Vec::with_capacity(file_count);

    for i in 0..file_count {
        let file_name = format!("File{i}.swift");
        let file_ref_id = project.create_object("PBXFileReference", Some(&file_name));
        {
            let file_ref = project.get_object_mut(&file_ref_id.to_hex()).unwrap();
            file_ref.map_mut().set_string("lastKnownFileType", "sourcecode.swift");
            file_ref.map_mut().set_string("path", file_name);
            file_ref.map_mut().set_string("sourceTree", "<group>");
        }

        let build_file_id = project.create_object("PBXBuildFile", None);
        project
            .get_object_mut(&build_file_id.to_hex())
            .unwrap()
            .map_mut()
            .set_id("fileRef", file_ref_id);
        build_files.push(Value::Id(build_file_id));
    }

    let phase_id = project.create_object("PBXSourcesBuildPhase", Some("Sources"));
    {
        let phase = project.get_object_mut(&phase_id.to_hex()).unwrap();
        phase.map_mut().set_integer("buildActionMask", 2147483647);
        phase.map_mut().set_array("files", build_files);
        phase.map_mut().set_bool("runOnlyForDeploymentPostprocessing", false);
    }

    let target_id = project.create_object("PBXNativeTarget", Some("Bench"));
    {
        let target = project.get_object_mut(&target_id.to_hex()).unwrap();
        target.map_mut().set_string("name", "Bench");
        target.map_mut().set_array("buildPhases", vec![Value::Id(phase_id)]);
        target.map_mut().set_array("buildRules", vec![]);
        target.map_mut().set_array("dependencies", vec![]);
    }
    if let Some(root) = project.root_object_mut() {
        root.map_mut().set_array("targets", vec![Value::Id(target_id)]);
    }

    project
}

fn main() {
    let sizes = [(10, "tiny"), (200, "medium"), (2000, "large")];

    println!("================================================================");
    println!(" Pure Rust Benchmark (no napi/JS overhead)");
    println!("================================================================");
    println!("Warmup: {}, Iterations: {}", WARMUP, ITERATIONS);
    println!();

    for (file_count, label) in sizes {
        let project = synthetic_project(file_count);
        let text = project.to_pbxproj();
        let mb = text.len() as f64 / (1024.0 * 1024.0);

        let parse_med = bench(|| {
            let _ = XcodeProject::from_pbxproj(&text).unwrap();
        });

        let build_med = bench(|| {
            let _ = project.to_pbxproj();
        });

        let rt_med = bench(|| {
            let p = XcodeProject::from_pbxproj(&text).unwrap();
            let _ = p.to_pbxproj();
        });

        let json_med = bench(|| {
            let _ = project.to_json();
        });

        println!("─ {} ({} files, {:.2} MB) ─", label, file_count, mb);
        println!("  Parse:      {:>7.3} ms  ({:.0} MB/s)", parse_med, mb / (parse_med / 1000.0));
        println!("  Build:      {:>7.3} ms  ({:.0} MB/s)", build_med, mb / (build_med / 1000.0));
        println!("  Round-trip: {:>7.3} ms  ({:.0} MB/s)", rt_med, mb / (rt_med / 1000.0));
        println!("  to_json:    {:>7.3} ms", json_med);
        println!();
    }
}
