//! Cross-process determinism for search reports.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts all produce identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("grid_digest=sha256:"), "missing grid_digest");
    for name in ["bfs", "dfs", "ids"] {
        assert!(
            baseline.contains(&format!("{name}.report_digest=sha256:")),
            "missing {name}.report_digest"
        );
    }
    assert!(baseline.contains("bfs.termination_reason=goal_reached"));
    assert!(baseline.contains("dfs.termination_reason=goal_reached"));

    let tmp = std::env::temp_dir();
    let variants: [(&str, &[(&str, &str)]); 3] = [
        (tmp.to_str().expect("temp dir is UTF-8"), &[]),
        (root.as_str(), &[("LC_ALL", "C")]),
        (root.as_str(), &[("LANG", "en_US.UTF-8"), ("TZ", "Pacific/Auckland")]),
    ];
    for (dir, env) in variants {
        let output = run_variant(dir, env);
        assert_eq!(
            output, baseline,
            "output diverged (work_dir={dir}, env={env:?})"
        );
    }
}

#[test]
fn bfs_and_ids_agree_on_fixture_length_when_ids_succeeds() {
    let baseline = run_variant(&workspace_root(), &[]);
    let value = |key: &str| -> String {
        baseline
            .lines()
            .find_map(|l| l.strip_prefix(&format!("{key}=")).map(str::to_string))
            .unwrap_or_else(|| panic!("missing {key}"))
    };
    let bfs: usize = value("bfs.steps").parse().expect("bfs succeeds");
    if let Ok(ids) = value("ids.steps").parse::<usize>() {
        assert!(ids >= bfs, "ids {ids} shorter than bfs {bfs}");
    }
    for name in ["bfs", "dfs", "ids"] {
        let nodes: u64 = value(&format!("{name}.nodes_expanded")).parse().unwrap();
        let events: u64 = value(&format!("{name}.trace_events")).parse().unwrap();
        assert_eq!(nodes, events, "{name}");
    }
}
