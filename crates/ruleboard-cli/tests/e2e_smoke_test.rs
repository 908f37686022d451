use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use ruleboard_cli::{Args, OutputFormat, STDOUT, run};

const HEADER: &str = "Source System,Source Address,Target System,Target Address,Port,Direction,Purpose,Description,Status";

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("demos")
}

/// Collects all .tldr files from a directory
fn collect_tldr_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("tldr")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        format: None,
        force: false,
        log_level: "off".to_string(),
    }
}

fn csv_lines(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("Failed to read output");
    content
        .trim_start_matches('\u{FEFF}')
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_tldr_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.csv",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args(demo_path, &output_path)) {
            failed_demos.push((demo_path.clone(), e));
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_tldr_files(demos_dir().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.csv",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args(demo_path, &output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} produced output despite failing",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_vdi_to_web_csv() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("rules.csv");

    run(&args(&demos_dir().join("vdi_to_web.tldr"), &output_path)).expect("run succeeds");

    let lines = csv_lines(&output_path);
    assert_eq!(
        lines,
        [
            HEADER,
            "VDI,10.0.0.1,WEB,10.0.1.10,22,in,access,vdi -> web,처리",
            "VDI,10.0.0.2,WEB,10.0.1.10,22,in,access,vdi -> web,처리",
            "VDI,10.0.0.1,WEB,10.0.1.10,443,in,access,vdi -> web,처리",
            "VDI,10.0.0.2,WEB,10.0.1.10,443,in,access,vdi -> web,처리",
        ]
    );
}

#[test]
fn e2e_three_tier_csv() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("rules.csv");

    run(&args(&demos_dir().join("three_tier.tldr"), &output_path)).expect("run succeeds");

    let lines = csv_lines(&output_path);
    // Header, 1x1x3 load balancer rows, 1x3x1 database rows, 1 dangling row
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with("LB,192.168.0.10,APP,10.1.0.11,8080,in,http,"));
    assert!(lines[1].ends_with(",처리예정"));
    assert!(lines[4].starts_with("APP,10.1.0.11,DB,10.2.0.5,5432,out,queries,"));
    assert!(lines[4].ends_with(",미처리"));
    assert_eq!(lines[7], ",,,,9100,,metrics,->,미확인");
}

#[test]
fn e2e_json_format() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("rules.json");

    let mut json_args = args(&demos_dir().join("vdi_to_web.tldr"), &output_path);
    json_args.format = Some(OutputFormat::Json);
    run(&json_args).expect("run succeeds");

    let content = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(content.trim_start().starts_with('['));
    assert_eq!(content.matches("\"sourceSystem\": \"VDI\"").count(), 4);
}

#[test]
fn e2e_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("ruleboard.toml");
    fs::write(&config_path, "[export]\nbom = false\nline_ending = \"crlf\"\n")
        .expect("Failed to write config");
    let output_path = temp_dir.path().join("rules.csv");

    let mut config_args = args(&demos_dir().join("vdi_to_web.tldr"), &output_path);
    config_args.config = Some(config_path.to_string_lossy().to_string());
    run(&config_args).expect("run succeeds");

    let content = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(content.starts_with(HEADER));
    assert_eq!(content.matches("\r\n").count(), 4);
}

#[test]
fn e2e_rejects_other_extensions() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("diagram.json");
    fs::copy(demos_dir().join("vdi_to_web.tldr"), &input_path).expect("Failed to copy demo");
    let output_path = temp_dir.path().join("rules.csv");

    let mut input_args = args(&input_path, &output_path);
    assert!(run(&input_args).is_err());
    assert!(!output_path.exists());

    input_args.force = true;
    run(&input_args).expect("run succeeds with --force");
    assert_eq!(csv_lines(&output_path).len(), 5);
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = temp_dir.path().join("absent.tldr");
    let output_path = temp_dir.path().join("rules.csv");

    assert!(run(&args(&input_path, &output_path)).is_err());
}

#[test]
fn e2e_stdout_output() {
    let mut stdout_args = args(&demos_dir().join("vdi_to_web.tldr"), Path::new(STDOUT));
    stdout_args.format = Some(OutputFormat::Json);

    run(&stdout_args).expect("run succeeds");
    assert!(!Path::new(STDOUT).exists(), "`-` must not be written as a file");
}
