//! End-to-end tests: generate artifacts and inspect the written tree.

use std::fs;
use std::path::Path;
use std::process::Command;

use crudgen_define::{FieldInfo, FieldType, Operation, ResourceDefinition};
use crudgen_gen::config::GeneratorConfig;
use crudgen_gen::errors::GeneratorError;
use crudgen_gen::output::{ArtifactKind, generate_all};
use crudgen_gen::render::GENERATED_HEADER;
use tempfile::TempDir;

fn generate_into(dir: &Path) -> crudgen_gen::output::GenerationReport {
    let resources = crudgen_definitions::all_resources();
    generate_all(&resources, GeneratorConfig::new().base_path(dir)).expect("generation failed")
}

#[test]
fn artifacts_land_at_expected_paths() {
    let temp = TempDir::new().unwrap();
    let report = generate_into(temp.path());

    for resource in crudgen_definitions::all_resources() {
        assert!(temp.path().join(&resource.out_file).is_file(), "{}", resource.name);
    }
    for package in ["scopes", "targets", "hosts", "accounts", "roles"] {
        assert!(temp.path().join(package).join("option.rs").is_file(), "{package}");
        assert!(temp.path().join(package).join("mod.rs").is_file(), "{package}");
    }
    assert_eq!(
        report.of_kind(ArtifactKind::Resource).count(),
        crudgen_definitions::all_resources().len()
    );
}

#[test]
fn regeneration_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let first = generate_into(temp.path());
    let before: Vec<Vec<u8>> = first
        .artifacts
        .iter()
        .map(|a| fs::read(&a.path).unwrap())
        .collect();

    let second = generate_into(temp.path());
    for (artifact, old) in second.artifacts.iter().zip(&before) {
        assert_eq!(&fs::read(&artifact.path).unwrap(), old, "{}", artifact.path.display());
    }
}

#[test]
fn every_artifact_parses_as_rust() {
    let temp = TempDir::new().unwrap();
    let report = generate_into(temp.path());
    for artifact in &report.artifacts {
        let code = fs::read_to_string(&artifact.path).unwrap();
        assert!(code.starts_with(GENERATED_HEADER));
        syn::parse_file(&code).unwrap_or_else(|e| panic!("{}: {e}", artifact.path.display()));
    }
}

#[test]
fn target_surface() {
    let temp = TempDir::new().unwrap();
    generate_into(temp.path());
    let code = fs::read_to_string(temp.path().join("targets/target.rs")).unwrap();

    assert!(code.contains("impl crudgen::Versioned for Target"));
    assert!(code.contains("resource_type: &str"));
    assert!(code.contains("opts.set_post(\"type\", resource_type)"));
    assert!(code.contains("pub async fn set_host_sets("));
    assert!(code.contains("\"targets/{}:remove-host-sets\""));
    assert!(code.contains("crudgen::path_segment(target_id)"));

    let options = fs::read_to_string(temp.path().join("targets/option.rs")).unwrap();
    assert!(options.contains("pub fn with_tcp_default_port(default_port: u32)"));
    assert!(options.contains("o.set_attribute(\"default_port\", default_port)"));
    assert!(options.contains("pub fn with_recursive(recursive: bool)"));
}

#[test]
fn package_module_declares_every_file() {
    let temp = TempDir::new().unwrap();
    generate_into(temp.path());
    let code = fs::read_to_string(temp.path().join("targets/mod.rs")).unwrap();

    assert!(code.starts_with(GENERATED_HEADER));
    for module in ["host_set_reference", "option", "target", "tcp_target_attributes"] {
        assert!(code.contains(&format!("pub mod {module};")), "{module}");
    }
}

#[test]
fn top_level_and_nested_paths_are_both_plural() {
    let temp = TempDir::new().unwrap();
    generate_into(temp.path());
    let scope = fs::read_to_string(temp.path().join("scopes/scope.rs")).unwrap();
    let host = fs::read_to_string(temp.path().join("hosts/host.rs")).unwrap();

    assert!(scope.contains("\"scopes\""));
    assert!(scope.contains("\"scopes/{}\""));
    assert!(host.contains("\"hosts\""));
    assert!(host.contains("\"hosts/{}\""));
}

#[test]
fn option_functions_are_alphabetical() {
    let temp = TempDir::new().unwrap();
    generate_into(temp.path());
    let code = fs::read_to_string(temp.path().join("scopes/option.rs")).unwrap();

    let description = code.find("pub fn with_description(").unwrap();
    let filter = code.find("pub fn with_filter(").unwrap();
    let name = code.find("pub fn with_name(").unwrap();
    let skip = code.find("pub fn with_skip_admin_role_creation(").unwrap();
    assert!(description < filter && filter < name && name < skip);
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let config = GeneratorConfig::new().base_path(temp.path()).dry_run(true);
    let report = generate_all(&crudgen_definitions::all_resources(), config).unwrap();

    assert!(report.dry_run);
    assert!(!report.is_empty());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn invalid_definition_aborts_before_output() {
    let temp = TempDir::new().unwrap();
    let mut resources = crudgen_definitions::all_resources();
    resources.push(
        ResourceDefinition::new("Broken", "broken", "broken/broken.rs")
            .with_fields([FieldInfo::new("Version", FieldType::U32, "version")])
            .with_path(["a", "b"])
            .with_operations([Operation::Read]),
    );

    let err = generate_all(&resources, GeneratorConfig::new().base_path(temp.path())).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidPathChain { .. }));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_base_path_reports_write_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let err = generate_all(
        &crudgen_definitions::all_resources(),
        GeneratorConfig::new().base_path(&blocker),
    )
    .unwrap_err();
    assert!(matches!(err, GeneratorError::WriteError { .. }));
}

/// Generates into the `src/` of a scratch crate depending on the runtime,
/// declares each package from `lib.rs` and type-checks it.
#[test]
#[ignore = "slow: compiles generated code"]
fn generated_code_compiles() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let crate_dir = temp.path().join("generated");
    let src_dir = crate_dir.join("src");
    let report = generate_into(&src_dir);

    let modules: String = report
        .of_kind(ArtifactKind::PackageModule)
        .map(|a| {
            let package = a.path.parent().unwrap().file_name().unwrap();
            format!("pub mod {};\n", package.to_string_lossy())
        })
        .collect();
    fs::write(src_dir.join("lib.rs"), modules).unwrap();

    let runtime = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    fs::write(
        crate_dir.join("Cargo.toml"),
        format!(
            "[package]\nname = \"generated\"\nversion = \"0.0.0\"\nedition = \"2024\"\n\n\
             [dependencies]\ncrudgen = {{ path = {:?} }}\n\n[workspace]\n",
            runtime.display().to_string()
        ),
    )
    .unwrap();

    let output = Command::new("cargo")
        .args(["check", "--manifest-path"])
        .arg(crate_dir.join("Cargo.toml"))
        .output()
        .expect("Failed to run cargo check");

    if !output.status.success() {
        panic!(
            "Generated code failed to compile:\n\nSTDOUT:\n{}\n\nSTDERR:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
