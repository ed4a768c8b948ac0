//! Renders every declared resource with `crudgen-gen` into `OUT_DIR`.
//!
//! The artifacts are nested as inline modules of a single file,
//! `<package>::<module>`, so `src/lib.rs` can pull them in with one
//! `include!`.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use crudgen_gen::config::GeneratorConfig;
use crudgen_gen::output::{ArtifactKind, Generator, module_name};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let resources = crudgen_definitions::all_resources();
    let artifacts = Generator::new(GeneratorConfig::new().base_path("")).render_all(&resources)?;

    let mut packages: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for artifact in artifacts {
        if artifact.kind == ArtifactKind::PackageModule {
            continue;
        }
        let package = artifact
            .path
            .parent()
            .and_then(|p| p.to_str())
            .ok_or_else(|| format!("{} is not inside a package", artifact.path.display()))?;
        let module = module_name(&artifact.path)
            .ok_or_else(|| format!("{} is not a module file", artifact.path.display()))?;
        packages
            .entry(package.to_string())
            .or_default()
            .push((module, artifact.content));
    }

    let mut out = String::new();
    for (package, modules) in packages {
        out.push_str(&format!("pub mod {package} {{\n"));
        for (module, content) in modules {
            out.push_str(&format!("pub mod {module} {{\n{content}\n}}\n"));
        }
        out.push_str("}\n");
    }
    fs::write(out_dir.join("crudgen_schema.rs"), out)?;

    Ok(())
}
