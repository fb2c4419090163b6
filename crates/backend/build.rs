use std::env;
use std::fs;
use std::path::Path;

// Places the workspace config.toml next to the compiled binary so the runtime
// loader finds it without any environment setup.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR sits under target/<profile>/build/backend-*/out; walk back up
    // to target/<profile> where the binary lands.
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source = workspace_root.join("config.toml");
    let dest = target_dir.join("config.toml");

    if source.exists() {
        fs::copy(&source, &dest)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
        println!("cargo:warning=Copied config.toml to {:?}", dest);
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source
        );
    }
}
