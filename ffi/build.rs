use std::env;
use std::path::PathBuf;

/// Regenerate `include/vocab.h`. A failure here must not break the Rust
/// build, so it is reported as a warning.
fn main() {
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    let Ok(crate_dir) = env::var("CARGO_MANIFEST_DIR") else {
        return;
    };
    let include_dir = PathBuf::from(&crate_dir).join("include");
    if let Err(e) = std::fs::create_dir_all(&include_dir) {
        println!("cargo:warning=cannot create {}: {e}", include_dir.display());
        return;
    }

    match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("VOCAB_FFI_H")
        .generate()
    {
        Ok(bindings) => {
            bindings.write_to_file(include_dir.join("vocab.h"));
        }
        Err(e) => println!("cargo:warning=cbindgen failed: {e}"),
    }
}
