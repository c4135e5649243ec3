//! Prepares the frontend bundle that `Assets` embeds.
//!
//! Always copies `index.html` into `$OUT_DIR/frontend-dist`. With the
//! `bundle` feature it also compiles `idea-board-frontend` for
//! `wasm32-unknown-unknown` and runs `wasm-bindgen` into the same directory.
//! The directory is exported as `IDEA_BOARD_FRONTEND_DIST`.

use std::path::Path;
use std::process::Command;
use std::{env, fs};

const FRONTEND: &str = "idea-board-frontend";

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let frontend_dir = Path::new(&manifest_dir).join(format!("../{FRONTEND}"));
    let dist_dir = Path::new(&out_dir).join("frontend-dist");

    println!("cargo:rerun-if-changed=../{FRONTEND}/src");
    println!("cargo:rerun-if-changed=../{FRONTEND}/Cargo.toml");
    println!("cargo:rerun-if-changed=../{FRONTEND}/index.html");
    println!("cargo:rerun-if-env-changed=IDEA_BOARD_API_URL");

    fs::create_dir_all(&dist_dir).expect("Failed to create dist directory");

    if env::var_os("CARGO_FEATURE_BUNDLE").is_some() {
        build_wasm(&frontend_dir, &out_dir, &dist_dir);
    } else {
        println!(
            "cargo:warning=Embedding index.html only; enable the `bundle` feature for a working frontend"
        );
    }

    fs::copy(frontend_dir.join("index.html"), dist_dir.join("index.html"))
        .expect("Failed to copy index.html");

    println!(
        "cargo:rustc-env=IDEA_BOARD_FRONTEND_DIST={}",
        dist_dir.display()
    );
}

fn build_wasm(frontend_dir: &Path, out_dir: &str, dist_dir: &Path) {
    // A separate target dir keeps the nested cargo off the outer build lock.
    let target_dir = Path::new(out_dir).join("wasm-target");

    println!("cargo:warning=Building frontend WASM...");
    let status = Command::new(env::var("CARGO").unwrap_or_else(|_| "cargo".into()))
        .current_dir(frontend_dir)
        .args(["build", "--target", "wasm32-unknown-unknown", "--release", "--lib"])
        .arg("--target-dir")
        .arg(&target_dir)
        .status()
        .expect("Failed to run cargo build for frontend");

    if !status.success() {
        panic!("Frontend WASM build failed");
    }

    let wasm_file = target_dir
        .join("wasm32-unknown-unknown/release")
        .join(format!("{}.wasm", FRONTEND.replace('-', "_")));

    if !wasm_file.exists() {
        panic!("WASM file not found at {wasm_file:?}. Frontend build may have failed.");
    }

    println!("cargo:warning=Running wasm-bindgen...");
    let status = Command::new("wasm-bindgen")
        .arg(&wasm_file)
        .arg("--out-dir")
        .arg(dist_dir)
        .args(["--target", "web", "--no-typescript"])
        .status()
        .expect(
            "Failed to run wasm-bindgen. Is it installed?\n\
             Run: cargo install wasm-bindgen-cli --version 0.2.104",
        );

    if !status.success() {
        panic!("wasm-bindgen failed for {FRONTEND}");
    }
}
