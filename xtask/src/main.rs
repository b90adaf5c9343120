//! Custom cargo commands for scour.
//!
//! Usage:
//!   cargo xtask check     - cargo check + test + clippy (native and wasm feature sets)
//!   cargo xtask test      - Run all tests
//!   cargo xtask wasm      - Build the browser bundle into pkg/
//!   cargo xtask wasm-test - Run the DOM binding tests in headless Firefox
//!   cargo xtask demo      - Build the bundle and a demo page in scour-demo/
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const WASM_FEATURES: &[&str] = &["--no-default-features", "--features", "wasm"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("wasm") => wasm()?,
        Some("wasm-test") => wasm_test()?,
        Some("demo") => demo()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check     cargo check + test + clippy, then check the wasm feature set
  test      Run all Rust tests
  wasm      Build the browser bundle with wasm-pack (target web)
  wasm-test Run tests/wasm.rs in headless Firefox via wasm-pack
  demo      Build the bundle and write a demo page next to it
  bench     Run benchmarks
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("[4/4] cargo check (wasm32)...");
    let mut args = vec!["check", "--lib", "--target", "wasm32-unknown-unknown"];
    args.extend_from_slice(WASM_FEATURES);
    run_cargo(&args)?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Build pkg/ with wasm-pack
fn wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--out-dir", "pkg"])
        .arg("--")
        .args(WASM_FEATURES)
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (install with `cargo install wasm-pack`)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Bundle written to {}", root.join("pkg").display());
    Ok(())
}

/// DOM binding tests in a real browser
fn wasm_test() -> Result<()> {
    let status = Command::new("wasm-pack")
        .args(["test", "--headless", "--firefox"])
        .arg("--")
        .args(WASM_FEATURES)
        .args(["--test", "wasm"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run wasm-pack (install with `cargo install wasm-pack`)")?;

    if !status.success() {
        bail!("wasm-pack test failed");
    }
    Ok(())
}

/// Bundle plus demo page, ready for any static file server
fn demo() -> Result<()> {
    wasm()?;

    let root = project_root()?;
    let out = root.join("scour-demo");
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "demo",
        "--output",
        &out.to_string_lossy(),
    ])?;

    copy_dir(&root.join("pkg"), &out.join("pkg"))?;
    println!(
        "✓ Demo ready: serve {} (e.g. `python3 -m http.server -d scour-demo`)",
        out.display()
    );
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn copy_dir(from: &std::path::Path, to: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;
    for entry in std::fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}
