//! Build automation tasks for Coin Getter
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM + index.html into dist/web
//!   cargo xtask package-itch    # Zip dist/web for itch.io upload
//!   cargo xtask package-native  # Release binary + assets + default config

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const CRATE_NAME: &str = "coin-getter";
const MACROQUAD_JS: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Coin Getter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for the browser
    BuildWeb,
    /// Create zip file ready for itch.io upload
    PackageItch,
    /// Build a native release folder for the host platform
    PackageNative,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb => build_web(),
        Commands::PackageItch => package_itch(),
        Commands::PackageNative => package_native(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Copy assets/ if the project has any (the game runs without them)
fn copy_assets(root: &Path, dist: &Path) -> Result<()> {
    let assets = root.join("assets");
    if assets.exists() {
        copy_dir_recursive(&assets, &dist.join("assets"))?;
    } else {
        println!("No assets/ folder, sprites will be placeholder boxes");
    }
    Ok(())
}

/// Minimal page hosting the canvas macroquad draws into
fn index_html() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, user-scalable=no">
    <title>Coin Getter</title>
    <style>
        html, body, canvas {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background: #022661; }}
    </style>
</head>
<body>
    <canvas id="glcanvas" tabindex="1"></canvas>
    <script src="mq_js_bundle.js"></script>
    <script>load("{}.wasm");</script>
</body>
</html>
"#,
        CRATE_NAME
    )
}

/// Build WASM for web deployment
fn build_web() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "-p", CRATE_NAME]),
    )?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    let wasm = format!("{}.wasm", CRATE_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .context("WASM binary missing after build")?;
    std::fs::write(dist.join("index.html"), index_html())?;

    println!("Downloading {}...", MACROQUAD_JS);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dist.join("mq_js_bundle.js"))
            .arg(MACROQUAD_JS),
    )?;

    copy_assets(&root, &dist)?;

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    build_web()?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", CRATE_NAME);
    let zip_path = dist.join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", &format!("../{}", zip_name), "."]),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}

/// Native release with a commented-out default config next to the binary
fn package_native() -> Result<()> {
    let root = project_root()?;
    let platform = std::env::consts::OS;
    let dist = root.join("dist/native").join(platform);

    println!("Building native release for {}...", platform);

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "-p", CRATE_NAME]),
    )?;

    let binary = format!("{}{}", CRATE_NAME, std::env::consts::EXE_SUFFIX);
    std::fs::copy(root.join("target/release").join(&binary), dist.join(&binary))?;
    copy_assets(&root, &dist)?;

    std::fs::write(
        dist.join("coin_getter.ron"),
        "// Uncomment a field to override its default\n(\n    // initial_health: 100,\n    // enemy_damage: 10,\n    // seed: Some(1234),\n    // debug_log: false,\n)\n",
    )?;

    println!("Native build complete: dist/native/{}/", platform);
    Ok(())
}
