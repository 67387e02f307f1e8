// Stages static/ (page, styles, wasm-pack output in static/pkg) into dist/.
use std::{env, fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let root = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into());
    let static_dir = Path::new(&root).join("static");
    let out_dir = Path::new(&root).join("dist");

    if out_dir.exists() {
        fs::remove_dir_all(&out_dir).ok();
    }
    fs::create_dir_all(&out_dir).ok();

    if !static_dir.exists() {
        println!("cargo:warning=static/ missing – dist/ left empty");
        return;
    }

    let mut options = CopyOptions::new();
    options.content_only = true;
    options.overwrite = true;
    if let Err(err) = copy(&static_dir, &out_dir, &options) {
        println!("cargo:warning=failed to stage static/: {err}");
    }
}
