// Build script: copies the static host page (and any bundle wasm-pack left in
// static/pkg) to `dist/`. The bundle itself is produced by `cargo run`
// (src/main.rs) or a direct `wasm-pack build --target web --out-dir static/pkg`.
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    // Copy static/ to dist/
    let out_dir = Path::new("dist");
    if let Err(e) = fs_extra::dir::create_all(out_dir, true) {
        println!("cargo:warning=could not prepare dist/: {e}");
        return;
    }
    let options = fs_extra::dir::CopyOptions::new().content_only(true);
    if let Err(e) = fs_extra::dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=could not copy static/ to dist/: {e}");
    }
}
