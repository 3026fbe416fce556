//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`,
//! refreshes `dist/`, and serves it locally for previewing the landing page.

use std::path::Path;
use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may load a stale bundle.");
        }
    }

    // build.rs copies static/ -> dist/ only when cargo rebuilds, so refresh
    // it here after the new pkg landed.
    if let Err(e) = refresh_dist(Path::new("static"), Path::new("dist")) {
        eprintln!("could not refresh dist/: {e}");
        std::process::exit(1);
    }

    println!("Serving landing page at http://127.0.0.1:{PORT} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "dist"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = server {
        eprintln!("failed to start http server (python3 required): {e}");
        std::process::exit(1);
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

fn refresh_dist(src: &Path, dst: &Path) -> Result<(), fs_extra::error::Error> {
    fs_extra::dir::create_all(dst, true)?;
    let options = fs_extra::dir::CopyOptions::new().content_only(true);
    fs_extra::dir::copy(src, dst, &options)?;
    Ok(())
}
