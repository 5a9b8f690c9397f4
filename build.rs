//! Build script for mcal
//!
//! Embeds the build timestamp for the startup banner.

fn main() {
    // Only rerun when src/ files change (not on every cargo build)
    println!("cargo:rerun-if-changed=src");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    // Set environment variable for compile-time embedding
    println!("cargo:rustc-env=MCAL_BUILD_TIMESTAMP={}", timestamp);
}
