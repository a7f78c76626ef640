fn main() {
    // Stamped into the footer's copyright year
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
