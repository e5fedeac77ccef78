fn main() {
    // Exposed to the crate as `BUILD_DATE`
    let built = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", built);
    println!("cargo:rerun-if-changed=build.rs");
}
