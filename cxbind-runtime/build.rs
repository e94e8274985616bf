fn main() {
    // The raw declarations in src/sys.rs only need the native library when
    // the native-calling adapters are compiled in.
    if std::env::var_os("CARGO_FEATURE_LIBCLANG").is_some() {
        println!("cargo:rustc-link-lib=dylib=clang");
        if let Ok(dir) = std::env::var("LIBCLANG_PATH") {
            println!("cargo:rustc-link-search=native={dir}");
        }
    }
}
