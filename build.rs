use std::env;

fn main() {
    let explicit_u32 = env::var_os("CARGO_FEATURE_U32").is_some();
    let explicit_u64 = env::var_os("CARGO_FEATURE_U64").is_some();
    let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();

    if !explicit_u32 && !explicit_u64 {
        match pointer_width.as_str() {
            "64" => println!("cargo:rustc-cfg=feature=\"u64\""),
            _ => println!("cargo:rustc-cfg=feature=\"u32\""),
        }
    }
}
