use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(digit_width_32)");
    println!("cargo:rustc-check-cfg=cfg(digit_width_64)");

    // Decide ideal digit width for BigInt arithmetic. Refer to src/digit.rs
    // for where this has an effect. Inspect the target, not the host running
    // this build script.
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let pointer_width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    let digit_width_64 = matches!(
        target_arch.as_str(),
        "aarch64" | "mips64" | "powerpc64" | "x86_64"
    ) || pointer_width == "64";
    if digit_width_64 {
        println!("cargo:rustc-cfg=digit_width_64");
    } else {
        println!("cargo:rustc-cfg=digit_width_32");
    }
}
