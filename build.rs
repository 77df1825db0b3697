use std::path::PathBuf;

fn main() {
    // Ensure a working `protoc` is available across all CI runners by using a vendored binary.
    // This avoids relying on system packages on macOS/Windows/Linux (including cross builds).
    if let Ok(path) = protoc_bin_vendored::protoc_bin_path() {
        std::env::set_var("PROTOC", &path);
        eprintln!("build.rs: Using vendored protoc at {}", path.display());
    }

    println!("cargo:rerun-if-changed=protos");

    let proto_root = PathBuf::from("protos");
    let protos = vec![proto_root.join("netsurvey.proto")];

    // The vendored protoc ships the google.protobuf well-known types; include its
    // proto path so `import "google/protobuf/wrappers.proto"` resolves.
    let mut includes = vec![proto_root];
    if let Ok(wkt) = protoc_bin_vendored::include_path() {
        includes.push(wkt);
    }

    prost_build::Config::new()
        .compile_protos(&protos, &includes)
        .expect("Failed to compile protos");
}
