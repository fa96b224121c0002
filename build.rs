use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn commit_info() -> String {
    let output = Command::new("git")
        .args(["log", "-1", "--date=short", "--format=%h %cd"])
        .output();
    match output {
        Ok(output) if output.status.success() => {
            let info = String::from_utf8_lossy(&output.stdout);
            let info = info.trim();
            if info.is_empty() {
                String::new()
            } else {
                format!(" ({info})")
            }
        }
        _ => String::new(),
    }
}

fn main() {
    File::create(Path::new(&std::env::var("OUT_DIR").unwrap()).join("commit-info.txt"))
        .unwrap()
        .write_all(commit_info().as_bytes())
        .unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
