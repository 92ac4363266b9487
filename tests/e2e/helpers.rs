use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_manylicenses").to_string();

        Self { dir, binary_path }
    }

    pub fn write_package_json(&self, content: &str) {
        self.write_package_json_in(self.dir.path(), content);
    }

    pub fn write_package_json_in(&self, project_dir: &Path, content: &str) {
        fs::create_dir_all(project_dir).expect("Failed to create project dir");
        fs::write(project_dir.join("package.json"), content).expect("Failed to write package.json");
    }

    /// Install a fake `node_modules/<name>/package.json`.
    pub fn install_package(&self, name: &str, manifest: &str) {
        self.install_package_in(self.dir.path(), name, manifest);
    }

    pub fn install_package_in(&self, project_dir: &Path, name: &str, manifest: &str) {
        let package_dir = project_dir.join("node_modules").join(name);
        fs::create_dir_all(&package_dir).expect("Failed to create package dir");
        fs::write(package_dir.join("package.json"), manifest).expect("Failed to write package manifest");
    }

    /// Run the binary in the project directory with `input` on stdin.
    pub fn run_manylicenses(&self, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to run manylicenses");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write inventory to stdin");

        child.wait_with_output().expect("Failed to wait for manylicenses")
    }
}

/// A `yarn licenses list --json` style stream with one table.
pub fn inventory(rows: &[[&str; 6]]) -> String {
    let table = serde_json::json!({
        "type": "table",
        "data": {
            "head": ["Name", "Version", "License", "URL", "VendorURL", "VendorName"],
            "body": rows,
        }
    });
    let info = serde_json::json!({"type": "info", "data": "Done in 0.42s."});
    format!("{}\n{}\n", table, info)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
