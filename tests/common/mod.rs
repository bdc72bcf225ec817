// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Script bodies of a fake build tool, one per target. The defaults behave
/// like a well-formed `test_fs_oper.mk` driven by GNU make.
pub struct FakeMake {
    pub create_tmp: &'static str,
    pub cp_tmp: &'static str,
    pub del_tmp: &'static str,
    pub ls_tmp: &'static str,
}

impl Default for FakeMake {
    fn default() -> Self {
        Self {
            create_tmp: "mkdir -p tmp",
            cp_tmp: "cp -R tmp tmp2",
            del_tmp: "rm -rf tmp",
            ls_tmp: "ls tmp",
        }
    }
}

impl FakeMake {
    /// Writes the script into `dir` and returns the command line that runs
    /// it, suitable as `make_command`.
    pub fn install(&self, dir: &Path) -> String {
        let script = format!(
            r#"#!/bin/sh
# invoked as: <script> -f <makefile> <target>
target="$3"
case "$target" in
  create-tmp) {} ;;
  cp-tmp) {} ;;
  del-tmp) {} ;;
  ls-tmp) {} ;;
  *) echo "unknown target: $target" >&2; exit 2 ;;
esac
"#,
            self.create_tmp, self.cp_tmp, self.del_tmp, self.ls_tmp
        );
        let path = dir.join("fake_make.sh");
        fs::write(&path, script).expect("Failed to write fake build tool");
        format!("sh {}", path.display())
    }
}

/// Creates a working directory containing the reference listing and a fake
/// build tool. Returns the directory and the build tool command line.
pub fn setup_fs_oper_environment(fake: &FakeMake, reference: &str) -> (TempDir, TempDir, String) {
    let work_dir = tempdir().expect("Failed to create working directory");
    let tool_dir = tempdir().expect("Failed to create tool directory");
    fs::write(work_dir.path().join("test_fs_oper.ref"), reference)
        .expect("Failed to write reference file");
    let make_command = fake.install(tool_dir.path());
    (work_dir, tool_dir, make_command)
}

/// Asserts the clean-environment invariant of the file-system sequence.
pub fn assert_scratch_dirs_removed(work_dir: &Path) {
    assert!(!work_dir.join("tmp").exists(), "tmp was left behind");
    assert!(!work_dir.join("tmp2").exists(), "tmp2 was left behind");
}

/// Writes an executable shell script at `root/relative` that appends its own
/// path to `log` and exits with `exit_code`.
#[cfg(unix)]
pub fn write_artifact(root: &Path, relative: &str, log: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create artifact directory");
    }
    let script = format!(
        "#!/bin/sh\necho \"$0\" >> '{}'\necho \"hello from $0\"\nexit {}\n",
        log.display(),
        exit_code
    );
    fs::write(&path, script).expect("Failed to write artifact");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make artifact executable");
    path
}

/// Writes a plain, non-executable file at `root/relative`.
pub fn write_plain_file(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directory");
    }
    fs::write(&path, "not a test").expect("Failed to write file");
    path
}

/// Returns the lines appended to an artifact log, or nothing if no artifact ran.
pub fn read_log(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .map(|content| content.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
