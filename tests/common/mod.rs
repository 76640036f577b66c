//! Shared testing utilities for vcbench CLI tests.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Testing harness: a fake source share and a destination area in a tempdir.
///
/// CLI invocations run with the tempdir as working directory, so log files
/// and config lookups stay contained.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    source_root: PathBuf,
    dest_root: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp directory for tests");
        let source_root = root.path().join("share");
        let dest_root = root.path().join("work");
        fs::create_dir_all(&source_root).expect("failed to create fake share");
        fs::create_dir_all(&dest_root).expect("failed to create work directory");
        Self { root, source_root, dest_root }
    }

    /// Directory the CLI runs in.
    pub fn cwd(&self) -> &Path {
        self.root.path()
    }

    /// Base path of the fake source share.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Destination area projects are created under.
    pub fn dest_root(&self) -> &Path {
        &self.dest_root
    }

    /// Root of a project created under the destination area.
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.dest_root.join(name)
    }

    /// Stage the three default drop files on the fake share.
    pub fn stage_default_drop(&self) {
        self.write_zip(
            "Launch_VC_Tricore_AURIX_TC23x_t32sim.zip",
            &[("launch.cmd", "run T32\n"), ("patch/readme.txt", "patch notes\n")],
        );
        self.write_zip(
            "SourceCode.zip",
            &[("src/main.c", "int main(void) { return 0; }\n"), ("src/util.h", "#pragma once\n")],
        );
        self.write_source_file("CCAST_.cfg", "C_COMPILER_TAG: TASKING_TRICORE\n");
    }

    /// Write a zip archive with the given entries onto the fake share.
    pub fn write_zip(&self, name: &str, entries: &[(&str, &str)]) {
        let file = File::create(self.source_root.join(name)).expect("failed to create zip");
        let mut writer = ZipWriter::new(file);
        for (entry_name, content) in entries {
            writer
                .start_file(*entry_name, SimpleFileOptions::default())
                .expect("failed to start zip entry");
            writer.write_all(content.as_bytes()).expect("failed to write zip entry");
        }
        writer.finish().expect("failed to finish zip");
    }

    /// Write a plain file onto the fake share.
    pub fn write_source_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.source_root.join(name);
        fs::write(&path, content).expect("failed to stage source file");
        path
    }

    /// Remove a staged file from the fake share.
    pub fn remove_source_file(&self, name: &str) {
        fs::remove_file(self.source_root.join(name)).expect("failed to remove source file");
    }

    /// Write a `vcbench.toml` into the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root.path().join("vcbench.toml"), content)
            .expect("failed to write config file");
    }

    /// Command preconfigured with the fake share and no settling delay.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_bare();
        cmd.arg("--source-root").arg(&self.source_root).args(["--settle-secs", "0"]);
        cmd
    }

    /// Command with only the working directory set.
    pub fn cli_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("vcbench").expect("failed to locate vcbench binary");
        cmd.current_dir(self.root.path());
        cmd
    }

    /// Assert the four fixed subdirectories exist under the project root.
    pub fn assert_layout_exists(&self, project: &str) {
        let root = self.project_path(project);
        for dir in [
            "VCAST_UT",
            "VectorCAST_patch_for_Tasking_Tricore_TC297TA_T32_Simulator",
            "SourceCode",
            "Master_CFG",
        ] {
            assert!(root.join(dir).is_dir(), "{} should exist under {}", dir, root.display());
        }
    }
}
