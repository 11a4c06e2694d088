//! Temporary project tree setup for integration tests
//!
//! A [`TestProject`] models the layout the engine expects: a tracked directory
//! (the "proj" marker) inside a parent working directory, an isolated settings
//! home, and a bin directory for fake clients that gets prepended to PATH.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use vcs_overlay::core::error::Result;

/// One throwaway project: `<temp>/proj` is the tracked tree, `<temp>` the
/// directory clients run from. The TempDir must stay alive for the duration
/// of the test to prevent cleanup.
pub struct TestProject {
    pub temp: TempDir,
    pub root: PathBuf,
    pub config_home: PathBuf,
    pub bin_dir: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;
        let root = temp.path().join("proj");
        let config_home = temp.path().join("config");
        let bin_dir = temp.path().join("bin");
        fs::create_dir(&root)?;
        fs::create_dir(&config_home)?;
        fs::create_dir(&bin_dir)?;
        Ok(Self {
            temp,
            root,
            config_home,
            bin_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory above the tracked tree; VCS clients run from here
    pub fn parent(&self) -> &Path {
        self.temp.path()
    }

    /// Create a file under the tracked tree, making parent directories
    pub fn create_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn create_dir(&self, relative: &str) -> Result<()> {
        fs::create_dir_all(self.root.join(relative))?;
        Ok(())
    }

    /// Install a fake console client that prints `stdout` for every call
    pub fn install_fake_client(&self, name: &str, stdout: &str) -> Result<()> {
        let mut body = stdout.to_string();
        if !body.is_empty() && !body.ends_with('\n') {
            body.push('\n');
        }
        let script = format!("#!/bin/sh\ncat <<'EOF'\n{body}EOF\n");
        self.install_script(name, &script)
    }

    /// Install a fake graphical client that appends each invocation's
    /// arguments to a log file, one line per launch. Returns the log path.
    pub fn install_recording_gui(&self, name: &str) -> Result<PathBuf> {
        let log = self.temp.path().join(format!("{name}.log"));
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n",
            log.display()
        );
        self.install_script(name, &script)?;
        Ok(log)
    }

    fn install_script(&self, name: &str, script: &str) -> Result<()> {
        let path = self.bin_dir.join(name);
        fs::write(&path, script)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }
        Ok(())
    }

    /// A binary invocation wired to this project: isolated settings home,
    /// fake-client bin on PATH, working directory inside the tracked tree
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vcs-overlay").expect("vcs-overlay binary");
        let mut paths = vec![self.bin_dir.clone()];
        paths.extend(env::split_paths(&env::var_os("PATH").unwrap_or_default()));
        let path_value = env::join_paths(paths).expect("PATH stays joinable");
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("PATH", path_value)
            .current_dir(&self.root);
        cmd
    }

    /// Persist one setting through the config command
    pub fn configure(&self, name: &str, value: &str) {
        self.command()
            .args(["config", name, value])
            .assert()
            .success();
    }

    /// Initialize a real git repository at the parent, so status lines come
    /// back prefixed with the tracked directory's name
    pub fn git_init(&self) -> Result<()> {
        run_git(self.parent(), &["init"])?;
        run_git(self.parent(), &["config", "user.name", "Test User"])?;
        run_git(self.parent(), &["config", "user.email", "test@example.com"])?;
        Ok(())
    }

    pub fn git_add_all(&self) -> Result<()> {
        run_git(self.parent(), &["add", "."])
    }

    pub fn git_commit(&self, message: &str) -> Result<()> {
        run_git(self.parent(), &["commit", "-m", message])
    }
}

fn run_git(dir: &Path, args: &[&str]) -> Result<()> {
    Command::new("git").args(args).current_dir(dir).output()?;
    Ok(())
}
