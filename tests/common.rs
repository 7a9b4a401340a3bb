#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

/// An isolated sounddesk home: its own config directory and database.
pub struct Desk {
    home: TempDir,
    pub db: String,
}

impl Desk {
    /// Create the home and run `init` against it.
    pub fn init() -> Self {
        let desk = Self::uninitialized();
        desk.cmd(&["init"]).assert().success();
        desk
    }

    /// A home with no database yet.
    pub fn uninitialized() -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let db = home
            .path()
            .join("desk.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db }
    }

    /// The binary, pointed at this desk's home and database.
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = cargo_bin_cmd!("sounddesk");
        cmd.env("SOUNDDESK_HOME", self.home.path())
            .env_remove("SOUNDDESK_LOG")
            .args(["--db", &self.db, "--test"])
            .args(args);
        cmd
    }

    /// Write `sounddesk.conf` into this desk's home.
    pub fn write_config(&self, yaml: &str) {
        std::fs::write(self.home.path().join("sounddesk.conf"), yaml).expect("write config");
    }

    /// Run a command that prints `(id: <uuid>)` and return the uuid.
    pub fn add(&self, args: &[&str]) -> String {
        let out = self.cmd(args).assert().success().get_output().stdout.clone();
        extract_id(&String::from_utf8_lossy(&out))
    }

    pub fn add_member(&self, name: &str, availability: &str) -> String {
        self.add(&[
            "team",
            "add",
            "--name",
            name,
            "--role",
            "Audio Engineer",
            "--phone",
            "(555) 123-4567",
            "--email",
            "crew@church.org",
            "--availability",
            availability,
        ])
    }
}

pub fn extract_id(stdout: &str) -> String {
    let start = stdout
        .find("(id: ")
        .unwrap_or_else(|| panic!("no id in output: {stdout}"))
        + "(id: ".len();
    stdout[start..start + 36].to_string()
}
