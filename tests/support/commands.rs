//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envcrypt command isolated from the caller's environment.
    ///
    /// Returns a Command with:
    /// - Current directory set to the test service directory
    /// - ENVCRYPT_* overrides cleared and colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envcrypt").expect("failed to find envcrypt binary");
        for var in [
            "ENVCRYPT_STAGE",
            "ENVCRYPT_REGION",
            "ENVCRYPT_PROFILE",
            "ENVCRYPT_SERVICE_PATH",
            "ENVCRYPT_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envcrypt init`.
    pub fn init_cmd(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run envcrypt init")
    }

    /// Shortcut for setting a stage secret.
    pub fn set(&self, stage: &str, variable: &str, value: &str) -> Output {
        self.cmd()
            .args([
                "encryptor",
                "--stage",
                stage,
                "--variable",
                variable,
                "--value",
                value,
            ])
            .output()
            .expect("failed to run envcrypt encryptor")
    }

    /// Shortcut for setting a common secret.
    pub fn set_common(&self, variable: &str, value: &str) -> Output {
        self.cmd()
            .args(["encryptor", "--common", "--variable", variable, "--value", value])
            .output()
            .expect("failed to run envcrypt encryptor --common")
    }

    /// Shortcut for revealing a stage secret.
    pub fn reveal(&self, stage: &str, variable: &str) -> Output {
        self.cmd()
            .args(["encryptor", "--decrypt", "--stage", stage, "--variable", variable])
            .output()
            .expect("failed to run envcrypt encryptor --decrypt")
    }

    /// Shortcut for revealing a common secret.
    pub fn reveal_common(&self, variable: &str) -> Output {
        self.cmd()
            .args(["encryptor", "--decrypt", "--common", "--variable", variable])
            .output()
            .expect("failed to run envcrypt encryptor --decrypt --common")
    }
}
