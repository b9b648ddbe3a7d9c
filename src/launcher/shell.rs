use std::process::{Child, Command};

use crate::{
    error::{LaunchError, LaunchResult},
    launcher::Launcher,
};

/// Platform "open with application" command
const OPEN_COMMAND: &str = "open";

/// Launcher that shells out to the platform open command
/// (`open -a <app> <path>`), detached from the editor
#[derive(Debug, Default, uniffi::Object)]
pub struct ShellLauncher;

#[uniffi::export]
impl ShellLauncher {
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ShellLauncher {
    fn spawn_open(path: &str, app_id: &str) -> LaunchResult<Child> {
        Command::new(OPEN_COMMAND)
            .arg("-a")
            .arg(app_id)
            .arg(path)
            .spawn()
            .map_err(|err| LaunchError::spawn_failed(app_id, path, err.to_string()))
    }
}

impl Launcher for ShellLauncher {
    fn open(&self, path: &str, app_id: &str) -> bool {
        match Self::spawn_open(path, app_id) {
            Ok(mut child) => {
                let path = path.to_string();
                let app_id = app_id.to_string();
                // reap the child off the caller's thread; the outcome is only logged
                std::thread::spawn(move || match child.wait() {
                    Ok(status) if status.success() => {
                        log::debug!("{app_id} opened {path}");
                    }
                    Ok(status) => {
                        log::warn!("{app_id} exited with {status} while opening {path}");
                    }
                    Err(err) => {
                        log::warn!("could not observe open command for {path}: {err}");
                    }
                });
                true
            }
            Err(err) => {
                log::error!("{err}");
                false
            }
        }
    }
}
