//! Process spawning for app launches and browser opens.

use std::io;
use std::process::{Command, Stdio};

/// Seam between the executor and the OS.
pub trait Launcher: Send + Sync {
    /// Start a desktop application without waiting for it.
    fn launch(&self, program: &str) -> io::Result<()>;

    /// Open `url` in the default browser.
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// Spawns real processes with the platform's opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str) -> io::Result<()> {
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", program]);
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.args(["-a", program]);
            c
        } else {
            Command::new(program)
        };
        spawn_detached(&mut cmd)
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        // rundll32 avoids cmd.exe treating '&' in query strings as a separator
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("rundll32");
            c.args(["url.dll,FileProtocolHandler", url]);
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(url);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        };
        spawn_detached(&mut cmd)
    }
}

fn spawn_detached(cmd: &mut Command) -> io::Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
