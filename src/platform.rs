//! OS services the window needs: opening a file with its default
//! application and measuring the taskbar.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

pub trait PlatformServices {
    /// Hands `path` to the OS default handler without waiting for it.
    fn open(&self, path: &Path) -> io::Result<()>;

    /// Height the taskbar reserves at the screen edge, 0 when unknown.
    fn taskbar_height(&self) -> f32;
}

pub fn native() -> Box<dyn PlatformServices> {
    #[cfg(target_os = "windows")]
    { Box::new(Windows) }
    #[cfg(target_os = "macos")]
    { Box::new(MacOs) }
    #[cfg(all(unix, not(target_os = "macos")))]
    { Box::new(FreeDesktop) }
    #[cfg(not(any(windows, unix)))]
    { Box::new(Unsupported) }
}

fn spawn_detached(program: &str, path: &Path) -> io::Result<()> {
    spawn_reaped(program, path).map(|_| ())
}

/// Starts `program path` and waits for it on a background thread, so the
/// child is reaped once it exits.
fn spawn_reaped(program: &str, path: &Path) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = Command::new(program).arg(path).spawn()?;
    let program = program.to_owned();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => Some(status),
        Err(e) => {
            log::debug!("Waiting on {program} failed: {e}");
            None
        }
    }))
}

#[cfg(target_os = "windows")]
pub struct Windows;

#[cfg(target_os = "windows")]
impl PlatformServices for Windows {
    fn open(&self, path: &Path) -> io::Result<()> {
        spawn_detached("explorer", path)
    }

    fn taskbar_height(&self) -> f32 {
        use windows_sys::Win32::Foundation::RECT;
        use windows_sys::Win32::UI::WindowsAndMessaging::{
            GetSystemMetrics, SM_CYSCREEN, SPI_GETWORKAREA, SystemParametersInfoW,
        };

        let mut work = RECT { left: 0, top: 0, right: 0, bottom: 0 };
        // SAFETY: SPI_GETWORKAREA writes a single RECT into the pointer we pass.
        let ok = unsafe { SystemParametersInfoW(SPI_GETWORKAREA, 0, &mut work as *mut RECT as *mut _, 0) };
        if ok == 0 {
            return 0.0;
        }
        let screen_h = unsafe { GetSystemMetrics(SM_CYSCREEN) };
        let reserved = screen_h - (work.bottom - work.top);
        if screen_h <= 0 || reserved < 0 { 0.0 } else { reserved as f32 }
    }
}

#[cfg(target_os = "macos")]
pub struct MacOs;

#[cfg(target_os = "macos")]
impl PlatformServices for MacOs {
    fn open(&self, path: &Path) -> io::Result<()> {
        spawn_detached("open", path)
    }

    fn taskbar_height(&self) -> f32 {
        0.0
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
pub struct FreeDesktop;

#[cfg(all(unix, not(target_os = "macos")))]
impl PlatformServices for FreeDesktop {
    fn open(&self, path: &Path) -> io::Result<()> {
        spawn_detached("xdg-open", path)
    }

    fn taskbar_height(&self) -> f32 {
        0.0
    }
}

/// Used where no launcher is known.
pub struct Unsupported;

impl PlatformServices for Unsupported {
    fn open(&self, path: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("opening {} is not supported on this platform", path.display()),
        ))
    }

    fn taskbar_height(&self) -> f32 {
        0.0
    }
}
