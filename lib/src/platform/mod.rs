//! Platform specific lookup of configuration directories.
#[cfg(target_vendor = "apple")]
mod apple;
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
mod linux;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_vendor = "apple")]
pub use self::apple::directories;
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
pub use self::linux::directories;
#[cfg(target_os = "windows")]
pub use self::windows::directories;
