//! Operating system probe for the initial theme resolution.

/// Best-effort check of the OS dark-mode preference. Defaults to light when
/// the platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    probe().unwrap_or(false)
}

// Windows: registry preference under Themes\Personalize
#[cfg(target_os = "windows")]
fn probe() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let hkcu = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let value: u32 = hkcu.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

// Linux: ask gsettings, color-scheme first, gtk-theme as a fallback
#[cfg(target_os = "linux")]
fn probe() -> Option<bool> {
    use std::process::Command;

    let gsettings = |key: &str| -> Option<String> {
        let output = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", key])
            .output()
            .ok()?;
        Some(String::from_utf8_lossy(&output.stdout).to_lowercase())
    };

    if let Some(scheme) = gsettings("color-scheme") {
        if scheme.contains("prefer-dark") {
            return Some(true);
        }
    }
    if let Some(theme) = gsettings("gtk-theme") {
        if theme.contains("dark") {
            return Some(true);
        }
    }
    None
}

// macOS: AppleInterfaceStyle is only set when dark mode is on
#[cfg(target_os = "macos")]
fn probe() -> Option<bool> {
    use std::process::Command;

    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
    Some(style.contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn probe() -> Option<bool> {
    None
}
