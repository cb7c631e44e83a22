use fltk::enums::Color;

use crate::app::content;
use crate::app::theme::Theme;

/// Concrete widget colors derived from the current theme. The palette flows
/// top-down through the section `apply` methods; no widget reads the theme
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub window_bg: Color,
    pub nav_bg: Color,
    pub card_bg: Color,
    pub card_border: Color,
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
    pub input_bg: Color,
    pub input_text: Color,
    pub button_bg: Color,
    pub button_text: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

pub fn rgb(triple: (u8, u8, u8)) -> Color {
    Color::from_rgb(triple.0, triple.1, triple.2)
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                window_bg: Color::from_rgb(10, 12, 18),
                nav_bg: Color::from_rgb(24, 28, 43),
                card_bg: Color::from_rgb(16, 19, 26),
                card_border: Color::from_rgb(55, 65, 81),
                text: Color::from_rgb(229, 231, 235),
                muted: Color::from_rgb(156, 163, 175),
                heading: rgb(content::ACCENT_CYAN),
                accent: Color::from_rgb(34, 211, 238),
                chip_bg: Color::from_rgb(24, 24, 27),
                chip_text: Color::from_rgb(209, 213, 219),
                input_bg: Color::from_rgb(16, 19, 26),
                input_text: Color::White,
                button_bg: Color::from_rgb(6, 182, 212),
                button_text: Color::White,
                success: Color::from_rgb(74, 222, 128),
                error: Color::from_rgb(248, 113, 113),
                warning: Color::from_rgb(250, 204, 21),
            },
            Theme::Light => Self {
                window_bg: Color::White,
                nav_bg: Color::from_rgb(229, 231, 235),
                card_bg: Color::from_rgb(249, 250, 251),
                card_border: Color::from_rgb(209, 213, 219),
                text: Color::Black,
                muted: Color::from_rgb(75, 85, 99),
                heading: Color::from_rgb(0, 186, 214),
                accent: Color::from_rgb(8, 145, 178),
                chip_bg: Color::from_rgb(243, 244, 246),
                chip_text: Color::from_rgb(31, 41, 55),
                input_bg: Color::White,
                input_text: Color::Black,
                button_bg: Color::from_rgb(6, 182, 212),
                button_text: Color::White,
                success: Color::from_rgb(22, 163, 74),
                error: Color::from_rgb(220, 38, 38),
                warning: Color::from_rgb(180, 130, 0),
            },
        }
    }

    /// Theme-agnostic grays shown before the stored preference has been
    /// resolved. No interactive affordance depends on these.
    pub fn neutral() -> Self {
        Self {
            window_bg: Color::from_rgb(128, 128, 128),
            nav_bg: Color::from_rgb(112, 112, 112),
            card_bg: Color::from_rgb(120, 120, 120),
            card_border: Color::from_rgb(100, 100, 100),
            text: Color::from_rgb(60, 60, 60),
            muted: Color::from_rgb(90, 90, 90),
            heading: Color::from_rgb(70, 70, 70),
            accent: Color::from_rgb(70, 70, 70),
            chip_bg: Color::from_rgb(120, 120, 120),
            chip_text: Color::from_rgb(60, 60, 60),
            input_bg: Color::from_rgb(140, 140, 140),
            input_text: Color::from_rgb(60, 60, 60),
            button_bg: Color::from_rgb(110, 110, 110),
            button_text: Color::from_rgb(60, 60, 60),
            success: Color::from_rgb(90, 90, 90),
            error: Color::from_rgb(90, 90, 90),
            warning: Color::from_rgb(90, 90, 90),
        }
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use fltk::prelude::WindowExt;
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
