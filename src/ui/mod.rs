//! Widget construction and repainting. Each section module builds its own
//! group of widgets and knows how to restyle them from a [`theme::Palette`].

pub mod about;
pub mod contact;
pub mod hero;
pub mod main_window;
pub mod nav;
pub mod projects;
pub mod theme;

pub const WIN_W: i32 = 980;
pub const WIN_H: i32 = 720;
pub const NAV_H: i32 = 56;
pub const MARGIN: i32 = 40;
