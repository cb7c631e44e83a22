use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use super::theme::Palette;
use super::NAV_H;
use crate::app::content;
use crate::app::messages::Message;
use crate::app::sections::{SectionId, SECTIONS};
use crate::app::theme::Theme;

const LINK_W: i32 = 78;
const CV_W: i32 = 110;
const TOGGLE_W: i32 = 44;

/// Fixed bar above the scroll area: brand, section links, CV download and
/// the theme switch.
pub struct NavBar {
    pub bar: Group,
    brand: Frame,
    links: Vec<(SectionId, Button)>,
    cv_btn: Button,
    theme_btn: Button,
}

impl NavBar {
    pub fn build(x: i32, y: i32, w: i32, sender: &Sender<Message>) -> Self {
        let mut bar = Group::new(x, y, w, NAV_H, None);
        bar.set_frame(FrameType::FlatBox);

        let mut brand = Frame::new(x + 12, y + 8, 320, 40, None);
        brand.set_label(content::BRAND);
        brand.set_label_size(16);
        brand.set_label_font(Font::HelveticaBold);
        brand.set_align(Align::Inside | Align::Left);

        let right_block = SECTIONS.len() as i32 * LINK_W + 8 + CV_W + 8 + TOGGLE_W + 12;
        let mut lx = x + w - right_block;

        let mut links = Vec::new();
        for id in SECTIONS {
            let mut link = Button::new(lx, y + 10, LINK_W, 36, None);
            link.set_label(id.label());
            link.set_label_size(14);
            link.set_frame(FrameType::FlatBox);
            link.set_callback({
                let s = *sender;
                move |_| s.send(Message::NavigateTo(id))
            });
            links.push((id, link));
            lx += LINK_W;
        }

        let mut cv_btn = Button::new(lx + 8, y + 10, CV_W, 36, None);
        cv_btn.set_label("Download CV");
        cv_btn.set_label_size(12);
        cv_btn.set_frame(FrameType::BorderBox);
        cv_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::OpenCv)
        });

        let mut theme_btn = Button::new(lx + 8 + CV_W + 8, y + 10, TOGGLE_W, 36, None);
        // Inert placeholder until the stored preference is resolved
        theme_btn.set_label("…");
        theme_btn.set_label_size(16);
        theme_btn.set_frame(FrameType::BorderBox);
        theme_btn.set_tooltip("Toggle light/dark theme");
        theme_btn.deactivate();
        theme_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleTheme)
        });

        bar.end();

        Self {
            bar,
            brand,
            links,
            cv_btn,
            theme_btn,
        }
    }

    /// The preference is resolved: the toggle becomes interactive and its
    /// glyph shows the mode a click switches to.
    pub fn set_theme_ready(&mut self, theme: Theme) {
        self.theme_btn.set_label(match theme {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        });
        self.theme_btn.activate();
    }

    pub fn apply(&mut self, p: &Palette, active: SectionId) {
        self.bar.set_color(p.nav_bg);
        self.brand.set_label_color(p.heading);
        for (id, link) in &mut self.links {
            link.set_color(p.nav_bg);
            if *id == active {
                link.set_label_color(p.accent);
                link.set_label_font(Font::HelveticaBold);
            } else {
                link.set_label_color(p.text);
                link.set_label_font(Font::Helvetica);
            }
        }
        self.cv_btn.set_color(p.nav_bg);
        self.cv_btn.set_label_color(p.accent);
        self.theme_btn.set_color(p.nav_bg);
        self.theme_btn.set_label_color(p.text);
        self.bar.redraw();
    }
}
