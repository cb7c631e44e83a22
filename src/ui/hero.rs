use fltk::{
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use super::theme::{rgb, Palette};
use super::{MARGIN, WIN_W};
use crate::app::content;

pub const HEIGHT: i32 = 540;

/// Greeting, typed tagline, portrait placeholder, name and role.
pub struct HeroSection {
    pub group: Group,
    greeting: Frame,
    tagline: Frame,
    portrait: Frame,
    name: Frame,
    role: Frame,
}

impl HeroSection {
    pub fn build(y: i32) -> Self {
        let group = Group::new(0, y, WIN_W, HEIGHT, None);

        let mut greeting = Frame::new(0, y + 50, WIN_W, 32, None);
        greeting.set_label(content::GREETING);
        greeting.set_label_size(20);
        greeting.set_label_font(Font::HelveticaBold);

        let mut tagline = Frame::new(MARGIN + 60, y + 95, WIN_W - 2 * (MARGIN + 60), 56, None);
        tagline.set_label("");
        tagline.set_label_size(13);
        tagline.set_align(Align::Inside | Align::Wrap);

        let mut portrait = Frame::new(WIN_W / 2 - 330, y + 210, 190, 190, None);
        portrait.set_frame(FrameType::RFlatBox);
        portrait.set_label(content::PORTRAIT_INITIALS);
        portrait.set_label_size(52);
        portrait.set_label_font(Font::HelveticaBold);

        let mut name = Frame::new(WIN_W / 2 - 100, y + 230, 430, 64, None);
        name.set_label(content::FULL_NAME);
        name.set_label_size(40);
        name.set_label_font(Font::HelveticaBold);
        name.set_align(Align::Inside | Align::Left);

        let mut role = Frame::new(WIN_W / 2 - 100, y + 300, 430, 36, None);
        role.set_label(content::ROLE);
        role.set_label_size(19);
        role.set_label_font(Font::HelveticaBold);
        role.set_align(Align::Inside | Align::Left);

        group.end();

        Self {
            group,
            greeting,
            tagline,
            portrait,
            name,
            role,
        }
    }

    /// Called on every typewriter update.
    pub fn set_tagline(&mut self, text: &str) {
        self.tagline.set_label(text);
        self.tagline.redraw();
    }

    pub fn apply(&mut self, p: &Palette) {
        self.greeting.set_label_color(p.text);
        self.tagline.set_label_color(p.muted);
        self.portrait.set_color(p.card_bg);
        self.portrait.set_label_color(p.heading);
        self.name.set_label_color(p.heading);
        self.role.set_label_color(rgb(content::ACCENT_PINK));
    }
}
