use fltk::{
    app::Sender,
    button::Button,
    enums::{Font, FrameType},
    frame::Frame,
    group::{Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use super::about::AboutSection;
use super::contact::ContactSection;
use super::hero::HeroSection;
use super::nav::NavBar;
use super::projects::ProjectsSection;
use super::theme::Palette;
use super::{about, contact, hero, projects, NAV_H, WIN_H, WIN_W};
use crate::app::content;
use crate::app::messages::Message;
use crate::app::sections::{SectionId, SectionRect};

/// The whole widget tree: fixed nav bar on top, one vertical scroll of
/// stacked sections below, and the floating scroll-to-top button.
pub struct MainWidgets {
    pub wind: Window,
    pub scroll: Scroll,
    pub nav: NavBar,
    pub hero: HeroSection,
    pub about: AboutSection,
    pub projects: ProjectsSection,
    pub contact: ContactSection,
    footer: Frame,
    scroll_top: Button,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WIN_W, WIN_H, content::WINDOW_TITLE);
    wind.set_xclass("NeonFolio");

    let nav = NavBar::build(0, 0, WIN_W, sender);

    let mut scroll = Scroll::new(0, NAV_H, WIN_W, WIN_H - NAV_H, None);
    scroll.set_type(ScrollType::Vertical);
    scroll.set_frame(FrameType::FlatBox);

    let mut y = NAV_H;
    let hero = HeroSection::build(y);
    y += hero::HEIGHT;
    let about = AboutSection::build(y);
    y += about::HEIGHT;
    let projects = ProjectsSection::build(y, sender);
    y += projects::HEIGHT;
    let contact = ContactSection::build(y, sender);
    y += contact::HEIGHT;

    let mut footer = Frame::new(0, y, WIN_W, 70, None);
    footer.set_label(content::FOOTER);
    footer.set_label_size(12);

    scroll.end();

    // Floating, outside the scroll so it stays put
    let mut scroll_top = Button::new(WIN_W - 64, WIN_H - 64, 44, 44, "@8->");
    scroll_top.set_label_size(16);
    scroll_top.set_frame(FrameType::RFlatBox);
    scroll_top.set_tooltip("Back to top");
    scroll_top.set_callback({
        let s = *sender;
        move |_| s.send(Message::ScrollToTop)
    });
    scroll_top.hide();

    wind.end();
    wind.make_resizable(false);

    MainWidgets {
        wind,
        scroll,
        nav,
        hero,
        about,
        projects,
        contact,
        footer,
        scroll_top,
    }
}

impl MainWidgets {
    fn section_group(&self, id: SectionId) -> &fltk::group::Group {
        match id {
            SectionId::Home => &self.hero.group,
            SectionId::About => &self.about.group,
            SectionId::Projects => &self.projects.group,
            SectionId::Contact => &self.contact.group,
        }
    }

    /// Current scroll offset in pixels.
    pub fn scroll_offset(&self) -> i32 {
        self.scroll.yposition()
    }

    /// Live section rectangles in viewport coordinates. Children move as the
    /// scroll scrolls, so widget y minus the scroll origin is the viewport
    /// top edge.
    pub fn section_rects(&self) -> Vec<(SectionId, SectionRect)> {
        crate::app::sections::SECTIONS
            .iter()
            .map(|id| {
                let g = self.section_group(*id);
                let top = g.y() - self.scroll.y();
                (
                    *id,
                    SectionRect {
                        top,
                        bottom: top + g.h(),
                    },
                )
            })
            .collect()
    }

    pub fn scroll_to_section(&mut self, id: SectionId) {
        let g = self.section_group(id);
        let offset = self.scroll.yposition() + (g.y() - self.scroll.y());
        let x = self.scroll.xposition();
        self.scroll.scroll_to(x, offset.max(0));
        self.scroll.redraw();
    }

    pub fn scroll_to_top(&mut self) {
        let x = self.scroll.xposition();
        self.scroll.scroll_to(x, 0);
        self.scroll.redraw();
    }

    pub fn set_scroll_top_visible(&mut self, visible: bool) {
        if visible {
            self.scroll_top.show();
        } else {
            self.scroll_top.hide();
        }
    }

    /// Repaint the whole tree from a palette. Called on theme init, theme
    /// toggle, and active-section changes.
    pub fn apply_palette(&mut self, p: &Palette, active: SectionId) {
        self.wind.set_color(p.window_bg);
        self.scroll.set_color(p.window_bg);
        self.nav.apply(p, active);
        self.hero.apply(p);
        self.about.apply(p);
        self.projects.apply(p);
        self.contact.apply(p);
        self.footer.set_label_color(p.muted);
        self.footer.set_label_font(Font::Helvetica);
        self.scroll_top.set_color(p.button_bg);
        self.scroll_top.set_label_color(p.button_text);
        self.wind.redraw();
    }
}
