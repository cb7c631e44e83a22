use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use super::theme::{rgb, Palette};
use super::{MARGIN, WIN_W};
use crate::app::content::{self, Project};
use crate::app::messages::Message;

pub const HEIGHT: i32 = 840;

const CARD_W: i32 = 430;
const CARD_H: i32 = 350;
const CARD_PITCH: i32 = 370;
const CHIP_W: i32 = 96;
const CHIPS_PER_ROW: usize = 4;

struct ProjectCardWidgets {
    bg: Frame,
    title: Frame,
    kind: Frame,
    description: Frame,
    chips: Vec<Frame>,
    repo_btn: Button,
    accent: (u8, u8, u8),
}

/// Two-by-two grid of project cards.
pub struct ProjectsSection {
    pub group: Group,
    heading: Frame,
    cards: Vec<ProjectCardWidgets>,
}

impl ProjectsSection {
    pub fn build(y: i32, sender: &Sender<Message>) -> Self {
        let group = Group::new(0, y, WIN_W, HEIGHT, None);

        let mut heading = Frame::new(0, y + 20, WIN_W, 50, None);
        heading.set_label("My Project");
        heading.set_label_size(34);
        heading.set_label_font(Font::HelveticaBold);

        let py = y + 90;
        let cards = content::PROJECTS
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let col = (i % 2) as i32;
                let row = (i / 2) as i32;
                let cx = MARGIN + col * (CARD_W + 40);
                let cy = py + row * CARD_PITCH;
                build_project_card(cx, cy, project, sender)
            })
            .collect();

        group.end();

        Self {
            group,
            heading,
            cards,
        }
    }

    pub fn apply(&mut self, p: &Palette) {
        self.heading.set_label_color(p.heading);
        for card in &mut self.cards {
            card.bg.set_color(p.card_bg);
            card.title.set_label_color(rgb(card.accent));
            card.kind.set_label_color(rgb(content::ACCENT_PINK));
            card.description.set_label_color(p.text);
            for chip in &mut card.chips {
                chip.set_color(p.chip_bg);
                chip.set_label_color(p.chip_text);
            }
            card.repo_btn.set_color(p.card_bg);
            card.repo_btn.set_label_color(rgb(card.accent));
        }
    }
}

fn build_project_card(
    x: i32,
    y: i32,
    project: &Project,
    sender: &Sender<Message>,
) -> ProjectCardWidgets {
    let mut bg = Frame::new(x, y, CARD_W, CARD_H, None);
    bg.set_frame(FrameType::BorderBox);

    let mut title = Frame::new(x + 16, y + 14, CARD_W - 32, 28, None);
    title.set_label(project.title);
    title.set_label_size(15);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Inside | Align::Left);

    let mut kind = Frame::new(x + 16, y + 44, CARD_W - 32, 20, None);
    kind.set_label(project.kind);
    kind.set_label_size(12);
    kind.set_label_font(Font::HelveticaBold);
    kind.set_align(Align::Inside | Align::Left);

    let mut description = Frame::new(x + 16, y + 68, CARD_W - 32, 140, None);
    description.set_label(project.description);
    description.set_label_size(11);
    description.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

    let chips = project
        .tech
        .iter()
        .enumerate()
        .map(|(j, item)| {
            let col = (j % CHIPS_PER_ROW) as i32;
            let row = (j / CHIPS_PER_ROW) as i32;
            let mut chip = Frame::new(
                x + 16 + col * (CHIP_W + 6),
                y + 216 + row * 28,
                CHIP_W,
                22,
                None,
            );
            chip.set_frame(FrameType::BorderBox);
            chip.set_label(item);
            chip.set_label_size(10);
            chip
        })
        .collect();

    let mut repo_btn = Button::new(x + 16, y + 296, 150, 36, None);
    repo_btn.set_label("View on GitHub");
    repo_btn.set_label_size(12);
    repo_btn.set_label_font(Font::HelveticaBold);
    repo_btn.set_frame(FrameType::BorderBox);
    repo_btn.set_callback({
        let s = *sender;
        let url = project.repo_url;
        move |_| s.send(Message::OpenUrl(url))
    });

    ProjectCardWidgets {
        bg,
        title,
        kind,
        description,
        chips,
        repo_btn,
        accent: project.accent,
    }
}
