use fltk::{
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
};

use super::theme::{rgb, Palette};
use super::{MARGIN, WIN_W};
use crate::app::content::{self, JourneyEntry, TechCard};

pub const HEIGHT: i32 = 2060;

const COL_W: i32 = 430;
const ENTRY_PITCH: i32 = 160;
const ENTRY_CARD_W: i32 = 400;
const ENTRY_CARD_H: i32 = 140;

struct TechCardWidgets {
    bg: Frame,
    title: Frame,
    chips: Vec<Frame>,
    accent: (u8, u8, u8),
}

struct TimelineEntryWidgets {
    card: Frame,
    period: Frame,
    title: Frame,
    detail: Frame,
    dot: Frame,
}

/// Intro paragraphs, current focus, tech-stack cards and the journey
/// timeline (cards alternating around a center line).
pub struct AboutSection {
    pub group: Group,
    heading: Frame,
    intro: Vec<Frame>,
    focus_heading: Frame,
    focus_items: Vec<Frame>,
    cards: Vec<TechCardWidgets>,
    journey_heading: Frame,
    timeline_line: Frame,
    entries: Vec<TimelineEntryWidgets>,
}

impl AboutSection {
    pub fn build(y: i32) -> Self {
        let group = Group::new(0, y, WIN_W, HEIGHT, None);

        let mut heading = Frame::new(0, y + 20, WIN_W, 50, None);
        heading.set_label("About Me");
        heading.set_label_size(34);
        heading.set_label_font(Font::HelveticaBold);

        let cy = y + 90;

        let mut intro = Vec::new();
        for (i, paragraph) in content::ABOUT_INTRO.iter().enumerate() {
            let mut f = Frame::new(MARGIN, cy + i as i32 * 130, COL_W, 120, None);
            f.set_label(paragraph);
            f.set_label_size(12);
            f.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);
            intro.push(f);
        }

        let mut focus_heading = Frame::new(MARGIN, cy + 260, COL_W, 30, None);
        focus_heading.set_label("Current Focus");
        focus_heading.set_label_size(18);
        focus_heading.set_label_font(Font::HelveticaBold);
        focus_heading.set_align(Align::Inside | Align::Left);

        let mut focus_items = Vec::new();
        for (j, item) in content::CURRENT_FOCUS.iter().enumerate() {
            let mut f = Frame::new(MARGIN + 10, cy + 296 + j as i32 * 30, COL_W - 10, 26, None);
            f.set_label(&format!("•  {}", item));
            f.set_label_size(12);
            f.set_align(Align::Inside | Align::Left);
            focus_items.push(f);
        }

        let rx = WIN_W - MARGIN - COL_W;
        let cards = content::TECH_CARDS
            .iter()
            .enumerate()
            .map(|(i, card)| build_tech_card(rx, cy + i as i32 * 136, card))
            .collect();

        let mut journey_heading = Frame::new(0, y + 520, WIN_W, 40, None);
        journey_heading.set_label(content::JOURNEY_HEADING);
        journey_heading.set_label_size(22);
        journey_heading.set_label_font(Font::HelveticaBold);

        let ty = y + 580;
        let mut timeline_line = Frame::new(
            WIN_W / 2 - 2,
            ty,
            4,
            content::JOURNEY.len() as i32 * ENTRY_PITCH,
            None,
        );
        timeline_line.set_frame(FrameType::FlatBox);

        let entries = content::JOURNEY
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let top = ty + i as i32 * ENTRY_PITCH;
                // Alternate sides, matching the original timeline
                let cx = if i % 2 == 0 {
                    MARGIN
                } else {
                    WIN_W / 2 + 50
                };
                build_timeline_entry(cx, top, entry)
            })
            .collect();

        group.end();

        Self {
            group,
            heading,
            intro,
            focus_heading,
            focus_items,
            cards,
            journey_heading,
            timeline_line,
            entries,
        }
    }

    pub fn apply(&mut self, p: &Palette) {
        self.heading.set_label_color(p.heading);
        for f in &mut self.intro {
            f.set_label_color(p.text);
        }
        self.focus_heading.set_label_color(p.heading);
        for f in &mut self.focus_items {
            f.set_label_color(p.text);
        }
        for card in &mut self.cards {
            card.bg.set_color(p.card_bg);
            card.title.set_label_color(rgb(card.accent));
            for chip in &mut card.chips {
                chip.set_color(p.chip_bg);
                chip.set_label_color(p.chip_text);
            }
        }
        self.journey_heading.set_label_color(p.heading);
        self.timeline_line.set_color(p.accent);
        for entry in &mut self.entries {
            entry.card.set_color(p.card_bg);
            entry.period.set_label_color(p.accent);
            entry.title.set_label_color(p.text);
            entry.detail.set_label_color(p.muted);
            entry.dot.set_color(p.accent);
        }
    }
}

fn build_tech_card(x: i32, y: i32, card: &TechCard) -> TechCardWidgets {
    let mut bg = Frame::new(x, y, COL_W, 120, None);
    bg.set_frame(FrameType::BorderBox);

    let mut title = Frame::new(x + 14, y + 10, 200, 24, None);
    title.set_label(card.title);
    title.set_label_size(15);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Inside | Align::Left);

    let chips = card
        .items
        .iter()
        .enumerate()
        .map(|(j, item)| {
            let mut chip = Frame::new(x + 14 + j as i32 * 110, y + 48, 102, 26, None);
            chip.set_frame(FrameType::BorderBox);
            chip.set_label(item);
            chip.set_label_size(11);
            chip
        })
        .collect();

    TechCardWidgets {
        bg,
        title,
        chips,
        accent: card.accent,
    }
}

fn build_timeline_entry(x: i32, top: i32, entry: &JourneyEntry) -> TimelineEntryWidgets {
    let mut card = Frame::new(x, top, ENTRY_CARD_W, ENTRY_CARD_H, None);
    card.set_frame(FrameType::BorderBox);

    let mut period = Frame::new(x + 14, top + 10, 220, 22, None);
    period.set_label(entry.period);
    period.set_label_size(12);
    period.set_label_font(Font::HelveticaBold);
    period.set_align(Align::Inside | Align::Left);

    let mut title = Frame::new(x + 14, top + 36, ENTRY_CARD_W - 28, 24, None);
    title.set_label(entry.title);
    title.set_label_size(14);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Inside | Align::Left);

    let mut detail = Frame::new(x + 14, top + 62, ENTRY_CARD_W - 28, 70, None);
    detail.set_label(entry.detail);
    detail.set_label_size(11);
    detail.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

    let mut dot = Frame::new(WIN_W / 2 - 7, top + 14, 14, 14, None);
    dot.set_frame(FrameType::RFlatBox);

    TimelineEntryWidgets {
        card,
        period,
        title,
        detail,
        dot,
    }
}
