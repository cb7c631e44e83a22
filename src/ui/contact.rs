use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    input::{Input, MultilineInput},
    prelude::*,
};

use super::theme::Palette;
use super::{MARGIN, WIN_W};
use crate::app::contact::ContactFields;
use crate::app::content;
use crate::app::messages::Message;

pub const HEIGHT: i32 = 600;

const RIGHT_X: i32 = 460;
const RIGHT_W: i32 = WIN_W - RIGHT_X - MARGIN;

/// Contact details, social links and the message form.
pub struct ContactSection {
    pub group: Group,
    heading: Frame,
    work_heading: Frame,
    email_btn: Button,
    follow_heading: Frame,
    social_btns: Vec<Button>,
    message_heading: Frame,
    blurb: Frame,
    name_input: Input,
    email_input: Input,
    message_input: MultilineInput,
    submit_btn: Button,
    status: Frame,
}

impl ContactSection {
    pub fn build(y: i32, sender: &Sender<Message>) -> Self {
        let group = Group::new(0, y, WIN_W, HEIGHT, None);

        let mut heading = Frame::new(0, y + 20, WIN_W, 50, None);
        heading.set_label("Contact Me");
        heading.set_label_size(34);
        heading.set_label_font(Font::HelveticaBold);

        let mut work_heading = Frame::new(MARGIN, y + 100, 380, 28, None);
        work_heading.set_label("For Work");
        work_heading.set_label_size(18);
        work_heading.set_label_font(Font::HelveticaBold);
        work_heading.set_align(Align::Inside | Align::Left);

        let mut email_btn = Button::new(MARGIN, y + 136, 320, 38, None);
        email_btn.set_label(&format!("✉  {}", content::CONTACT_EMAIL));
        email_btn.set_label_size(13);
        email_btn.set_frame(FrameType::BorderBox);
        email_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::OpenUrl(content::CONTACT_MAILTO))
        });

        let mut follow_heading = Frame::new(MARGIN, y + 196, 380, 28, None);
        follow_heading.set_label("Follow Me");
        follow_heading.set_label_size(18);
        follow_heading.set_label_font(Font::HelveticaBold);
        follow_heading.set_align(Align::Inside | Align::Left);

        let social_btns = content::SOCIAL_LINKS
            .iter()
            .enumerate()
            .map(|(j, link)| {
                let mut btn = Button::new(MARGIN, y + 232 + j as i32 * 44, 200, 36, None);
                btn.set_label(link.label);
                btn.set_label_size(13);
                btn.set_frame(FrameType::BorderBox);
                btn.set_callback({
                    let s = *sender;
                    let url = link.url;
                    move |_| s.send(Message::OpenUrl(url))
                });
                btn
            })
            .collect();

        let mut message_heading = Frame::new(RIGHT_X, y + 100, RIGHT_W, 28, None);
        message_heading.set_label("Send a Message");
        message_heading.set_label_size(18);
        message_heading.set_label_font(Font::HelveticaBold);
        message_heading.set_align(Align::Inside | Align::Left);

        let mut blurb = Frame::new(RIGHT_X, y + 132, RIGHT_W, 60, None);
        blurb.set_label(content::CONTACT_BLURB);
        blurb.set_label_size(12);
        blurb.set_align(Align::Inside | Align::Left | Align::Top | Align::Wrap);

        let mut name_input = Input::new(RIGHT_X, y + 210, RIGHT_W, 32, None);
        name_input.set_label("Your Name");
        name_input.set_align(Align::TopLeft);
        name_input.set_label_size(12);
        name_input.set_text_size(13);

        let mut email_input = Input::new(RIGHT_X, y + 272, RIGHT_W, 32, None);
        email_input.set_label("Your Email");
        email_input.set_align(Align::TopLeft);
        email_input.set_label_size(12);
        email_input.set_text_size(13);

        let mut message_input = MultilineInput::new(RIGHT_X, y + 334, RIGHT_W, 130, None);
        message_input.set_label("Your Message");
        message_input.set_align(Align::TopLeft);
        message_input.set_label_size(12);
        message_input.set_text_size(13);

        let mut submit_btn = Button::new(RIGHT_X, y + 480, 160, 40, None);
        submit_btn.set_label("Send Message");
        submit_btn.set_label_size(13);
        submit_btn.set_label_font(Font::HelveticaBold);
        submit_btn.set_callback({
            let s = *sender;
            move |_| s.send(Message::SubmitContact)
        });

        let mut status = Frame::new(RIGHT_X, y + 530, RIGHT_W, 28, None);
        status.set_label("");
        status.set_label_size(13);
        status.set_align(Align::Inside | Align::Left);

        group.end();

        Self {
            group,
            heading,
            work_heading,
            email_btn,
            follow_heading,
            social_btns,
            message_heading,
            blurb,
            name_input,
            email_input,
            message_input,
            submit_btn,
            status,
        }
    }

    /// Snapshot of what the user typed.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name_input.value(),
            email: self.email_input.value(),
            message: self.message_input.value(),
        }
    }

    pub fn clear_fields(&mut self) {
        self.name_input.set_value("");
        self.email_input.set_value("");
        self.message_input.set_value("");
    }

    /// Disable the submit affordance while a dispatch is in flight.
    pub fn set_sending(&mut self, sending: bool) {
        if sending {
            self.submit_btn.deactivate();
        } else {
            self.submit_btn.activate();
        }
    }

    pub fn set_status_line(&mut self, text: &str, color: Color) {
        self.status.set_label(text);
        self.status.set_label_color(color);
        self.status.redraw();
    }

    pub fn apply(&mut self, p: &Palette) {
        self.heading.set_label_color(p.heading);
        self.work_heading.set_label_color(p.heading);
        self.email_btn.set_color(p.card_bg);
        self.email_btn.set_label_color(p.accent);
        self.follow_heading.set_label_color(p.heading);
        for btn in &mut self.social_btns {
            btn.set_color(p.card_bg);
            btn.set_label_color(p.text);
        }
        self.message_heading.set_label_color(p.heading);
        self.blurb.set_label_color(p.muted);
        for input in [&mut self.name_input, &mut self.email_input] {
            input.set_color(p.input_bg);
            input.set_text_color(p.input_text);
            input.set_cursor_color(p.input_text);
            input.set_label_color(p.muted);
        }
        self.message_input.set_color(p.input_bg);
        self.message_input.set_text_color(p.input_text);
        self.message_input.set_cursor_color(p.input_text);
        self.message_input.set_label_color(p.muted);
        self.submit_btn.set_color(p.button_bg);
        self.submit_btn.set_label_color(p.button_text);
    }
}
