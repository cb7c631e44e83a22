//! Main application coordinator: owns the widget tree and the state
//! machines, and turns dispatched messages into state transitions plus
//! repaints. Timer adapters live here too; each one re-arms only while its
//! owning machine is still live.

use std::thread;

use fltk::{app, dialog};

use super::contact::{self, ContactForm, SubmissionStatus};
use super::content;
use super::emailjs;
use super::messages::Message;
use super::platform::detect_system_dark_mode;
use super::sections::{self, SectionId, SectionTracker};
use super::settings::AppSettings;
use super::theme::ThemeState;
use super::typewriter::Typewriter;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::Palette;

/// How often the watch timer samples the scroll offset.
const SCROLL_WATCH_SECS: f64 = 0.05;

pub struct AppState {
    pub widgets: MainWidgets,
    pub sender: app::Sender<Message>,
    pub settings: AppSettings,
    pub theme: ThemeState,
    pub tracker: SectionTracker,
    pub typewriter: Typewriter,
    pub form: ContactForm,
    last_offset: i32,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: app::Sender<Message>, settings: AppSettings) -> Self {
        let mut state = Self {
            widgets,
            sender,
            settings,
            theme: ThemeState::new(),
            tracker: SectionTracker::new(),
            typewriter: Typewriter::new(content::TAGLINE),
            form: ContactForm::new(),
            last_offset: 0,
        };
        // First paint is the neutral placeholder; InitTheme swaps it for the
        // resolved preference.
        state.repaint();
        state
    }

    fn palette(&self) -> Palette {
        match self.theme.theme() {
            Some(theme) => Palette::for_theme(theme),
            None => Palette::neutral(),
        }
    }

    fn repaint(&mut self) {
        let p = self.palette();
        self.widgets.apply_palette(&p, self.tracker.active());
    }

    fn repaint_nav(&mut self) {
        let p = self.palette();
        self.widgets.nav.apply(&p, self.tracker.active());
    }

    // --- theme ---

    pub fn init_theme(&mut self) {
        let theme = self
            .theme
            .initialize(self.settings.theme_mode, detect_system_dark_mode());
        self.widgets.nav.set_theme_ready(theme);
        self.repaint();
        #[cfg(target_os = "windows")]
        crate::ui::theme::set_windows_titlebar_theme(&self.widgets.wind, theme.is_dark());
    }

    pub fn toggle_theme(&mut self) {
        // Inert until InitTheme has run
        let Some(theme) = self.theme.toggle() else {
            return;
        };
        self.settings.remember_theme(theme);
        if let Err(e) = self.settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
        self.widgets.nav.set_theme_ready(theme);
        self.repaint();
        #[cfg(target_os = "windows")]
        crate::ui::theme::set_windows_titlebar_theme(&self.widgets.wind, theme.is_dark());
    }

    // --- navigation & scroll tracking ---

    pub fn navigate_to(&mut self, id: SectionId) {
        self.tracker.set_active(id);
        self.widgets.scroll_to_section(id);
        self.repaint_nav();
    }

    pub fn scroll_to_top(&mut self) {
        self.widgets.scroll_to_top();
    }

    /// Kick off the repeating scroll sampler.
    pub fn arm_scroll_watch(&self) {
        let s = self.sender;
        app::add_timeout3(SCROLL_WATCH_SECS, move |_| s.send(Message::ScrollWatch));
    }

    pub fn scroll_watch(&mut self) {
        let offset = self.widgets.scroll_offset();
        if offset != self.last_offset {
            self.last_offset = offset;
            let rects = self.widgets.section_rects();
            if self.tracker.update(&rects) {
                self.repaint_nav();
            }
            self.widgets
                .set_scroll_top_visible(sections::show_scroll_top(offset));
        }
        self.arm_scroll_watch();
    }

    // --- typewriter ---

    fn arm_type_tick(&self) {
        let s = self.sender;
        app::add_timeout3(content::TYPE_DELAY_SECS, move |_| {
            s.send(Message::TypewriterTick)
        });
    }

    fn arm_caret_blink(&self) {
        let s = self.sender;
        app::add_timeout3(content::CARET_BLINK_SECS, move |_| {
            s.send(Message::CaretBlink)
        });
    }

    /// The start delay elapsed; begin revealing.
    pub fn typewriter_start(&mut self) {
        self.typewriter.start();
        self.sync_tagline();
        self.arm_type_tick();
        self.arm_caret_blink();
    }

    pub fn typewriter_tick(&mut self) {
        if self.typewriter.tick() {
            self.arm_type_tick();
        }
        self.sync_tagline();
    }

    pub fn caret_blink(&mut self) {
        if self.typewriter.blink() {
            self.arm_caret_blink();
        }
        self.sync_tagline();
    }

    fn sync_tagline(&mut self) {
        let display = self.typewriter.display();
        self.widgets.hero.set_tagline(&display);
    }

    // --- contact form ---

    pub fn submit_contact(&mut self) {
        let fields = self.widgets.contact.fields();
        match self.form.begin_submit(fields, contact::sent_date_now()) {
            Ok(payload) => {
                self.widgets.contact.set_sending(true);
                self.show_submission_status();
                let sender = self.sender;
                thread::spawn(move || {
                    let outcome = emailjs::dispatch(&payload).map_err(|e| e.to_string());
                    sender.send(Message::DispatchFinished(outcome));
                });
            }
            Err(err) => {
                let p = self.palette();
                self.widgets
                    .contact
                    .set_status_line(&err.to_string(), p.warning);
            }
        }
    }

    pub fn dispatch_finished(&mut self, outcome: Result<(), String>) {
        if let Err(ref e) = outcome {
            eprintln!("Email dispatch failed: {}", e);
        }
        self.form.finish_submit(outcome.is_ok());
        self.widgets.contact.set_sending(false);
        if self.form.status() == SubmissionStatus::Success {
            self.widgets.contact.clear_fields();
            let s = self.sender;
            app::add_timeout3(contact::SUCCESS_CLEAR_SECS, move |_| {
                s.send(Message::ClearSubmissionStatus)
            });
        }
        self.show_submission_status();
    }

    pub fn clear_submission_status(&mut self) {
        self.form.clear_status();
        self.show_submission_status();
    }

    fn show_submission_status(&mut self) {
        let p = self.palette();
        let (text, color) = match self.form.status() {
            SubmissionStatus::Idle => ("", p.muted),
            SubmissionStatus::Sending => ("Sending…", p.muted),
            SubmissionStatus::Success => ("Message sent successfully!", p.success),
            SubmissionStatus::Error => ("Something went wrong. Please try again.", p.error),
        };
        self.widgets.contact.set_status_line(text, color);
    }

    // --- external links ---

    pub fn open_url(&self, url: &str) {
        if let Err(e) = open::that(url) {
            eprintln!("Failed to open {}: {}", url, e);
        }
    }

    /// The CV ships next to the executable.
    pub fn open_cv(&self) {
        let path = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(content::CV_FILE)));
        match path {
            Some(path) if path.exists() => {
                if let Err(e) = open::that(&path) {
                    eprintln!("Failed to open CV: {}", e);
                }
            }
            _ => dialog::alert_default(&format!("{} was not found next to the app.", content::CV_FILE)),
        }
    }

    /// Teardown: pending timer callbacks become no-ops.
    pub fn shutdown(&mut self) {
        self.typewriter.cancel();
    }
}
