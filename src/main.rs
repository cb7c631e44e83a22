use fltk::{app, prelude::*};

use neon_folio::app::content;
use neon_folio::app::messages::Message;
use neon_folio::app::settings::AppSettings;
use neon_folio::app::state::AppState;
use neon_folio::ui::main_window::build_main_window;

fn main() {
    let a = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&sender);
    let mut state = AppState::new(widgets, sender, settings);

    state.widgets.wind.show();

    // Resolve the stored theme as the first dispatched message; until then
    // the tree wears the neutral placeholder palette.
    sender.send(Message::InitTheme);

    // Timer adapters: the typed tagline after its start delay, and the
    // repeating scroll sampler.
    {
        let s = sender;
        app::add_timeout3(content::TYPE_START_DELAY_SECS, move |_| {
            s.send(Message::TypewriterStart)
        });
    }
    state.arm_scroll_watch();

    while a.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::NavigateTo(id) => state.navigate_to(id),
                Message::ScrollWatch => state.scroll_watch(),
                Message::ScrollToTop => state.scroll_to_top(),
                Message::InitTheme => state.init_theme(),
                Message::ToggleTheme => state.toggle_theme(),
                Message::TypewriterStart => state.typewriter_start(),
                Message::TypewriterTick => state.typewriter_tick(),
                Message::CaretBlink => state.caret_blink(),
                Message::SubmitContact => state.submit_contact(),
                Message::DispatchFinished(outcome) => state.dispatch_finished(outcome),
                Message::ClearSubmissionStatus => state.clear_submission_status(),
                Message::OpenUrl(url) => state.open_url(url),
                Message::OpenCv => state.open_cv(),
            }
        }
    }

    state.shutdown();
}
