use super::sections::SectionId;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and timer adapters send one of these; the dispatch loop
/// in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    NavigateTo(SectionId),
    ScrollWatch,
    ScrollToTop,

    // Theme
    InitTheme,
    ToggleTheme,

    // Hero typewriter
    TypewriterStart,
    TypewriterTick,
    CaretBlink,

    // Contact form
    SubmitContact,
    DispatchFinished(std::result::Result<(), String>),
    ClearSubmissionStatus,

    // External links
    OpenUrl(&'static str),
    OpenCv,
}
