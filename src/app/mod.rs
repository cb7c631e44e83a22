//! Application layer - everything that is not widget construction.
//!
//! # Structure
//!
//! - `content.rs` - static portfolio content tables
//! - `sections.rs` - section registry and the active-section tracker
//! - `typewriter.rs` - character-reveal state machine for the hero tagline
//! - `contact.rs` - contact form state machine
//! - `emailjs.rs` - EmailJS dispatch client
//! - `settings.rs` / `theme.rs` / `platform.rs` - persisted theme preference
//! - `state.rs` - main application coordinator

pub mod contact;
pub mod content;
pub mod emailjs;
pub mod error;
pub mod messages;
pub mod platform;
pub mod sections;
pub mod settings;
pub mod state;
pub mod theme;
pub mod typewriter;

// Re-exports for convenient external access
pub use contact::{ContactFields, ContactForm, SubmissionStatus};
pub use error::{AppError, Result};
pub use messages::Message;
pub use sections::{SectionId, SectionRect, SectionTracker, SECTIONS};
pub use settings::{AppSettings, ThemeMode};
pub use theme::{Theme, ThemeState};
pub use typewriter::Typewriter;
