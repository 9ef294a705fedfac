pub mod commands;
mod confirmation;
mod draft;
mod input;
mod render;
mod shell;

pub use confirmation::{AssumeYes, StdinConfirmation};
pub use draft::{parse_date, FormDraft, FormFieldError};
pub use render::{render_dashboard, render_notifications};
pub use shell::run_shell;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
