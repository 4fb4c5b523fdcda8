mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::{SmartParkApp, run};
pub use message::Message;
pub use state::{AppState, Config, Notice, NoticeKind, Preferences};
