mod editor;
mod observer;

pub use editor::CronEditor;
pub use observer::CronObserver;
