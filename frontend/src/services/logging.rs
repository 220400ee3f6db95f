use gloo::console;

/// Console logger with a component tag so the browser log reads like a
/// structured target field.
pub struct Logger;

impl Logger {
    pub fn debug(component: &str, message: &str) {
        console::debug!(Self::line(component, message));
    }

    pub fn info(component: &str, message: &str) {
        console::info!(Self::line(component, message));
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(Self::line(component, message));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
