use log::Level;

pub const SITE_NAME: &str = "Decruze Digital";
pub const CONTACT_EMAIL: &str = "info@decruze.com";
pub const CONTACT_PHONE_DISPLAY: &str = "+91 98765 43210";
pub const CONTACT_PHONE_HREF: &str = "tel:+919876543210";
pub const OFFICE_ADDRESS: [&str; 2] = ["123 Tech Park, Innovation Street", "Bangalore, Karnataka 560001"];

/// Fake network latency of the simulated submission.
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const MAX_UPLOAD_FILES: usize = 5;
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.ppt,.pptx,.xls,.xlsx,.jpg,.jpeg,.png";
pub const TOAST_TIMEOUT_MS: u32 = 5_000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
