pub mod analytics;
pub mod browser;
pub mod draft;
pub mod i18n;
pub mod nav;
pub mod rotator;
pub mod server;
pub mod steps;
pub mod submission;
