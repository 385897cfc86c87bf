pub mod accordion;
pub mod carousel;
pub mod contact_form;
pub mod fields;
pub mod meeting_form;
pub mod pricing;
pub mod template;
