pub mod contact;
pub mod demo;
pub mod home;
pub mod legal;
pub mod pricing;
