//! Form state and validation for the project request wizard and the contact
//! form. Nothing in here touches the DOM, so the rules run in native tests.

pub mod contact;
pub mod files;
pub mod options;
pub mod payload;
pub mod steps;
pub mod submission;
pub mod validation;
pub mod values;
pub mod wizard;
