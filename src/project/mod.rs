pub mod build_settings;
pub mod builder;
pub mod globre;
pub mod path_utils;
pub mod paths;
pub mod xcode_project;

pub use xcode_project::{ProjectError, XcodeProject};
