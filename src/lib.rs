// ABOUTME: Library module for the slider program.
// ABOUTME: Contains core functionality for normalizing, linking, and writing slides.

// Reexport modules
pub mod build;
pub mod config;
pub mod convert;
pub mod dom;
pub mod errors;
pub mod inject;
pub mod normalize;
pub mod stylesheet;
pub mod utils;

// Reexport common types and functions
pub use build::{build_slideshow, read_slide_list, BuildConfig, NamingScheme, Report};
pub use config::Config;
pub use convert::{default_chain, Converter};
pub use dom::Element;
pub use errors::{Result, SliderError};
pub use inject::{inject, InjectOutcome};
pub use normalize::{classify, normalize, SlideKind};
pub use stylesheet::{write_stylesheet, OverwritePolicy, DEFAULT_STYLESHEET};
