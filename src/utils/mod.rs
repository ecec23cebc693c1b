pub mod constants;

pub use constants::{DEFAULT_SCENE_HEADINGS, LINE_REGEX};
