pub mod conf;
pub mod element;
pub mod error;
pub mod screenplay;

pub use conf::ParseConf;
pub use element::{Element, ElementKind};
pub use error::{ScriptError, ScriptResult};
pub use screenplay::Screenplay;
