//! Template renderer adapters.

mod tera;

pub use self::tera::{BUILTIN_TEMPLATES, TeraRenderer};
