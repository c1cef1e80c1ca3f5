mod core;
mod spec;
mod values;

pub use self::core::*;
pub use spec::*;
pub use values::*;
