#[doc(inline)]
pub use str_sep::{self, *};
