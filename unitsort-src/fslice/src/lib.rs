#[doc(inline)]
pub use unit_bucket_sort::{self, *};
