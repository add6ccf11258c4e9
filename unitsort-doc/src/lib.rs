//! Sorting floats in $`[0, 1)`$ by bucket sort, and the pieces around it.

#[doc(inline)]
pub use fmt;
#[doc(inline)]
pub use fslice;
#[doc(inline)]
pub use random;
