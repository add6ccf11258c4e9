//! Separator-joined formatting of sequences.
//!
//! The format spec given by the caller applies to every element.
//!
//! ```
//! use str_sep::{SpaceSep, StrSep};
//!
//! let a = [0.1, 0.12, 0.32];
//! assert_eq!(format!("{}", SpaceSep(&a)), "0.1 0.12 0.32");
//! assert_eq!(format!("{:.3}", StrSep(&a, ", ")), "0.100, 0.120, 0.320");
//! ```

use std::fmt;

pub struct SpaceSep<I>(pub I);
pub struct StrSep<'a, I>(pub I, pub &'a str);

macro_rules! impl_fmt {
    ( $( $fmt:ident )* ) => { $(
        impl<I, T: fmt::$fmt> fmt::$fmt for SpaceSep<I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                join(self.0.clone(), " ", f, fmt::$fmt::fmt)
            }
        }
        impl<I, T: fmt::$fmt> fmt::$fmt for StrSep<'_, I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                join(self.0.clone(), self.1, f, fmt::$fmt::fmt)
            }
        }
    )* }
}

impl_fmt! { Display Debug LowerExp UpperExp }

fn join<I, T>(
    iter: I,
    sep: &str,
    f: &mut fmt::Formatter<'_>,
    elem: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
{
    for (i, x) in iter.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        elem(&x, f)?;
    }
    Ok(())
}

#[test]
fn sanity_check() {
    let a = [0.52, 0.12, 0.86];
    assert_eq!(format!("{}", SpaceSep(&a[..0])), "");
    assert_eq!(format!("{}", SpaceSep(&a[..1])), "0.52");
    assert_eq!(format!("{}", SpaceSep(&a)), "0.52 0.12 0.86");

    assert_eq!(format!("{}", StrSep(&a[..0], ", ")), "");
    assert_eq!(format!("{}", StrSep(&a[..2], ", ")), "0.52, 0.12");
    assert_eq!(format!("{}", StrSep(&a, "\n")), "0.52\n0.12\n0.86");
}

#[test]
fn formatting() {
    let float = [0.1_f32, 0.25, 0.5];
    assert_eq!(format!("{:.2}", SpaceSep(&float)), "0.10 0.25 0.50");
    assert_eq!(format!("{:5}", SpaceSep(&float)), "  0.1  0.25   0.5");
    assert_eq!(format!("{:?}", SpaceSep(&float)), "0.1 0.25 0.5");
    assert_eq!(format!("{:e}", SpaceSep(&float)), "1e-1 2.5e-1 5e-1");
    assert_eq!(format!("{:E}", StrSep(&float, "|")), "1E-1|2.5E-1|5E-1");

    let special = [0.0, -0.0, f64::NAN];
    assert_eq!(format!("{:?}", SpaceSep(&special)), "0.0 -0.0 NaN");
}

#[test]
fn iter() {
    assert_eq!(format!("{}", SpaceSep(0..4)), "0 1 2 3");
    assert_eq!(
        format!("{}", SpaceSep([1, 2, 4].iter().map(|&x| x as f64 / 8.0))),
        "0.125 0.25 0.5"
    );
}
