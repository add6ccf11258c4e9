//! Bucket sort for floats in $`[0, 1)`$.
//!
//! Each element $`v`$ goes to bucket $`\lfloor vB\rfloor`$, the buckets are
//! sorted one by one, and then written back in bucket order. With uniformly
//! distributed input every bucket holds $`O(1)`$ elements on average, so the
//! whole sort runs in expected $`O(n)`$ time.
//!
//! ```
//! use unit_bucket_sort::UnitBucketSort;
//!
//! let mut a = [0.52, 0.12, 0.86, 0.29, 0.46, 0.4, 0.18, 0.6];
//! a.checked_bucket_sort().unwrap();
//! assert_eq!(a, [0.12, 0.18, 0.29, 0.4, 0.46, 0.52, 0.6, 0.86]);
//!
//! let mut b = [0.3, 1.0, 0.1];
//! assert!(b.checked_bucket_sort().is_err());
//! assert_eq!(b, [0.3, 1.0, 0.1]);
//! ```

use std::cmp::Ordering;

use num_traits::{Float, NumCast};

/// Number of buckets used by [`UnitBucketSort::bucket_sort`].
pub const BUCKET_COUNT: usize = 10;

/// An element outside $`[0, 1)`$ (NaN included).
///
/// `index` is the smallest offending position.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("value {value} at index {index} is out of range [0, 1)")]
pub struct OutOfUnitRange {
    pub index: usize,
    pub value: f64,
}

struct NonZero<const B: usize>;

impl<const B: usize> NonZero<B> {
    const OK: () = assert!(B > 0, "bucket count must be positive");
}

pub trait UnitBucketSort {
    /// # Panics
    /// Panics if some element is not in $`[0, 1)`$.
    fn bucket_sort(&mut self) { self.bucket_sort_with::<BUCKET_COUNT>() }

    fn checked_bucket_sort(&mut self) -> Result<(), OutOfUnitRange> {
        self.checked_bucket_sort_with::<BUCKET_COUNT>()
    }

    fn bucket_sort_with<const B: usize>(&mut self) {
        match self.checked_bucket_sort_with::<B>() {
            Ok(()) => {}
            Err(e) => panic!("{}", e),
        }
    }

    /// Sorts with `B` buckets. On error, `self` is left as it was.
    fn checked_bucket_sort_with<const B: usize>(
        &mut self,
    ) -> Result<(), OutOfUnitRange>;
}

/// $`\lfloor vB\rfloor`$, for $`v\in[0, 1)`$.
///
/// The product may round up to $`B`$ when $`v`$ is just below $`1`$; such
/// values belong to the last bucket.
pub fn bucket_index<T: Float, const B: usize>(v: T) -> usize {
    let () = NonZero::<B>::OK;
    let scale = <T as NumCast>::from(B)
        .expect("a usize is always castable to a float");
    (v * scale).floor().to_usize().map_or(B - 1, |i| i.min(B - 1))
}

fn check_unit_range<T: Float>(a: &[T]) -> Result<(), OutOfUnitRange> {
    // written so that NaN is rejected too
    let bad = a.iter().position(|&v| !(T::zero() <= v && v < T::one()));
    match bad {
        None => Ok(()),
        Some(index) => {
            let value = a[index].to_f64().unwrap_or(f64::NAN);
            log::debug!("rejecting {value} at index {index} of {}", a.len());
            Err(OutOfUnitRange { index, value })
        }
    }
}

impl<T: Float> UnitBucketSort for [T] {
    fn checked_bucket_sort_with<const B: usize>(
        &mut self,
    ) -> Result<(), OutOfUnitRange> {
        let () = NonZero::<B>::OK;
        check_unit_range(self)?;
        if self.is_empty() {
            return Ok(());
        }

        let mut buckets: Vec<Vec<T>> = (0..B).map(|_| vec![]).collect();
        for &ai in &*self {
            buckets[bucket_index::<T, B>(ai)].push(ai);
        }
        if log::log_enabled!(log::Level::Trace) {
            let sizes: Vec<_> = buckets.iter().map(Vec::len).collect();
            log::trace!("bucket sizes: {sizes:?}");
        }

        // no NaN survives the range check
        let cmp = |x: &T, y: &T| x.partial_cmp(y).unwrap_or(Ordering::Equal);
        for bucket in &mut buckets {
            bucket.sort_unstable_by(cmp);
        }
        for (ai, bi) in self.iter_mut().zip(buckets.into_iter().flatten()) {
            *ai = bi;
        }
        Ok(())
    }
}

#[test]
fn sanity_check() {
    let mut empty: Vec<f64> = vec![];
    empty.bucket_sort();
    assert_eq!(empty, []);

    let mut a = [0.52, 0.12, 0.86, 0.29, 0.46, 0.4, 0.18, 0.6];
    a.bucket_sort();
    assert_eq!(a, [0.12, 0.18, 0.29, 0.4, 0.46, 0.52, 0.6, 0.86]);

    let mut a = vec![0.52, 0.44, 0.68, 0.95, 0.1, 0.12, 0.32, 0.59];
    a.bucket_sort();
    assert_eq!(a, [0.1, 0.12, 0.32, 0.44, 0.52, 0.59, 0.68, 0.95]);

    let mut a = [0.52_f32, 0.44, 0.68, 0.95, 0.1, 0.12, 0.32, 0.59];
    a.bucket_sort();
    assert_eq!(a, [0.1, 0.12, 0.32, 0.44, 0.52, 0.59, 0.68, 0.95]);
}

#[test]
fn boundaries() {
    assert_eq!(bucket_index::<f64, 10>(0.0), 0);
    assert_eq!(bucket_index::<f64, 10>(-0.0), 0);
    assert_eq!(bucket_index::<f64, 10>(0.1), 1);
    assert_eq!(bucket_index::<f64, 10>(0.999999), 9);
    assert_eq!(bucket_index::<f64, 10>(1.0 - f64::EPSILON / 2.0), 9);
    assert_eq!(bucket_index::<f32, 10>(1.0 - f32::EPSILON / 2.0), 9);
    assert_eq!(bucket_index::<f64, 1>(0.75), 0);
    assert_eq!(bucket_index::<f64, 1000>(0.9995), 999);

    let mut a = [0.999999, 0.0, 0.5, 0.0];
    a.bucket_sort();
    assert_eq!(a, [0.0, 0.0, 0.5, 0.999999]);
}

#[test]
fn rejects_out_of_range() {
    let orig = [0.3, 0.2, -0.1, 0.7, 1.0];
    let mut a = orig;
    assert_eq!(
        a.checked_bucket_sort(),
        Err(OutOfUnitRange { index: 2, value: -0.1 })
    );
    assert_eq!(a, orig);

    let mut a = [0.3, 1.0, 0.1];
    assert_eq!(
        a.checked_bucket_sort(),
        Err(OutOfUnitRange { index: 1, value: 1.0 })
    );
    assert_eq!(a, [0.3, 1.0, 0.1]);

    let mut a = [0.5_f32, f32::INFINITY];
    assert_eq!(a.checked_bucket_sort().unwrap_err().index, 1);

    let mut a = [f64::NAN, 0.5];
    let e = a.checked_bucket_sort().unwrap_err();
    assert_eq!(e.index, 0);
    assert!(e.value.is_nan());
    assert_eq!(a[1], 0.5);

    assert_eq!(
        OutOfUnitRange { index: 4, value: 1.0 }.to_string(),
        "value 1 at index 4 is out of range [0, 1)"
    );
}

#[test]
#[should_panic(expected = "value 1.5 at index 0 is out of range [0, 1)")]
fn panics_out_of_range() { [1.5, 0.5].bucket_sort(); }

#[test]
fn idempotent() {
    let sorted = [0.0, 0.01, 0.1, 0.25, 0.25, 0.5, 0.75, 0.99];
    let mut a = sorted;
    a.bucket_sort();
    assert_eq!(a, sorted);
    a.bucket_sort();
    assert_eq!(a, sorted);

    let mut same = [0.42; 16];
    same.bucket_sort();
    assert_eq!(same, [0.42; 16]);
}

#[test]
fn bucket_counts() {
    let orig = [0.9, 0.05, 0.5, 0.3, 0.31, 0.7, 0.0, 0.65];
    let mut expected = orig;
    expected.sort_by(|x, y| x.partial_cmp(y).unwrap());

    let mut a = orig;
    a.bucket_sort_with::<1>();
    assert_eq!(a, expected);

    let mut a = orig;
    a.bucket_sort_with::<3>();
    assert_eq!(a, expected);

    let mut a = orig;
    a.checked_bucket_sort_with::<1000>().unwrap();
    assert_eq!(a, expected);
}

#[test]
fn random() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use randgen::{Clustered, Gen, UnitSeq};

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    for len in [0, 1, 2, 10, 100, 1000, 10000] {
        let orig: Vec<f64> = UnitSeq::<f64>::new(len).generate(&mut rng);
        let mut expected = orig.clone();
        expected.sort_by(|x, y| x.partial_cmp(y).unwrap());

        let mut a = orig.clone();
        a.bucket_sort();
        assert_eq!(a, expected);

        let mut a = orig;
        a.bucket_sort_with::<7>();
        assert_eq!(a, expected);
    }

    for bucket in 0..BUCKET_COUNT {
        let orig: Vec<f32> =
            Clustered::<f32>::new(500, bucket, BUCKET_COUNT).generate(&mut rng);
        let mut expected = orig.clone();
        expected.sort_by(|x, y| x.partial_cmp(y).unwrap());

        let mut a = orig;
        a.bucket_sort();
        assert_eq!(a, expected);
    }
}
