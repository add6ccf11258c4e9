use std::marker::PhantomData;

use num_traits::Float;
use rand::{
    distributions::{uniform::SampleUniform, Distribution, Standard, Uniform},
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// A uniform sample from $`[0, 1)`$.
pub struct Unit<T>(PhantomData<T>);

/// `len` uniform samples from $`[0, 1)`$.
pub struct UnitSeq<T> {
    len: usize,
    _t: PhantomData<T>,
}

/// `len` uniform samples from $`[k/b, (k+1)/b)`$, i.e., all of them
/// falling into the `k`-th of `b` buckets.
pub struct Clustered<T> {
    len: usize,
    bucket: usize,
    buckets: usize,
    _t: PhantomData<T>,
}

impl<T> Unit<T> {
    pub fn new() -> Self { Self(PhantomData) }
}

impl<T> Default for Unit<T> {
    fn default() -> Self { Self::new() }
}

impl<T> UnitSeq<T> {
    pub fn new(len: usize) -> Self { Self { len, _t: PhantomData } }
}

impl<T> Clustered<T> {
    pub fn new(len: usize, bucket: usize, buckets: usize) -> Self {
        assert!(bucket < buckets, "bucket {bucket} out of 0..{buckets}");
        Self { len, bucket, buckets, _t: PhantomData }
    }
}

impl<T> Gen for Unit<T>
where
    Standard: Distribution<T>,
{
    type Output = T;
    fn generate<R: Rng>(&self, rng: &mut R) -> T { rng.gen() }
}

impl<T> Gen for UnitSeq<T>
where
    Standard: Distribution<T>,
{
    type Output = Vec<T>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<T> {
        let unit = Unit::<T>::new();
        (0..self.len).map(|_| unit.generate(&mut *rng)).collect()
    }
}

impl<T: Float + SampleUniform> Gen for Clustered<T> {
    type Output = Vec<T>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<T> {
        let Self { len, bucket, buckets, .. } = *self;
        let cast = |x: usize| T::from(x).unwrap();
        let lo = cast(bucket) / cast(buckets);
        let hi = cast(bucket + 1) / cast(buckets);
        let between = Uniform::new(lo, hi.min(T::one()));
        between.sample_iter(rng).take(len).collect()
    }
}

#[test]
fn range() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);

    let a: Vec<f64> = UnitSeq::<f64>::new(10_000).generate(&mut rng);
    assert_eq!(a.len(), 10_000);
    assert!(a.iter().all(|&x| (0.0..1.0).contains(&x)));

    let a: Vec<f32> = UnitSeq::<f32>::new(0).generate(&mut rng);
    assert!(a.is_empty());

    for k in 0..10 {
        let a: Vec<f64> =
            Clustered::<f64>::new(1000, k, 10).generate(&mut rng);
        let lo = k as f64 / 10.0;
        let hi = (k + 1) as f64 / 10.0;
        assert_eq!(a.len(), 1000);
        assert!(a.iter().all(|&x| lo <= x && x < hi && x < 1.0));
    }
}

#[test]
fn uniformity() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let n = 10_usize.pow(6);
    let k = 10;

    let mut count = vec![0; k];
    let unit = Unit::<f64>::new();
    for _ in 0..n {
        count[(unit.generate(&mut rng) * k as f64) as usize] += 1;
    }
    for &v in &count {
        assert!(v >= (n / k) * 99 / 100);
        assert!(v <= (n / k) * 101 / 100);
    }
}
