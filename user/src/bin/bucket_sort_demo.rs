//! Sorts the sample arrays, or the values given as arguments, and prints
//! them space-separated.

use std::{num::ParseFloatError, process::ExitCode};

use str_sep::SpaceSep;
use unit_bucket_sort::{OutOfUnitRange, UnitBucketSort};

#[derive(Debug, thiserror::Error)]
enum ArgError {
    #[error("cannot parse {0:?} as a float")]
    Parse(String, #[source] ParseFloatError),
    #[error(transparent)]
    Range(#[from] OutOfUnitRange),
}

fn sort_args(args: &[String]) -> Result<Vec<f64>, ArgError> {
    let mut a = args
        .iter()
        .map(|s| s.parse().map_err(|e| ArgError::Parse(s.clone(), e)))
        .collect::<Result<Vec<f64>, _>>()?;
    a.checked_bucket_sort()?;
    Ok(a)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return match sort_args(&args) {
            Ok(a) => {
                println!("{}", SpaceSep(&a));
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut floats = [0.52_f32, 0.44, 0.68, 0.95, 0.1, 0.12, 0.32, 0.59];
    let mut doubles = [0.52_f64, 0.44, 0.68, 0.95, 0.1, 0.12, 0.32, 0.59];

    floats.bucket_sort();
    println!("Sorted float array: {}", SpaceSep(&floats));

    doubles.bucket_sort();
    println!("Sorted double array: {}", SpaceSep(&doubles));

    ExitCode::SUCCESS
}

#[test]
fn args() {
    let args = |a: &[&str]| a.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let a = sort_args(&args(&["0.5", "0.25", "0", "0.75"])).unwrap();
    assert_eq!(a, [0.0, 0.25, 0.5, 0.75]);
    assert_eq!(format!("{}", SpaceSep(&a)), "0 0.25 0.5 0.75");

    assert!(matches!(
        sort_args(&args(&["0.5", "half"])),
        Err(ArgError::Parse(s, _)) if s == "half"
    ));
    assert!(matches!(
        sort_args(&args(&["0.5", "1.0"])),
        Err(ArgError::Range(OutOfUnitRange { index: 1, .. }))
    ));
}
