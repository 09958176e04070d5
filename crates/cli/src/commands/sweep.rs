//! `fastinv sweep`: measure relative error over a log-spaced range.

use anyhow::{bail, ensure, Result};
use clap::Args;
use fastinv_math::bounds::bound_for_iterations;
use fastinv_math::{approx_rsqrt_with, relative_error, DEFAULT_ITERATIONS};
use log::{debug, info, trace, warn};

/// Arguments for `fastinv sweep`.
#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// Smallest input
    #[arg(long, default_value_t = 1e-6)]
    pub min: f32,

    /// Largest input
    #[arg(long, default_value_t = 1e6)]
    pub max: f32,

    /// Number of log-spaced samples
    #[arg(short, long, default_value_t = 10_000)]
    pub samples: usize,

    /// Newton-Raphson refinement passes
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Exit with an error if the documented bound is exceeded
    #[arg(long)]
    pub check: bool,
}

/// Error statistics for one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepReport {
    /// Samples evaluated
    pub samples: usize,
    /// Samples whose error was NaN or infinite, excluded from the statistics
    pub non_finite: usize,
    /// Largest relative error seen
    pub max_error: f64,
    /// Mean relative error over the finite samples
    pub mean_error: f64,
    /// Input that produced `max_error`
    pub worst_input: f32,
    /// Documented bound for the iteration count
    pub bound: f64,
}

impl SweepReport {
    /// Whether every sample was measurable and the maximum is below the
    /// documented bound.
    pub fn within_bound(&self) -> bool {
        self.non_finite == 0 && self.max_error < self.bound
    }
}

fn validate(args: &SweepArgs) -> Result<()> {
    ensure!(
        args.min.is_finite() && args.max.is_finite(),
        "range must be finite, got [{}, {}]",
        args.min,
        args.max
    );
    ensure!(args.min > 0.0, "min must be positive, got {}", args.min);
    ensure!(
        args.min < args.max,
        "min must be below max, got [{}, {}]",
        args.min,
        args.max
    );
    ensure!(args.samples >= 2, "need at least 2 samples, got {}", args.samples);
    Ok(())
}

/// Evaluate `args.samples` log-spaced inputs across `[args.min, args.max]`.
pub fn run(args: &SweepArgs) -> Result<SweepReport> {
    validate(args)?;

    let lo = (args.min as f64).ln();
    let hi = (args.max as f64).ln();
    let last = (args.samples - 1) as f64;

    let mut max_error = 0.0f64;
    let mut worst_input = args.min;
    let mut total = 0.0f64;
    let mut non_finite = 0usize;

    for i in 0..args.samples {
        // exp() can round past the endpoints, and past f32::MAX near the top
        let x = ((lo + (i as f64 / last) * (hi - lo)).exp() as f32).clamp(args.min, args.max);
        let error = relative_error(approx_rsqrt_with(x, args.iterations), x);
        trace!("x={:e} error={:e}", x, error);
        if !error.is_finite() {
            debug!("non-finite error at x={:e}", x);
            non_finite += 1;
            continue;
        }
        if error > max_error {
            max_error = error;
            worst_input = x;
        }
        total += error;
    }

    let measured = args.samples - non_finite;
    let mean_error = if measured == 0 {
        f64::NAN
    } else {
        total / measured as f64
    };

    Ok(SweepReport {
        samples: args.samples,
        non_finite,
        max_error,
        mean_error,
        worst_input,
        bound: bound_for_iterations(args.iterations),
    })
}

/// Execute `fastinv sweep`.
pub fn execute(args: &SweepArgs) -> Result<()> {
    debug!("sweep: {:?}", args);
    let report = run(args)?;

    println!("range:       [{:e}, {:e}]", args.min, args.max);
    println!("samples:     {}", report.samples);
    if report.non_finite > 0 {
        println!("non-finite:  {}", report.non_finite);
    }
    println!("iterations:  {}", args.iterations);
    println!("max error:   {:.6e} at x = {:e}", report.max_error, report.worst_input);
    println!("mean error:  {:.6e}", report.mean_error);
    println!("bound:       {:.1e}", report.bound);

    if report.within_bound() {
        info!("sweep within bound");
        println!("status:      ok");
    } else {
        warn!(
            "max error {:e} exceeds bound {:e} ({} non-finite samples)",
            report.max_error, report.bound, report.non_finite
        );
        println!("status:      exceeded");
        if args.check {
            ensure!(
                report.non_finite == 0,
                "{} of {} samples produced a non-finite error",
                report.non_finite,
                report.samples
            );
            bail!(
                "max relative error {:e} exceeds bound {:e} for {} iteration(s)",
                report.max_error,
                report.bound,
                args.iterations
            );
        }
    }

    Ok(())
}
