//! `fastinv eval`: evaluate the kernel for individual values.

use anyhow::{bail, Result};
use clap::Args;
use fastinv_math::bounds::bound_for_iterations;
use fastinv_math::{approx_rsqrt_with, exact_rsqrt, relative_error, DomainError, DEFAULT_ITERATIONS};
use log::{debug, warn};

/// Arguments for `fastinv eval`.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Values to evaluate
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f32>,

    /// Newton-Raphson refinement passes
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Fail on inputs outside the domain instead of printing the raw result
    #[arg(long)]
    pub strict: bool,
}

/// One evaluated value.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation {
    /// Input value
    pub input: f32,
    /// Kernel output
    pub approx: f32,
    /// f64 reference
    pub exact: f64,
    /// Relative error, NaN outside the domain
    pub error: f64,
}

/// Evaluate `input` with `iterations` refinement passes.
pub fn evaluate(input: f32, iterations: u32) -> Evaluation {
    let approx = approx_rsqrt_with(input, iterations);
    Evaluation {
        input,
        approx,
        exact: exact_rsqrt(input),
        error: relative_error(approx, input),
    }
}

/// Execute `fastinv eval`.
pub fn execute(args: &EvalArgs) -> Result<()> {
    debug!("eval: {} value(s), {} iteration(s)", args.values.len(), args.iterations);

    if args.strict {
        if let Some((value, err)) = args
            .values
            .iter()
            .find_map(|&v| DomainError::classify(v).map(|e| (v, e)))
        {
            bail!("{} for value {}", err, value);
        }
    }

    let bound = bound_for_iterations(args.iterations);

    println!(
        "{:>14}  {:>14}  {:>14}  {:>12}",
        "x", "approx", "exact", "rel_error"
    );
    for &value in &args.values {
        let eval = evaluate(value, args.iterations);
        if let Some(err) = DomainError::classify(value) {
            warn!("{}: {}", value, err);
        } else if eval.error >= bound {
            warn!("{}: error {:e} exceeds bound {:e}", value, eval.error, bound);
        }
        println!(
            "{:>14e}  {:>14.8}  {:>14.8}  {:>12.3e}",
            eval.input, eval.approx, eval.exact, eval.error
        );
    }

    Ok(())
}
