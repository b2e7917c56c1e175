use tanh_approx::benchmark::output::{write_summary_csv, write_sweep_csv};
use tanh_approx::benchmark::sweep::{compare, summary};
use tanh_approx::prelude::*;
use tanh_approx::utils::random_normal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let activations = ActivationKind::ALL
        .iter()
        .map(|kind| kind.build())
        .collect::<Result<Vec<_>>>()?;

    // approximation error over [-8, 8]
    let config = SweepConfig::default();
    let reports = compare(&activations, &config)?;
    println!("{}", summary(&reports));

    let sweep_path = format!("{}/tanh_sweep.csv", out_dir);
    let summary_path = format!("{}/tanh_summary.csv", out_dir);
    write_sweep_csv(&reports, &sweep_path)?;
    write_summary_csv(&reports, &summary_path)?;
    println!("Sweep has been saved as '{}'", sweep_path);
    println!("Summary has been saved as '{}'", summary_path);

    // drift of the recurrent state when tanh is swapped out
    let x = random_normal((32, 64, 128), 42)?;
    println!("\nLSTM state drift vs exact tanh (batch 32, 64 steps, 128 features)");
    for activation in activations {
        let cell = LstmCell::new(128, 64, activation, 7)?;
        let drift = cell.state_drift(&x)?;
        println!(
            "{:<14} hidden MSE: {:.3e}\t cell MSE: {:.3e}\t mean: {:.3e}",
            cell.activation.name(),
            drift.hidden_mse,
            drift.cell_mse,
            drift.mean()
        );
    }

    Ok(())
}
