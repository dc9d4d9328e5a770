use online_perceptron::{
    dataset,
    perceptron::{learning_rate, Config, Neuron, PerceptronError},
};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PerceptronError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(12345);
    let normal = [-0.5, 2.0, -1.0, 0.25];
    let Some(samples) = dataset::separable(&mut rng, &normal, 0.05, 1000, StandardNormal) else {
        warn!("hyperplane has no sides");
        return Ok(());
    };

    let config = Config {
        alpha: learning_rate(0.0),
        max_iterations: 10,
        require_bias: true,
    };
    let mut neuron: Neuron = Neuron::new(normal.len()).with_config(config);
    for epoch in 0..1000 {
        let updates = neuron.train_batch(dataset::pairs(&samples))?;
        if epoch % 10 == 0 || updates == 0 {
            info!(epoch = epoch + 1, updates, "epoch finished");
        }
        if updates == 0 {
            break;
        }
    }

    let mut correct = 0;
    for sample in &samples {
        if neuron.predict(&sample.input)? == Some(sample.label) {
            correct += 1;
        }
    }
    info!(
        correct,
        total = samples.len(),
        weights = ?neuron.weights(),
        "training finished"
    );
    Ok(())
}
