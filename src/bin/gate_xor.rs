use online_perceptron::{
    dataset,
    perceptron::{Neuron, PerceptronError},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), PerceptronError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // XOR is not linearly separable, so some point always ends up on the wrong side.
    let samples = dataset::logic_gate(|a, b| a ^ b);
    let mut neuron: Neuron = Neuron::new(3);
    for epoch in 0..10 {
        let converged = neuron.train_batch_until_correct(dataset::pairs(&samples), 1.0, 5)?;
        let updates = neuron.train_batch(dataset::pairs(&samples))?;
        info!(
            epoch = epoch + 1,
            converged,
            updates,
            weights = ?neuron.weights(),
            "epoch finished"
        );
    }
    for sample in &samples {
        println!("input: {:?}", &sample.input[1..]);
        println!("real: {}", sample.label);
        println!("pred: {:?}", neuron.predict(&sample.input)?);
        println!("================")
    }
    Ok(())
}
