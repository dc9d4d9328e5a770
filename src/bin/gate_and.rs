use online_perceptron::{
    dataset::{self, Sample},
    perceptron::{Neuron, PerceptronError},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn fit<const N: usize>(
    neuron: &mut Neuron,
    samples: &[Sample<N>],
    epochs: usize,
) -> Result<Option<usize>, PerceptronError> {
    for epoch in 0..epochs {
        let updates = neuron.train_batch(dataset::pairs(samples))?;
        info!(epoch = epoch + 1, updates, "epoch finished");
        if updates == 0 {
            return Ok(Some(epoch + 1));
        }
    }
    Ok(None)
}

fn main() -> Result<(), PerceptronError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let samples = dataset::logic_gate(|a, b| a && b);
    let mut neuron: Neuron = Neuron::new(3);
    match fit(&mut neuron, &samples, 20)? {
        Some(epochs) => info!(epochs, weights = ?neuron.weights(), "separated AND"),
        None => info!(weights = ?neuron.weights(), "failed to separate AND"),
    }
    for sample in &samples {
        println!("input: {:?}", &sample.input[1..]);
        println!("real: {}", sample.label);
        println!("pred: {:?}", neuron.predict(&sample.input)?);
        println!("================")
    }
    Ok(())
}
