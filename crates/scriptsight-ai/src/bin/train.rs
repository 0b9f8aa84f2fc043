use burn::{backend::Autodiff, optim::AdamConfig};
use scriptsight_ai::{model::ModelConfig, training::TrainingConfig};

#[cfg(feature = "wgpu")]
fn run(artifact_dir: &str) {
    use burn::backend::{Wgpu, wgpu::WgpuDevice};

    scriptsight_ai::training::train::<Autodiff<Wgpu>>(
        artifact_dir,
        TrainingConfig::new(ModelConfig::new(), AdamConfig::new()),
        WgpuDevice::default(),
    );
}

#[cfg(not(feature = "wgpu"))]
fn run(artifact_dir: &str) {
    use burn::backend::{NdArray, ndarray::NdArrayDevice};

    scriptsight_ai::training::train::<Autodiff<NdArray>>(
        artifact_dir,
        TrainingConfig::new(ModelConfig::new(), AdamConfig::new()),
        NdArrayDevice::Cpu,
    );
}

fn main() {
    tracing_subscriber::fmt().init();

    let artifact_dir =
        std::env::var("SCRIPTSIGHT_ARTIFACT_DIR").unwrap_or_else(|_| "artifacts".to_string());

    tracing::info!(artifact_dir, "training digit classifier on MNIST");
    run(&artifact_dir);
    tracing::info!(artifact_dir, "training finished, checkpoint written");
}
