//! Shared application state: the loaded model, read-only for the lifetime
//! of the process.

use burn::backend::NdArray;
use scriptsight_ai::{
    inference::{self, InferenceError, Prediction},
    model::Model,
};
use std::sync::{Arc, Mutex};

pub type Backend = NdArray<f32>;
pub type Device = <Backend as burn::tensor::backend::Backend>::Device;

/// State injected into every handler.
///
/// The model sits behind a `Mutex` because burn's `Param` (lazy `OnceCell`
/// initialization) is `Send` but not `Sync`, and axum state must be both.
pub struct AppState {
    model: Mutex<Model<Backend>>,
    device: Device,
}

impl AppState {
    /// Loads the trained checkpoint written by `scriptsight-train`.
    pub fn from_artifacts(artifact_dir: &str) -> Result<Self, InferenceError> {
        let device = Device::default();
        let model = inference::load_model::<Backend>(artifact_dir, &device)?;

        Ok(Self {
            model: Mutex::new(model),
            device,
        })
    }

    /// Wraps an already-built model. Used by tests.
    pub fn with_model(model: Model<Backend>) -> Self {
        Self {
            model: Mutex::new(model),
            device: Device::default(),
        }
    }

    /// Classifies one uploaded image.
    pub fn predict(&self, bytes: &[u8]) -> Result<Prediction, InferenceError> {
        let model = self.model.lock().expect("model lock poisoned");
        inference::predict_image(&model, bytes, &self.device)
    }
}

pub type SharedState = Arc<AppState>;
