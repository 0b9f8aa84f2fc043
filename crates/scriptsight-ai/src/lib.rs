//! Handwritten-digit recognition: model definition, MNIST training and
//! checkpoint-backed inference for the scriptsight service.

pub mod data;
pub mod inference;
pub mod model;
pub mod training;

pub use inference::{Prediction, load_model, predict_image};
pub use model::{Model, ModelConfig};
