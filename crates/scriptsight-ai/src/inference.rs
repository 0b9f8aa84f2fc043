use crate::{data::normalize, model::Model, training::TrainingConfig};
use burn::{
    config::ConfigError,
    prelude::*,
    record::{CompactRecorder, Recorder, RecorderError},
    tensor::{ElementConversion, activation::softmax},
};
use image::imageops::FilterType;
use thiserror::Error;

/// Side length the network was trained on.
pub const IMAGE_SIZE: usize = 28;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("empty image upload")]
    EmptyImage,

    #[error("invalid image: {0}")]
    InvalidImage(#[from] image::ImageError),

    #[error("failed to load model config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load model record: {0}")]
    Record(#[from] RecorderError),
}

/// A single classified digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub digit: u8,
    /// Softmax probability of the predicted class.
    pub confidence: f32,
}

/// Rebuilds the trained model from `config.json` and the `model` record
/// written by [`crate::training::train`].
pub fn load_model<B: Backend>(
    artifact_dir: &str,
    device: &B::Device,
) -> Result<Model<B>, InferenceError> {
    let config = TrainingConfig::load(format!("{artifact_dir}/config.json"))?;
    let record = CompactRecorder::new().load(format!("{artifact_dir}/model").into(), device)?;

    Ok(config.model.init::<B>(device).load_record(record))
}

/// Decodes uploaded image bytes into a single-item input batch.
///
/// Any format the decoder understands is accepted; the image is converted to
/// grayscale, resized to exactly 28x28 and normalized with the same
/// constants as the training transform.
pub fn preprocess<B: Backend>(
    bytes: &[u8],
    device: &B::Device,
) -> Result<Tensor<B, 3>, InferenceError> {
    if bytes.is_empty() {
        return Err(InferenceError::EmptyImage);
    }

    let gray = image::load_from_memory(bytes)?
        .resize_exact(IMAGE_SIZE as u32, IMAGE_SIZE as u32, FilterType::Triangle)
        .into_luma8();

    let pixels: Vec<f32> = gray.into_raw().into_iter().map(f32::from).collect();
    let data = TensorData::new(pixels, [1, IMAGE_SIZE, IMAGE_SIZE]);
    let tensor = Tensor::<B, 3>::from_data(data.convert::<B::FloatElem>(), device);

    Ok(normalize(tensor))
}

/// Runs a forward pass on a single-item batch and picks the arg-max class.
pub fn predict<B: Backend>(model: &Model<B>, input: Tensor<B, 3>) -> Prediction {
    let output = model.forward(input);
    let probabilities = softmax(output, 1);

    let (confidence, index) = probabilities.max_dim_with_indices(1);
    let digit = index.flatten::<1>(0, 1).into_scalar().elem::<i64>() as u8;
    let confidence = confidence.flatten::<1>(0, 1).into_scalar().elem::<f32>();

    Prediction { digit, confidence }
}

/// Full serving path: decode, preprocess and classify one uploaded image.
pub fn predict_image<B: Backend>(
    model: &Model<B>,
    bytes: &[u8],
    device: &B::Device,
) -> Result<Prediction, InferenceError> {
    let input = preprocess(bytes, device)?;
    Ok(predict(model, input))
}
