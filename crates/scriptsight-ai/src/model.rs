use burn::{
    nn::{
        BatchNorm, BatchNormConfig, Dropout, DropoutConfig, Linear, LinearConfig,
        PaddingConfig2d, Relu,
        conv::{Conv2d, Conv2dConfig},
        pool::{MaxPool2d, MaxPool2dConfig},
    },
    prelude::*,
};

/// One digit class per output logit.
pub const NUM_CLASSES: usize = 10;

/// Images are 28x28 grayscale; three 2x2 pools bring that down to 3x3.
const FEATURES_AFTER_POOLING: usize = 256 * 3 * 3;

/// Conv2d + BatchNorm + ReLU, the repeated feature-extraction unit.
#[derive(Module, Debug)]
pub struct ConvBlock<B: Backend> {
    conv: Conv2d<B>,
    norm: BatchNorm<B, 2>,
    activation: Relu,
}

impl<B: Backend> ConvBlock<B> {
    fn new(channels: [usize; 2], device: &B::Device) -> Self {
        let conv = Conv2dConfig::new(channels, [3, 3])
            .with_padding(PaddingConfig2d::Explicit(1, 1))
            .init(device);
        let norm = BatchNormConfig::new(channels[1]).init(device);

        Self {
            conv,
            norm,
            activation: Relu::new(),
        }
    }

    fn forward(&self, input: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.conv.forward(input);
        let x = self.norm.forward(x);
        self.activation.forward(x)
    }
}

/// Convolutional digit classifier.
///
/// Three conv blocks widen the channels 1 -> 64 -> 128 -> 256, each followed
/// by max-pooling and dropout, then a two-layer linear head maps the
/// flattened features to one logit per digit.
#[derive(Module, Debug)]
pub struct Model<B: Backend> {
    conv1: ConvBlock<B>,
    conv2: ConvBlock<B>,
    conv3: ConvBlock<B>,
    pool: MaxPool2d,
    dropout: Dropout,
    fc1: Linear<B>,
    fc2: Linear<B>,
    activation: Relu,
}

#[derive(Config, Debug)]
pub struct ModelConfig {
    #[config(default = 10)]
    pub num_classes: usize,
    #[config(default = 128)]
    pub hidden_size: usize,
    #[config(default = 0.5)]
    pub dropout: f64,
}

impl ModelConfig {
    /// Returns the model with freshly initialized parameters.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        Model {
            conv1: ConvBlock::new([1, 64], device),
            conv2: ConvBlock::new([64, 128], device),
            conv3: ConvBlock::new([128, 256], device),
            pool: MaxPool2dConfig::new([2, 2]).with_strides([2, 2]).init(),
            dropout: DropoutConfig::new(self.dropout).init(),
            fc1: LinearConfig::new(FEATURES_AFTER_POOLING, self.hidden_size).init(device),
            fc2: LinearConfig::new(self.hidden_size, self.num_classes).init(device),
            activation: Relu::new(),
        }
    }
}

impl<B: Backend> Model<B> {
    /// Classifies a batch of images.
    ///
    /// # Shapes
    ///   - Input [batch_size, height, width]
    ///   - Output [batch_size, num_classes]
    pub fn forward(&self, images: Tensor<B, 3>) -> Tensor<B, 2> {
        let [batch_size, height, width] = images.dims();

        let x = images.reshape([batch_size, 1, height, width]);

        let x = self.dropout.forward(self.pool.forward(self.conv1.forward(x)));
        let x = self.dropout.forward(self.pool.forward(self.conv2.forward(x)));
        let x = self.dropout.forward(self.pool.forward(self.conv3.forward(x)));

        let x = x.reshape([batch_size, FEATURES_AFTER_POOLING]);

        let x = self.dropout.forward(self.activation.forward(self.fc1.forward(x)));
        self.fc2.forward(x)
    }
}
