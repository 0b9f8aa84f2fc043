use burn::{
    data::{dataloader::batcher::Batcher, dataset::vision::MnistItem},
    prelude::*,
};

/// Pixel statistics of the training transform.
///
/// Raw pixels are scaled to [0, 1] and mapped to [-1, 1] with mean 0.5 and
/// std 0.5. The serving path reuses the exact same transform, so anything
/// the batcher does here must stay in sync with [`crate::inference`].
pub const MEAN: f32 = 0.5;
pub const STD: f32 = 0.5;

/// Maps raw pixel values in [0, 255] to the range the network trains on.
pub fn normalize<B: Backend, const D: usize>(pixels: Tensor<B, D>) -> Tensor<B, D> {
    ((pixels / 255) - MEAN) / STD
}

#[derive(Clone, Default)]
pub struct MnistBatcher;

#[derive(Clone, Debug)]
pub struct MnistBatch<B: Backend> {
    pub images: Tensor<B, 3>,
    pub targets: Tensor<B, 1, Int>,
}

impl<B: Backend> Batcher<B, MnistItem, MnistBatch<B>> for MnistBatcher {
    fn batch(&self, items: Vec<MnistItem>, device: &B::Device) -> MnistBatch<B> {
        let images = items
            .iter()
            .map(|item| TensorData::from(item.image).convert::<B::FloatElem>())
            .map(|data| Tensor::<B, 2>::from_data(data, device))
            .map(|tensor| tensor.reshape([1, 28, 28]))
            .map(|tensor| normalize(tensor))
            .collect();

        let targets = items
            .iter()
            .map(|item| {
                Tensor::<B, 1, Int>::from_data(
                    [(item.label as i64).elem::<B::IntElem>()],
                    device,
                )
            })
            .collect();

        let images = Tensor::cat(images, 0);
        let targets = Tensor::cat(targets, 0);

        MnistBatch { images, targets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    fn item(label: u8) -> MnistItem {
        let mut image = [[0f32; 28]; 28];
        image[14][14] = 255.0;
        MnistItem { image, label }
    }

    #[test]
    fn batch_stacks_items_and_keeps_labels() {
        let device = Default::default();
        let batcher = MnistBatcher;

        let batch: MnistBatch<NdArray> = batcher.batch(vec![item(7), item(3)], &device);

        assert_eq!(batch.images.dims(), [2, 28, 28]);
        assert_eq!(batch.targets.dims(), [2]);

        let targets = batch.targets.into_data();
        assert_eq!(targets.as_slice::<i64>().unwrap(), &[7, 3]);
    }

    #[test]
    fn batch_normalizes_pixels_to_unit_range() {
        let device = Default::default();
        let batcher = MnistBatcher;

        let batch: MnistBatch<NdArray> = batcher.batch(vec![item(0)], &device);
        let data = batch.images.into_data();
        let values = data.as_slice::<f32>().unwrap();

        // Background maps to -1, a full-intensity stroke to +1.
        assert_eq!(values[0], -1.0);
        assert_eq!(values[14 * 28 + 14], 1.0);
        assert!(values.iter().all(|v| (-1.0..=1.0).contains(v)));
    }
}
