use std::sync::Arc;

use pixelworks_core::{
    color_correct, compress, convolve, rgb_combine, rgb_split, Histogram, Kernel, PixelTransform,
    Raster,
};

use crate::error::ProcessError;
use crate::models::{EngineConfig, Operation, OperationRequest};
use crate::services::{ImageStore, PixelStream};

/// One editing session: an image store plus the engine configuration.
///
/// Every operation computes all of its results before touching the store,
/// so a failed operation leaves every stored image as it was.
pub struct ImageProcessor {
    config: EngineConfig,
    store: ImageStore,
}

impl ImageProcessor {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            store: ImageStore::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Validate a decoded stream and store it under `name`.
    pub fn load(&mut self, name: &str, stream: &PixelStream) -> Result<(), ProcessError> {
        let raster = stream.to_raster()?;
        tracing::info!(
            name,
            width = raster.width(),
            height = raster.height(),
            "Loaded image"
        );
        self.store.put(name, Arc::new(raster));
        Ok(())
    }

    /// Store an in-memory raster under `name`.
    pub fn insert(&mut self, name: &str, raster: Raster) {
        self.store.put(name, Arc::new(raster));
    }

    /// Stream a stored image for an external encoder.
    pub fn save(&self, name: &str) -> Result<PixelStream, ProcessError> {
        let raster = self.store.get(name)?;
        tracing::info!(
            name,
            width = raster.width(),
            height = raster.height(),
            "Saved image"
        );
        Ok(PixelStream::from_raster(&raster))
    }

    /// Channel frequencies of a stored image.
    pub fn histogram(&self, name: &str) -> Result<Histogram, ProcessError> {
        Ok(Histogram::of(&*self.store.get(name)?))
    }

    /// Parse and execute one command line.
    pub fn run(&mut self, command: &str, args: &[&str]) -> Result<(), ProcessError> {
        let request = OperationRequest::parse(command, args)?;
        self.execute(&request)
    }

    /// Execute a validated request.
    pub fn execute(&mut self, request: &OperationRequest) -> Result<(), ProcessError> {
        let op = &request.op;
        let command = op.command();
        if request.preview.is_some() && !command.allows_split() {
            return Err(ProcessError::InvalidSplit(command.word().to_string()));
        }

        let mut outputs = self.compute(op)?;
        if let Some(preview) = request.preview {
            let source = op
                .sources()
                .first()
                .map(|name| self.store.get(name))
                .ok_or_else(|| ProcessError::InvalidSplit(command.word().to_string()))??;
            for (_, raster) in outputs.iter_mut() {
                *raster = preview.composite(&source, raster)?;
            }
        }

        let (width, height) = outputs
            .first()
            .map_or((0, 0), |(_, raster)| (raster.width(), raster.height()));
        tracing::debug!(
            command = %command,
            src = ?op.sources(),
            dest = ?op.destinations(),
            width,
            height,
            preview = ?request.preview.map(|p| p.percent()),
            "Executed operation"
        );

        for (name, raster) in outputs {
            self.store.put(name, Arc::new(raster));
        }
        Ok(())
    }

    fn pointwise(
        &self,
        src: &str,
        dest: &str,
        transform: PixelTransform,
    ) -> Result<Outputs, ProcessError> {
        single(dest, transform.apply_to(&*self.store.get(src)?))
    }

    fn compute(&self, op: &Operation) -> Result<Outputs, ProcessError> {
        match op {
            Operation::Component { channel, src, dest } => {
                self.pointwise(src, dest, PixelTransform::Component(*channel))
            }
            Operation::Value { src, dest } => self.pointwise(src, dest, PixelTransform::Value),
            Operation::Luma { src, dest } => self.pointwise(src, dest, PixelTransform::Luma),
            Operation::Intensity { src, dest } => {
                self.pointwise(src, dest, PixelTransform::Intensity)
            }
            Operation::Sepia { src, dest } => self.pointwise(src, dest, PixelTransform::Sepia),
            Operation::Brighten {
                increment,
                src,
                dest,
            } => self.pointwise(src, dest, PixelTransform::Brighten(*increment)),
            Operation::Blur { src, dest } => {
                single(dest, convolve(&*self.store.get(src)?, &Kernel::blur()))
            }
            Operation::Sharpen { src, dest } => {
                single(dest, convolve(&*self.store.get(src)?, &Kernel::sharpen()))
            }
            Operation::Convolve { kernel, src, dest } => {
                let kernel = self
                    .config
                    .kernel(kernel)
                    .ok_or_else(|| ProcessError::UnknownKernel(kernel.clone()))?;
                single(dest, convolve(&*self.store.get(src)?, &kernel))
            }
            Operation::ColorCorrect { src, dest } => {
                single(dest, color_correct(&*self.store.get(src)?))
            }
            Operation::LevelsAdjust { curve, src, dest } => {
                single(dest, curve.apply_to(&*self.store.get(src)?))
            }
            Operation::HorizontalFlip { src, dest } => {
                single(dest, self.store.get(src)?.horizontal_flip())
            }
            Operation::VerticalFlip { src, dest } => {
                single(dest, self.store.get(src)?.vertical_flip())
            }
            Operation::Histogram { src, dest } => {
                let histogram = Histogram::of(&*self.store.get(src)?);
                single(dest, self.config.histogram.chart().render(&histogram)?)
            }
            Operation::Compress {
                percentage,
                src,
                dest,
            } => single(dest, compress(&*self.store.get(src)?, *percentage)?),
            Operation::RgbSplit {
                src,
                red,
                green,
                blue,
            } => {
                let [r, g, b] = rgb_split(&*self.store.get(src)?);
                Ok(vec![
                    (red.clone(), r),
                    (green.clone(), g),
                    (blue.clone(), b),
                ])
            }
            Operation::RgbCombine {
                dest,
                red,
                green,
                blue,
            } => {
                let (r, g, b) = (
                    self.store.get(red)?,
                    self.store.get(green)?,
                    self.store.get(blue)?,
                );
                single(dest, rgb_combine(&r, &g, &b)?)
            }
        }
    }
}

/// Named results of one operation, written to the store together.
type Outputs = Vec<(String, Raster)>;

fn single(dest: &str, raster: Raster) -> Result<Outputs, ProcessError> {
    Ok(vec![(dest.to_string(), raster)])
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelworks_core::{Pixel, SplitPreview};
    use pretty_assertions::assert_eq;

    fn processor_with(name: &str, raster: Raster) -> ImageProcessor {
        let mut processor = ImageProcessor::default();
        processor.insert(name, raster);
        processor
    }

    fn gradient() -> Raster {
        Raster::from_fn(2, 4, |i, j| Pixel::new((j * 60) as i32, (i * 100) as i32, 33)).unwrap()
    }

    #[test]
    fn test_run_component() {
        let mut processor = processor_with("img", gradient());
        processor.run("red-component", &["img", "red"]).unwrap();

        let red = processor.store().get("red").unwrap();
        assert_eq!(red.pixel(1, 3), Pixel::new(180, 0, 0));
    }

    #[test]
    fn test_single_source_commands_read_stored_image() {
        let mut processor = processor_with("img", gradient());
        let runs: [(&str, &[&str]); 11] = [
            ("sepia", &["img", "sepia"]),
            ("blur", &["img", "blur"]),
            ("sharpen", &["img", "sharpen"]),
            ("convolve", &["sharpen", "img", "convolved"]),
            ("color-correct", &["img", "corrected"]),
            ("levels-adjust", &["20", "128", "230", "img", "levels"]),
            ("horizontal-flip", &["img", "hflip"]),
            ("vertical-flip", &["img", "vflip"]),
            ("histogram", &["img", "chart"]),
            ("compress", &["50", "img", "compressed"]),
            ("rgb-split", &["img", "r", "g", "b"]),
        ];
        for (command, args) in runs {
            processor.run(command, args).unwrap();
        }

        let store = processor.store();
        assert_eq!(store.get("vflip").unwrap().pixel(0, 0), gradient().pixel(1, 0));
        assert_eq!(store.get("hflip").unwrap().pixel(0, 0), gradient().pixel(0, 3));
        assert_eq!(store.get("compressed").unwrap().dimensions(), (2, 4));
        assert_eq!(store.get("g").unwrap().pixel(1, 0), Pixel::new(0, 100, 0));
        assert_eq!(processor.histogram("img").unwrap().blue()[33], 8);
    }

    #[test]
    fn test_missing_source_leaves_store_unchanged() {
        let mut processor = processor_with("img", gradient());
        let err = processor.run("sepia", &["nope", "out"]).unwrap_err();

        assert_eq!(err.to_string(), "Image Not Found: nope");
        assert_eq!(processor.store().names(), vec!["img"]);
    }

    #[test]
    fn test_split_preview_composites_with_source() {
        let mut processor = processor_with("img", gradient());
        processor
            .run("brighten", &["100", "img", "half", "split", "50"])
            .unwrap();

        let half = processor.store().get("half").unwrap();
        assert_eq!(half.pixel(0, 0), Pixel::new(100, 100, 133));
        assert_eq!(half.pixel(0, 1), Pixel::new(160, 100, 133));
        assert_eq!(half.pixel(0, 2), Pixel::new(120, 0, 33));
    }

    #[test]
    fn test_preview_rejected_for_flip() {
        let mut processor = processor_with("img", gradient());
        let request = OperationRequest::new(Operation::HorizontalFlip {
            src: "img".to_string(),
            dest: "out".to_string(),
        })
        .with_preview(SplitPreview::new(50.0).unwrap());

        let err = processor.execute(&request).unwrap_err();
        assert!(matches!(err, ProcessError::InvalidSplit(_)));
        assert!(!processor.store().contains("out"));
    }

    #[test]
    fn test_rgb_combine_mismatch_is_error() {
        let mut processor = processor_with("a", gradient());
        processor.insert("b", Raster::filled(3, 3, Pixel::BLACK).unwrap());

        let err = processor.run("rgb-combine", &["out", "a", "a", "b"]).unwrap_err();
        assert!(err.to_string().contains("same dimension"));
        assert!(!processor.store().contains("out"));
    }

    #[test]
    fn test_unknown_kernel() {
        let mut processor = processor_with("img", gradient());
        let err = processor.run("convolve", &["edge", "img", "out"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown kernel: edge");
    }

    #[test]
    fn test_convolve_with_builtin_matches_blur() {
        let mut processor = processor_with("img", gradient());
        processor.run("convolve", &["blur", "img", "a"]).unwrap();
        processor.run("blur", &["img", "b"]).unwrap();
        assert_eq!(
            processor.store().get("a").unwrap(),
            processor.store().get("b").unwrap()
        );
    }

    #[test]
    fn test_histogram_command_stores_chart() {
        let mut processor = processor_with("img", gradient());
        processor.run("histogram", &["img", "chart"]).unwrap();
        assert_eq!(processor.store().get("chart").unwrap().dimensions(), (256, 256));
    }

    #[test]
    fn test_save_round_trip_through_stream() {
        let mut processor = processor_with("img", gradient());
        let stream = processor.save("img").unwrap();
        processor.load("copy", &stream).unwrap();
        assert_eq!(
            processor.store().get("copy").unwrap(),
            processor.store().get("img").unwrap()
        );
    }
}
