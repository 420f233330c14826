use pixelworks_core::{Channel, CompressError, LevelsCurve, SplitPreview};

use crate::error::ProcessError;

use super::command::{Command, SPLIT_TOKEN};

/// One fully validated operation.
///
/// Numbers, ranges and levels are checked when the request is built, so
/// executing an `Operation` can only fail on store lookups or image shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Keep one channel and zero the others
    Component {
        channel: Channel,
        src: String,
        dest: String,
    },
    Value { src: String, dest: String },
    Luma { src: String, dest: String },
    Intensity { src: String, dest: String },
    Sepia { src: String, dest: String },
    Blur { src: String, dest: String },
    Sharpen { src: String, dest: String },
    ColorCorrect { src: String, dest: String },
    Brighten {
        increment: i32,
        src: String,
        dest: String,
    },
    HorizontalFlip { src: String, dest: String },
    VerticalFlip { src: String, dest: String },
    /// Render the histogram chart of `src` and store it as `dest`
    Histogram { src: String, dest: String },
    RgbSplit {
        src: String,
        red: String,
        green: String,
        blue: String,
    },
    RgbCombine {
        dest: String,
        red: String,
        green: String,
        blue: String,
    },
    LevelsAdjust {
        curve: LevelsCurve,
        src: String,
        dest: String,
    },
    Compress {
        percentage: f64,
        src: String,
        dest: String,
    },
    /// Filter with a kernel resolved by name from the engine config
    Convolve {
        kernel: String,
        src: String,
        dest: String,
    },
}

impl Operation {
    pub fn command(&self) -> Command {
        match self {
            Operation::Component { channel, .. } => match channel {
                Channel::Red => Command::RedComponent,
                Channel::Green => Command::GreenComponent,
                Channel::Blue => Command::BlueComponent,
            },
            Operation::Value { .. } => Command::ValueComponent,
            Operation::Luma { .. } => Command::LumaComponent,
            Operation::Intensity { .. } => Command::IntensityComponent,
            Operation::Sepia { .. } => Command::Sepia,
            Operation::Blur { .. } => Command::Blur,
            Operation::Sharpen { .. } => Command::Sharpen,
            Operation::ColorCorrect { .. } => Command::ColorCorrect,
            Operation::Brighten { .. } => Command::Brighten,
            Operation::HorizontalFlip { .. } => Command::HorizontalFlip,
            Operation::VerticalFlip { .. } => Command::VerticalFlip,
            Operation::Histogram { .. } => Command::Histogram,
            Operation::RgbSplit { .. } => Command::RgbSplit,
            Operation::RgbCombine { .. } => Command::RgbCombine,
            Operation::LevelsAdjust { .. } => Command::LevelsAdjust,
            Operation::Compress { .. } => Command::Compress,
            Operation::Convolve { .. } => Command::Convolve,
        }
    }

    /// Names of the images this operation reads.
    pub fn sources(&self) -> Vec<&str> {
        match self {
            Operation::RgbCombine {
                red, green, blue, ..
            } => vec![red.as_str(), green.as_str(), blue.as_str()],
            Operation::Component { src, .. }
            | Operation::Value { src, .. }
            | Operation::Luma { src, .. }
            | Operation::Intensity { src, .. }
            | Operation::Sepia { src, .. }
            | Operation::Blur { src, .. }
            | Operation::Sharpen { src, .. }
            | Operation::ColorCorrect { src, .. }
            | Operation::Brighten { src, .. }
            | Operation::HorizontalFlip { src, .. }
            | Operation::VerticalFlip { src, .. }
            | Operation::Histogram { src, .. }
            | Operation::RgbSplit { src, .. }
            | Operation::LevelsAdjust { src, .. }
            | Operation::Compress { src, .. }
            | Operation::Convolve { src, .. } => vec![src.as_str()],
        }
    }

    /// Names of the images this operation writes.
    pub fn destinations(&self) -> Vec<&str> {
        match self {
            Operation::RgbSplit {
                red, green, blue, ..
            } => vec![red.as_str(), green.as_str(), blue.as_str()],
            Operation::Component { dest, .. }
            | Operation::Value { dest, .. }
            | Operation::Luma { dest, .. }
            | Operation::Intensity { dest, .. }
            | Operation::Sepia { dest, .. }
            | Operation::Blur { dest, .. }
            | Operation::Sharpen { dest, .. }
            | Operation::ColorCorrect { dest, .. }
            | Operation::Brighten { dest, .. }
            | Operation::HorizontalFlip { dest, .. }
            | Operation::VerticalFlip { dest, .. }
            | Operation::Histogram { dest, .. }
            | Operation::RgbCombine { dest, .. }
            | Operation::LevelsAdjust { dest, .. }
            | Operation::Compress { dest, .. }
            | Operation::Convolve { dest, .. } => vec![dest.as_str()],
        }
    }
}

/// An operation plus an optional split-preview modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub op: Operation,
    pub preview: Option<SplitPreview>,
}

impl OperationRequest {
    pub fn new(op: Operation) -> Self {
        Self { op, preview: None }
    }

    /// Attach a split preview.
    ///
    /// Commands that do not support a preview reject it when executed.
    pub fn with_preview(mut self, preview: SplitPreview) -> Self {
        self.preview = Some(preview);
        self
    }

    /// Validate a command word and its positional arguments.
    ///
    /// The argument count is checked first, then the optional
    /// `split <percentage>` pair, then every numeric field.
    pub fn parse(command: &str, args: &[&str]) -> Result<Self, ProcessError> {
        let command: Command = command.parse()?;
        let has_split = command.check_arg_count(args.len())?;
        let required = command.required_args();

        let preview = if has_split {
            Some(parse_split(command, args[required], args[required + 1])?)
        } else {
            None
        };

        let a = &args[..required];
        let name = |i: usize| a[i].to_string();
        let op = match command {
            Command::RedComponent => component(Channel::Red, a),
            Command::GreenComponent => component(Channel::Green, a),
            Command::BlueComponent => component(Channel::Blue, a),
            Command::ValueComponent => Operation::Value {
                src: name(0),
                dest: name(1),
            },
            Command::LumaComponent => Operation::Luma {
                src: name(0),
                dest: name(1),
            },
            Command::IntensityComponent => Operation::Intensity {
                src: name(0),
                dest: name(1),
            },
            Command::Sepia => Operation::Sepia {
                src: name(0),
                dest: name(1),
            },
            Command::Blur => Operation::Blur {
                src: name(0),
                dest: name(1),
            },
            Command::Sharpen => Operation::Sharpen {
                src: name(0),
                dest: name(1),
            },
            Command::ColorCorrect => Operation::ColorCorrect {
                src: name(0),
                dest: name(1),
            },
            Command::Brighten => Operation::Brighten {
                increment: parse_int("increment", a[0])?,
                src: name(1),
                dest: name(2),
            },
            Command::HorizontalFlip => Operation::HorizontalFlip {
                src: name(0),
                dest: name(1),
            },
            Command::VerticalFlip => Operation::VerticalFlip {
                src: name(0),
                dest: name(1),
            },
            Command::Histogram => Operation::Histogram {
                src: name(0),
                dest: name(1),
            },
            Command::RgbSplit => Operation::RgbSplit {
                src: name(0),
                red: name(1),
                green: name(2),
                blue: name(3),
            },
            Command::RgbCombine => Operation::RgbCombine {
                dest: name(0),
                red: name(1),
                green: name(2),
                blue: name(3),
            },
            Command::LevelsAdjust => {
                let black = parse_int("black level", a[0])?;
                let mid = parse_int("mid level", a[1])?;
                let white = parse_int("white level", a[2])?;
                let curve = LevelsCurve::new(black, mid, white)
                    .map_err(|e| ProcessError::OutOfRange(e.to_string()))?;
                Operation::LevelsAdjust {
                    curve,
                    src: name(3),
                    dest: name(4),
                }
            }
            Command::Compress => {
                let percentage = parse_float("compression percentage", a[0])?;
                if !(0.0..=100.0).contains(&percentage) {
                    return Err(ProcessError::OutOfRange(
                        CompressError::PercentOutOfRange(percentage).to_string(),
                    ));
                }
                Operation::Compress {
                    percentage,
                    src: name(1),
                    dest: name(2),
                }
            }
            Command::Convolve => Operation::Convolve {
                kernel: name(0),
                src: name(1),
                dest: name(2),
            },
        };

        Ok(Self { op, preview })
    }
}

fn component(channel: Channel, args: &[&str]) -> Operation {
    Operation::Component {
        channel,
        src: args[0].to_string(),
        dest: args[1].to_string(),
    }
}

fn parse_split(command: Command, token: &str, percent: &str) -> Result<SplitPreview, ProcessError> {
    if token != SPLIT_TOKEN {
        return Err(ProcessError::InvalidSplit(command.word().to_string()));
    }
    let percent = parse_float("width percentage", percent)?;
    SplitPreview::new(percent).map_err(|e| ProcessError::OutOfRange(e.to_string()))
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, ProcessError> {
    value.parse().map_err(|_| ProcessError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ProcessError> {
    value.parse().map_err(|_| ProcessError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
