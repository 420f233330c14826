use pixelworks_core::{Channel, Histogram};
use serde::Serialize;

/// Channel frequencies in the shape external chart renderers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramReport {
    pub red: Vec<u64>,
    pub green: Vec<u64>,
    pub blue: Vec<u64>,
    pub peaks: ChannelPeaks,
}

/// Peak value of each channel inside the peak window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelPeaks {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

impl HistogramReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Histogram> for HistogramReport {
    fn from(histogram: &Histogram) -> Self {
        Self {
            red: histogram.red().to_vec(),
            green: histogram.green().to_vec(),
            blue: histogram.blue().to_vec(),
            peaks: ChannelPeaks {
                red: histogram.peak(Channel::Red),
                green: histogram.peak(Channel::Green),
                blue: histogram.peak(Channel::Blue),
            },
        }
    }
}
