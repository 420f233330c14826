use std::fmt;
use std::str::FromStr;

use crate::error::ProcessError;

/// Token that introduces a split-preview percentage.
pub const SPLIT_TOKEN: &str = "split";

/// Extra arguments taken by a split preview: the token and the percentage.
pub const SPLIT_ARGS: usize = 2;

/// Operation command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    RedComponent,
    GreenComponent,
    BlueComponent,
    ValueComponent,
    LumaComponent,
    IntensityComponent,
    Sepia,
    Blur,
    Sharpen,
    ColorCorrect,
    Brighten,
    HorizontalFlip,
    VerticalFlip,
    Histogram,
    RgbSplit,
    RgbCombine,
    LevelsAdjust,
    Compress,
    Convolve,
}

impl Command {
    pub const ALL: [Command; 19] = [
        Command::RedComponent,
        Command::GreenComponent,
        Command::BlueComponent,
        Command::ValueComponent,
        Command::LumaComponent,
        Command::IntensityComponent,
        Command::Sepia,
        Command::Blur,
        Command::Sharpen,
        Command::ColorCorrect,
        Command::Brighten,
        Command::HorizontalFlip,
        Command::VerticalFlip,
        Command::Histogram,
        Command::RgbSplit,
        Command::RgbCombine,
        Command::LevelsAdjust,
        Command::Compress,
        Command::Convolve,
    ];

    /// The command word as typed by a user.
    pub fn word(self) -> &'static str {
        match self {
            Command::RedComponent => "red-component",
            Command::GreenComponent => "green-component",
            Command::BlueComponent => "blue-component",
            Command::ValueComponent => "value-component",
            Command::LumaComponent => "luma-component",
            Command::IntensityComponent => "intensity-component",
            Command::Sepia => "sepia",
            Command::Blur => "blur",
            Command::Sharpen => "sharpen",
            Command::ColorCorrect => "color-correct",
            Command::Brighten => "brighten",
            Command::HorizontalFlip => "horizontal-flip",
            Command::VerticalFlip => "vertical-flip",
            Command::Histogram => "histogram",
            Command::RgbSplit => "rgb-split",
            Command::RgbCombine => "rgb-combine",
            Command::LevelsAdjust => "levels-adjust",
            Command::Compress => "compress",
            Command::Convolve => "convolve",
        }
    }

    /// Number of positional arguments without a split preview.
    pub fn required_args(self) -> usize {
        match self {
            Command::Brighten | Command::Compress | Command::Convolve => 3,
            Command::RgbSplit | Command::RgbCombine => 4,
            Command::LevelsAdjust => 5,
            _ => 2,
        }
    }

    /// Whether the command accepts a trailing `split <percentage>` pair.
    pub fn allows_split(self) -> bool {
        !matches!(
            self,
            Command::HorizontalFlip
                | Command::VerticalFlip
                | Command::Histogram
                | Command::RgbSplit
                | Command::RgbCombine
                | Command::Compress
        )
    }

    /// Check an argument count. Returns whether a split pair is present.
    pub fn check_arg_count(self, count: usize) -> Result<bool, ProcessError> {
        let required = self.required_args();
        if count == required {
            Ok(false)
        } else if self.allows_split() && count == required + SPLIT_ARGS {
            Ok(true)
        } else {
            Err(ProcessError::InvalidArgCount {
                command: self.word().to_string(),
                required,
            })
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

impl FromStr for Command {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.word() == s)
            .ok_or_else(|| ProcessError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.word().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_unknown_word() {
        let err = "emboss".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: emboss");
    }

    #[test]
    fn test_required_args_table() {
        assert_eq!(Command::Sepia.required_args(), 2);
        assert_eq!(Command::Brighten.required_args(), 3);
        assert_eq!(Command::RgbCombine.required_args(), 4);
        assert_eq!(Command::LevelsAdjust.required_args(), 5);
        assert_eq!(Command::Compress.required_args(), 3);
    }

    #[test]
    fn test_check_arg_count() {
        assert!(!Command::Blur.check_arg_count(2).unwrap());
        assert!(Command::Blur.check_arg_count(4).unwrap());
        assert!(Command::LevelsAdjust.check_arg_count(7).unwrap());
        assert!(Command::Blur.check_arg_count(3).is_err());
        // flips never take a split pair
        assert!(Command::HorizontalFlip.check_arg_count(4).is_err());
        assert!(Command::Compress.check_arg_count(5).is_err());
    }

    #[test]
    fn test_count_error_message() {
        let err = Command::LevelsAdjust.check_arg_count(6).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid number of Arguments for command: levels-adjust required Args: 5"
        );
    }
}
