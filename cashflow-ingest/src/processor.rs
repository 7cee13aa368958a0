//! Source selection: a string-keyed lookup onto one converter per export format.

use cashflow_core::{Error, Frame, Result};
use std::fmt;
use std::str::FromStr;

use crate::parsers::{intesa, revolut, vivid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Processor {
    Revolut,
    Intesa,
    Vivid,
}

impl Processor {
    pub const ALL: [Processor; 3] = [Processor::Revolut, Processor::Intesa, Processor::Vivid];

    pub fn name(&self) -> &'static str {
        match self {
            Processor::Revolut => "revolut",
            Processor::Intesa => "intesa",
            Processor::Vivid => "vivid",
        }
    }

    /// Map a raw source frame onto {Description, Date, Amount, [Category]}.
    pub fn convert(&self, frame: Frame) -> Result<Frame> {
        match self {
            Processor::Revolut => revolut::convert(frame),
            Processor::Intesa => intesa::convert(frame),
            Processor::Vivid => vivid::convert(frame),
        }
    }
}

impl FromStr for Processor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Processor::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| Error::InvalidProcessor(s.to_string()))
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("revolut".parse::<Processor>().unwrap(), Processor::Revolut);
        assert_eq!(" Intesa ".parse::<Processor>().unwrap(), Processor::Intesa);
        assert_eq!("VIVID".parse::<Processor>().unwrap(), Processor::Vivid);
    }

    #[test]
    fn test_unknown_name_is_invalid_processor() {
        let err = "n26".parse::<Processor>().unwrap_err();
        assert!(matches!(err, Error::InvalidProcessor(ref name) if name == "n26"));
    }

    #[test]
    fn test_display_round_trips() {
        for p in Processor::ALL {
            assert_eq!(p.to_string().parse::<Processor>().unwrap(), p);
        }
    }
}
