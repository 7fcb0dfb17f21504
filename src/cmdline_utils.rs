use std::str::FromStr;

use crate::field::RangePolicy;

impl FromStr for RangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strict" => Ok(Self::Strict),
            "Inclusive" => Ok(Self::Inclusive),
            _ => Err(format!("Invalid range policy: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text, // mle([x1, ..., xk]) = result
    Json, // one serialized report per line
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" => Ok(Self::Text),
            "Json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}")),
        }
    }
}
