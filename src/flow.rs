use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::FLOW_TERMINAL;
use crate::prelude::*;

/// Which values the picker asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerType {
    #[default]
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "datetime")]
    DateTime,
}

impl PickerType {
    /// Ordered stages the picker walks through.
    pub fn stages(self) -> Vec<Stage> {
        match self {
            Self::DateTime => vec![Stage::Date, Stage::Time],
            Self::Time => vec![Stage::Time],
            Self::Date => vec![Stage::Date],
        }
    }
}

/// Unknown names fall back to `date`, so parsing never fails.
impl FromStr for PickerType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            _ => Self::Date,
        })
    }
}

impl<'de> Deserialize<'de> for PickerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(picker_type) = s.parse::<Self>();
        Ok(picker_type)
    }
}

/// A named stage of the picker UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
}

/// The step-sequence controller driving the stages.
///
/// Only construction is specified here; moving between stages is the
/// controller's business.
pub trait StageController: Sized {
    fn with_stages(stages: Vec<Stage>, terminal: &'static str) -> Self;
}

/// A stage sequence and its terminal marker, for hosts that drive the
/// stages themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FlowPlan {
    pub stages:   Vec<Stage>,
    pub terminal: &'static str,
}

impl StageController for FlowPlan {
    fn with_stages(stages: Vec<Stage>, terminal: &'static str) -> Self {
        Self { stages, terminal }
    }
}

/// Builds the controller for a picker type, terminated by `"end"`.
pub fn build_flow<C: StageController>(picker_type: PickerType) -> C {
    build_flow_from_stages(picker_type.stages())
}

pub fn build_flow_from_stages<C: StageController>(stages: Vec<Stage>) -> C {
    C::with_stages(stages, FLOW_TERMINAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_mapping() {
        struct TestCase {
            input:    &'static str,
            expected: &'static [Stage],
        }

        let cases = [
            TestCase {
                input:    "datetime",
                expected: &[Stage::Date, Stage::Time],
            },
            TestCase {
                input:    "time",
                expected: &[Stage::Time],
            },
            TestCase {
                input:    "date",
                expected: &[Stage::Date],
            },
            TestCase {
                input:    "month",
                expected: &[Stage::Date],
            },
            TestCase {
                input:    "",
                expected: &[Stage::Date],
            },
        ];

        for case in &cases {
            let Ok(picker_type) = case.input.parse::<PickerType>();
            let plan: FlowPlan = build_flow(picker_type);
            assert_eq!(plan.stages, case.expected, "picker type {:?}", case.input);
            assert_eq!(plan.terminal, "end");
        }
    }

    #[test]
    fn test_build_flow_from_stages() {
        let plan: FlowPlan = build_flow_from_stages(vec![Stage::Time, Stage::Date]);
        assert_eq!(plan.stages, [Stage::Time, Stage::Date]);
        assert_eq!(plan.terminal, FLOW_TERMINAL);
    }

    #[test]
    fn test_picker_type_serde() {
        let parsed: PickerType = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(parsed, PickerType::DateTime);
        let unknown: PickerType = serde_json::from_str("\"calendar\"").unwrap();
        assert_eq!(unknown, PickerType::Date);
        assert_eq!(serde_json::to_string(&PickerType::Time).unwrap(), "\"time\"");
        assert_eq!(PickerType::default(), PickerType::Date);
        assert_eq!(PickerType::DateTime.to_string(), "datetime");
    }
}
