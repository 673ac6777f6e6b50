//! Wire types for the decision response
//!
//! The decision source answers with a function-call style JSON object:
//!
//! ```json
//! {"action": {"type": "left", "parameters": {"step": 2}}, "reasoning": "..."}
//! ```
//!
//! Action types are `rotate_right`, `left`, `right` and `down`. Anything
//! not matching the contract (unknown type, degrees outside {90, 180, 270},
//! steps outside 1..=20, malformed JSON) is a decision failure; the turn
//! controller converts those into its auto-drop fallback.

use serde::{Deserialize, Serialize};

use crate::types::{Action, MAX_MOVE_STEPS};

/// Top-level decision response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub action: ActionCall,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// The function call itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCall {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameters: ActionParameters,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deg: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

/// Decision-source failure taxonomy
#[derive(thiserror::Error, Debug)]
pub enum DecisionError {
    #[error("decision response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown action type `{0}`")]
    UnknownAction(String),
    #[error("invalid rotation degrees {0} (expected 90, 180 or 270)")]
    InvalidDegrees(u16),
    #[error("invalid step count {0} (expected 1..={MAX_MOVE_STEPS})")]
    InvalidSteps(u32),
    #[error("decision source timed out")]
    Timeout,
    #[error("decision source failed: {0}")]
    Source(String),
}

impl ActionCall {
    /// Validate the call against the action contract
    pub fn to_action(&self) -> Result<Action, DecisionError> {
        match self.kind.as_str() {
            "rotate_right" => {
                let degrees = self.parameters.deg.unwrap_or(90);
                if !matches!(degrees, 90 | 180 | 270) {
                    return Err(DecisionError::InvalidDegrees(degrees));
                }
                Ok(Action::Rotate { degrees })
            }
            "left" | "right" => {
                let steps = self.parameters.step.unwrap_or(1);
                if steps == 0 || steps > MAX_MOVE_STEPS {
                    return Err(DecisionError::InvalidSteps(steps));
                }
                if self.kind == "left" {
                    Ok(Action::MoveLeft { steps })
                } else {
                    Ok(Action::MoveRight { steps })
                }
            }
            "down" => Ok(Action::Drop),
            other => Err(DecisionError::UnknownAction(other.to_string())),
        }
    }
}

/// Parse one decision response line into a validated action
pub fn parse_decision(line: &str) -> Result<Action, DecisionError> {
    let response: DecisionResponse = serde_json::from_str(line)?;
    response.action.to_action()
}
