use serde::Serialize;

use crate::shared::constants::{FLOW_MIN_ANCHORS, FLOW_POINTS};

pub const ORDER_FOLLOWED: &str = "Order followed";
pub const ORDER_NOT_FOLLOWED: &str = "Order not followed";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FlowResult {
    pub points: u32,
    pub detail: String,
}

/// First-occurrence byte offsets of the anchors that appear in the text,
/// kept in anchor order.
pub fn anchor_positions(lowered_text: &str, anchors: &[&str]) -> Vec<usize> {
    anchors
        .iter()
        .filter_map(|anchor| lowered_text.find(anchor))
        .collect()
}

/// Flow is followed when at least [`FLOW_MIN_ANCHORS`] anchors are present
/// and they appear in the text in the same relative order as `anchors`.
pub fn is_order_followed(lowered_text: &str, anchors: &[&str]) -> bool {
    let positions = anchor_positions(lowered_text, anchors);
    positions.len() >= FLOW_MIN_ANCHORS && positions.windows(2).all(|w| w[0] <= w[1])
}

pub fn score_flow(lowered_text: &str, anchors: &[&str]) -> FlowResult {
    if is_order_followed(lowered_text, anchors) {
        FlowResult {
            points: FLOW_POINTS,
            detail: ORDER_FOLLOWED.to_string(),
        }
    } else {
        FlowResult {
            points: 0,
            detail: ORDER_NOT_FOLLOWED.to_string(),
        }
    }
}
