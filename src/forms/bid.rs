use log::info;
use validator::Validate;

use super::not_blank;
use crate::error::FormError;

pub const BID_ACK: &str =
    "Your bid has been submitted successfully! You will be notified if the client accepts your bid.";

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BidForm {
    #[validate(custom(function = "not_blank", message = "Enter your bid amount"))]
    pub amount: String,
    #[validate(custom(function = "not_blank", message = "Enter a timeframe"))]
    pub timeframe: String,
    #[validate(custom(function = "not_blank", message = "Describe your proposal"))]
    pub proposal: String,
}

/// What the bidder sent. The task's own bid list is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BidReceipt {
    pub task_id: String,
    pub amount: String,
    pub timeframe: String,
    pub proposal: String,
}

impl BidForm {
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

pub fn submit_bid(task_id: &str, form: &BidForm) -> Result<BidReceipt, FormError> {
    form.validate()?;
    let receipt = BidReceipt {
        task_id: task_id.to_string(),
        amount: form.amount.trim().to_string(),
        timeframe: form.timeframe.trim().to_string(),
        proposal: form.proposal.trim().to_string(),
    };
    info!(
        "[Bid] Submitted bid on task {}: amount={} timeframe={}",
        receipt.task_id, receipt.amount, receipt.timeframe
    );
    Ok(receipt)
}
