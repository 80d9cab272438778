use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentRequest {
    pub email: String,
    pub phone_number: String,
    /// Whole currency units
    pub amount: u64,
    pub callback_url: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentResponse {
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: PaymentData,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaymentData {
    pub authorization_url: String,
    #[serde(default)]
    pub reference: Option<String>,
}
