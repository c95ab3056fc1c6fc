use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub input: String,
    pub prediction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SquareRequest {
    #[serde(default = "default_numbers")]
    pub numbers: Vec<i64>,
}

impl Default for SquareRequest {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
        }
    }
}

fn default_numbers() -> Vec<i64> {
    vec![1, 2, 3]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareResponse {
    pub original: Vec<i64>,
    pub squared: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_text_is_optional() {
        let req: PredictRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, None);

        let req: PredictRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(req.text, None);
    }

    #[test]
    fn square_numbers_default_to_one_two_three() {
        let req: SquareRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.numbers, vec![1, 2, 3]);
    }

    #[test]
    fn explicit_empty_list_is_kept() {
        let req: SquareRequest = serde_json::from_str(r#"{"numbers": []}"#).unwrap();
        assert!(req.numbers.is_empty());
    }

    #[test]
    fn non_integer_numbers_are_rejected() {
        assert!(serde_json::from_str::<SquareRequest>(r#"{"numbers": [1.5]}"#).is_err());
        assert!(serde_json::from_str::<SquareRequest>(r#"{"numbers": "1,2"}"#).is_err());
    }
}
