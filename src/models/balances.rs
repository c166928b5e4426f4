use super::error::AppError;
use serde::Deserialize;

/// Balance history for one colectiva, as served by `/get_data`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub labels: Vec<String>,
    /// `None` where the stored balance is NULL
    pub saldo_contabilidad: Vec<Option<f64>>,
    pub saldo_conciliado: Vec<Option<f64>>,
}

impl ChartDataset {
    pub fn new(
        labels: Vec<String>,
        saldo_contabilidad: Vec<Option<f64>>,
        saldo_conciliado: Vec<Option<f64>>,
    ) -> Self {
        Self {
            labels,
            saldo_contabilidad,
            saldo_conciliado,
        }
    }

    /// Number of periods in the history
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// An empty label sequence means the server has nothing for the query.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Checks that both series line up with the labels.
    pub fn validate(&self) -> Result<(), AppError> {
        let expected = self.labels.len();
        if self.saldo_contabilidad.len() != expected || self.saldo_conciliado.len() != expected {
            return Err(AppError::DataError(format!(
                "series length mismatch: {} labels, {} saldoContabilidad, {} saldoConciliado",
                expected,
                self.saldo_contabilidad.len(),
                self.saldo_conciliado.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "labels": ["2024-01-01", "2024-02-01"],
            "saldoContabilidad": [100.0, 110.5],
            "saldoConciliado": [95, 108]
        }"#;

        let dataset: ChartDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.saldo_contabilidad, vec![Some(100.0), Some(110.5)]);
        assert_eq!(dataset.saldo_conciliado, vec![Some(95.0), Some(108.0)]);
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_null_balance_decodes_as_gap() {
        let json = r#"{
            "labels": ["2024-01-01", "2024-02-01"],
            "saldoContabilidad": [100.0, null],
            "saldoConciliado": [null, 108.0]
        }"#;

        let dataset: ChartDataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.saldo_contabilidad, vec![Some(100.0), None]);
        assert_eq!(dataset.saldo_conciliado, vec![None, Some(108.0)]);
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_missing_series_is_a_decode_failure() {
        let json = r#"{"labels": ["2024-01-01"], "saldoContabilidad": [1.0]}"#;
        assert!(serde_json::from_str::<ChartDataset>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_unequal_lengths() {
        let dataset = ChartDataset::new(vec!["2024-01".into()], vec![Some(1.0), Some(2.0)], vec![Some(1.0)]);
        let err = dataset.validate().unwrap_err();
        assert!(matches!(err, AppError::DataError(_)));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = ChartDataset::new(vec![], vec![], vec![]);
        assert!(dataset.is_empty());
        assert!(dataset.validate().is_ok());
    }
}
