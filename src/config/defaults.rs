use super::*;

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            console_output: true,
            json_format: false,
            file: None,
            backup_count: 5,
        }
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().tag().to_string(),
            currency_symbol: "¥".to_string(),
            ratio_decimals: 1,
        }
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            expected_total_cost: 158000.0,
        }
    }
}
