//! JSON/YAML output for the one-shot commands.

use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// Export format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}

/// Serialize `value` in the requested format, pretty-printed.
pub fn export<T: Serialize + ?Sized>(value: &T, format: ExportFormat) -> Result<String, AppError> {
    match format {
        ExportFormat::Json => {
            let mut out = serde_json::to_string_pretty(value)?;
            out.push('\n');
            Ok(out)
        }
        ExportFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praonde_core::Seed;

    #[test]
    fn format_names() {
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("yml".parse::<ExportFormat>(), Ok(ExportFormat::Yaml));
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn yaml_uses_wire_names() {
        let seed = Seed::builtin();
        let out = export(seed.get(4).unwrap(), ExportFormat::Yaml).unwrap();
        assert!(out.contains("category: Cultural"));
        assert!(out.contains("status: fraco"));
        assert!(out.contains("vibe: Em tempo real"));
        assert!(!out.contains("ticket"));
    }
}
