use std::fs;
use std::path::Path;

use risco_core::{RiskBand, RiskBands};

/// Load a replacement band threshold table from a JSON file:
/// `[{"faixa": "ALTO", "minimo": "0.7"}, ...]`. Order in the file is
/// irrelevant; the table is sorted on construction.
pub fn read_bands(path: &str) -> Result<RiskBands, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Falha ao ler '{}': {}", resolved.display(), e))?;
    let entries: Vec<RiskBand> = serde_json::from_str(&contents)
        .map_err(|e| format!("Falha ao interpretar '{}': {}", resolved.display(), e))?;
    Ok(RiskBands::new(entries)?)
}

fn resolve_path(path: &str) -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };
    if !resolved.is_file() {
        return Err(format!("Arquivo não encontrado: {}", resolved.display()).into());
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_a_band_file_in_any_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faixas.json");
        std::fs::write(
            &path,
            r#"[
                {"faixa": "BAIXO", "minimo": "0.0"},
                {"faixa": "ALTO", "minimo": "0.7"},
                {"faixa": "MEDIO", "minimo": "0.4"}
            ]"#,
        )
        .unwrap();

        let bands = read_bands(path.to_str().unwrap()).unwrap();
        let labels: Vec<&str> = bands.labels().collect();
        assert_eq!(labels, ["ALTO", "MEDIO", "BAIXO"]);
        assert_eq!(bands.classify(dec!(0.9)).unwrap(), "ALTO");
    }

    #[test]
    fn missing_file_reports_the_resolved_path() {
        let err = read_bands("faixas_inexistentes.json").unwrap_err();
        assert!(err.to_string().contains("faixas_inexistentes.json"));
    }
}
