use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// An order held by the sample store. The form screen never looks inside
/// this; only the record controller reads and rebuilds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: u64,
    pub product: String,
    pub quantity: u32,
    pub unit_price_cents: u32,
    /// ISO date, kept as text.
    pub ordered_on: String,
}

impl OrderRecord {
    pub fn price_display(&self) -> String {
        format_price(self.unit_price_cents)
    }
}

pub fn format_price(cents: u32) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Parse "12", "12.5" or "12.50" into cents. Returns None for anything
/// else, including more than two fractional digits.
pub fn parse_price(s: &str) -> Option<u32> {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if frac.len() > 2 {
        return None;
    }
    let whole: u32 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: u32 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u32>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    whole.checked_mul(100)?.checked_add(frac)
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Title of the root list screen.
    #[serde(default)]
    pub title: Option<String>,
    /// Path to a JSON file of order records, relative to the config dir.
    #[serde(default)]
    pub orders: Option<String>,
    /// "dark" (default) or "light".
    #[serde(default)]
    pub theme: Option<String>,
}

fn config_dir() -> PathBuf {
    std::env::var("ORDER_DESK_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Load `order-desk.yaml` from the config dir; a missing file is not an
/// error, it just yields the defaults.
pub fn load_config() -> Result<AppConfig> {
    let path = config_dir().join("order-desk.yaml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_records(cfg: &AppConfig) -> Result<Vec<OrderRecord>> {
    let Some(rel) = &cfg.orders else {
        return Ok(sample_records());
    };
    let path = {
        let p = Path::new(rel);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            config_dir().join(p)
        }
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Built-in demo data used when no orders file is configured.
pub fn sample_records() -> Vec<OrderRecord> {
    let seed = [
        ("Widget, large", 4u32, 1250u32, "2026-03-02"),
        ("Widget, small", 12, 375, "2026-03-05"),
        ("Gasket kit", 2, 899, "2026-03-11"),
        ("Bearing, sealed", 8, 1420, "2026-04-01"),
        ("Drive belt", 1, 2350, "2026-04-17"),
        ("Hex bolts (100)", 3, 560, "2026-05-09"),
    ];
    seed.iter()
        .enumerate()
        .map(|(i, (product, quantity, cents, date))| OrderRecord {
            id: i as u64 + 1,
            product: (*product).to_string(),
            quantity: *quantity,
            unit_price_cents: *cents,
            ordered_on: (*date).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_formats_with_two_digits() {
        assert_eq!(format_price(0), "0.00");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(1250), "12.50");
    }

    #[test]
    fn price_parses_common_shapes() {
        assert_eq!(parse_price("12"), Some(1200));
        assert_eq!(parse_price("12.5"), Some(1250));
        assert_eq!(parse_price("12.50"), Some(1250));
        assert_eq!(parse_price(".5"), Some(50));
        assert_eq!(parse_price("0.05"), Some(5));
    }

    #[test]
    fn price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price("12.505"), None);
        assert_eq!(parse_price("12,50"), None);
        assert_eq!(parse_price("-3"), None);
    }

    #[test]
    fn config_keys_are_all_optional() {
        let cfg: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert!(cfg.title.is_none());
        assert!(cfg.orders.is_none());
        let cfg: AppConfig =
            serde_yaml::from_str("title: Orders\norders: data/orders.json\ntheme: light").unwrap();
        assert_eq!(cfg.title.as_deref(), Some("Orders"));
        assert_eq!(cfg.orders.as_deref(), Some("data/orders.json"));
        assert_eq!(cfg.theme.as_deref(), Some("light"));
    }

    #[test]
    fn records_round_trip_through_json() {
        let records = sample_records();
        let raw = serde_json::to_string(&records).unwrap();
        let back: Vec<OrderRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn sample_records_have_unique_ids() {
        let records = sample_records();
        assert!(!records.is_empty());
        let mut ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
