//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust records and Python dicts/lists. Input dicts use
//! snake_case keys mirroring the Rust field names.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::models::{Boss, BossConstraints, CharacterStats, CooldownType, Drop, MarketItem, Metin, SourceType};
use crate::population::Segment;
use crate::profit::{DropMultipliers, MetinProfit};
use crate::progression::{DamageZone, TierAnalysis};
use crate::scheduler::RotationResult;

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field; a missing key or `None` yields `None`.
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T>(dict: &Bound<'py, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    Ok(extract_optional(dict, key)?.unwrap_or(default))
}

/// Apply `parse` to every dict in a Python list
fn parse_list<'py, T>(
    list: &Bound<'py, PyList>,
    parse: impl Fn(&Bound<'py, PyDict>) -> PyResult<T>,
) -> PyResult<Vec<T>> {
    list.iter()
        .map(|item| parse(item.downcast::<PyDict>()?))
        .collect()
}

// ========================================================================
// Input Parsers
// ========================================================================

pub fn parse_character_stats(py_stats: &Bound<'_, PyDict>) -> PyResult<CharacterStats> {
    Ok(CharacterStats {
        damage: extract_with_default(py_stats, "damage", 0.0)?,
        hits_per_second: extract_with_default(py_stats, "hits_per_second", 0.0)?,
        find_time: extract_with_default(py_stats, "find_time", 0.0)?,
    })
}

pub fn parse_multipliers(py_multipliers: Option<&Bound<'_, PyDict>>) -> PyResult<DropMultipliers> {
    match py_multipliers {
        Some(dict) => Ok(DropMultipliers {
            drop: extract_with_default(dict, "drop", 1.0)?,
        }),
        None => Ok(DropMultipliers::default()),
    }
}

pub fn parse_market_items(py_items: &Bound<'_, PyList>) -> PyResult<Vec<MarketItem>> {
    parse_list(py_items, |dict| {
        Ok(MarketItem {
            id: extract_required(dict, "id")?,
            original_id: extract_optional(dict, "original_id")?,
            name: extract_with_default(dict, "name", String::new())?,
            category: extract_optional(dict, "category")?,
            price: extract_with_default(dict, "price", 0.0)?,
        })
    })
}

fn parse_drops(dict: &Bound<'_, PyDict>) -> PyResult<Vec<Drop>> {
    let Some(py_drops) = extract_optional::<Bound<'_, PyList>>(dict, "drops")? else {
        return Ok(Vec::new());
    };

    parse_list(&py_drops, |drop| {
        let source_type = match extract_optional::<String>(drop, "source_type")? {
            Some(s) => s.parse().map_err(|e| PyValueError::new_err(format!("{}", e)))?,
            None => SourceType::default(),
        };
        Ok(Drop {
            item_id: extract_required(drop, "item_id")?,
            source_type,
            count: extract_with_default(drop, "count", 1.0)?,
            chance: extract_required(drop, "chance")?,
        })
    })
}

pub fn parse_metins(py_metins: &Bound<'_, PyList>) -> PyResult<Vec<Metin>> {
    parse_list(py_metins, |dict| {
        Ok(Metin {
            id: extract_required(dict, "id")?,
            name: extract_with_default(dict, "name", String::new())?,
            hp: extract_required(dict, "hp")?,
            drops: parse_drops(dict)?,
        })
    })
}

pub fn parse_bosses(py_bosses: &Bound<'_, PyList>) -> PyResult<Vec<Boss>> {
    parse_list(py_bosses, |dict| {
        let constraints = match extract_optional::<Bound<'_, PyDict>>(dict, "constraints")? {
            Some(c) => {
                let cooldown_type: CooldownType = match extract_optional::<String>(&c, "cooldown_type")? {
                    Some(s) => s.parse().map_err(|e| PyValueError::new_err(format!("{}", e)))?,
                    None => CooldownType::default(),
                };
                BossConstraints {
                    cooldown: extract_with_default(&c, "cooldown", 0.0)?,
                    cooldown_type,
                    daily_limit: extract_with_default(&c, "daily_limit", 0)?,
                    min_level: extract_with_default(&c, "min_level", 0)?,
                }
            }
            None => BossConstraints::default(),
        };

        Ok(Boss {
            id: extract_required(dict, "id")?,
            name: extract_with_default(dict, "name", String::new())?,
            hp: extract_required(dict, "hp")?,
            fixed_run_time: extract_required(dict, "fixed_run_time")?,
            constraints,
            drops: parse_drops(dict)?,
        })
    })
}

// ========================================================================
// Output Converters
// ========================================================================

pub fn metin_profit_to_py<'py>(py: Python<'py>, profit: &MetinProfit) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("metin_id", &profit.metin_id)?;
    dict.set_item("metin_name", &profit.metin_name)?;
    dict.set_item("kill_time", profit.kill_time)?;
    dict.set_item("cycle_time", profit.cycle_time)?;
    dict.set_item("metins_per_hour", profit.metins_per_hour)?;
    dict.set_item("drop_value_per_metin", profit.drop_value_per_metin)?;
    dict.set_item("hourly_profit", profit.hourly_profit)?;
    Ok(dict)
}

pub fn damage_zone_to_py<'py>(py: Python<'py>, zone: &DamageZone) -> PyResult<Bound<'py, PyDict>> {
    let rankings = PyList::empty_bound(py);
    for ranking in &zone.rankings {
        let entry = PyDict::new_bound(py);
        entry.set_item("name", &ranking.name)?;
        entry.set_item("profit", ranking.profit)?;
        entry.set_item("efficiency", ranking.efficiency)?;
        rankings.append(entry)?;
    }

    let dict = PyDict::new_bound(py);
    dict.set_item("min_damage", zone.min_damage)?;
    dict.set_item("max_damage", zone.max_damage)?;
    dict.set_item("best_metin_id", &zone.best_metin_id)?;
    dict.set_item("best_metin_name", &zone.best_metin_name)?;
    dict.set_item("min_profit", zone.min_profit)?;
    dict.set_item("max_profit", zone.max_profit)?;
    dict.set_item("color", &zone.color)?;
    dict.set_item("is_softcap", zone.is_softcap)?;
    dict.set_item("rankings", rankings)?;
    Ok(dict)
}

pub fn tier_analysis_to_py<'py>(py: Python<'py>, analysis: &TierAnalysis) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("is_max_level", analysis.is_max_level())?;
    match analysis {
        TierAnalysis::MaxLevel { message } => {
            dict.set_item("message", message)?;
        }
        TierAnalysis::NextTier {
            next_metin,
            required_damage,
            profit_increase,
            percent_gain,
        } => {
            dict.set_item("next_metin", next_metin)?;
            dict.set_item("required_damage", *required_damage)?;
            dict.set_item("profit_increase", *profit_increase)?;
            dict.set_item("percent_gain", *percent_gain)?;
        }
    }
    Ok(dict)
}

pub fn rotation_result_to_py<'py>(py: Python<'py>, result: &RotationResult) -> PyResult<Bound<'py, PyDict>> {
    let results = PyList::empty_bound(py);
    for boss in &result.results {
        let entry = PyDict::new_bound(py);
        entry.set_item("boss_id", &boss.boss_id)?;
        entry.set_item("boss_name", &boss.boss_name)?;
        entry.set_item("cycle_time_minutes", boss.cycle_time_minutes)?;
        entry.set_item("active_time_minutes", boss.active_time_minutes)?;
        entry.set_item("real_daily_kills", boss.real_daily_kills)?;
        entry.set_item("daily_profit", boss.daily_profit)?;
        entry.set_item("profit_per_cycle", boss.profit_per_cycle)?;
        entry.set_item("time_required_hours", boss.time_required_hours)?;
        entry.set_item("daily_limit", boss.daily_limit)?;
        entry.set_item("is_unkillable", boss.is_unkillable)?;
        results.append(entry)?;
    }

    let dict = PyDict::new_bound(py);
    dict.set_item("results", results)?;
    dict.set_item("total_duration_minutes", result.total_duration_minutes)?;
    dict.set_item("budget_minutes", result.budget_minutes)?;
    dict.set_item("iterations", result.iterations)?;
    dict.set_item("iteration_cap_reached", result.iteration_cap_reached)?;
    Ok(dict)
}

pub fn segment_to_py<'py>(py: Python<'py>, segment: &Segment) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("min_damage", segment.min_damage)?;
    dict.set_item("max_damage", segment.max_damage)?;
    dict.set_item("avg_damage", segment.avg_damage)?;
    dict.set_item("player_count", segment.player_count)?;
    dict.set_item("avg_play_time", segment.avg_play_time)?;
    dict.set_item("total_hours", segment.total_hours)?;
    Ok(dict)
}
