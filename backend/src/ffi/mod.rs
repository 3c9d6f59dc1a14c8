//! Python bindings for the calculators
//!
//! Every function takes plain dicts/lists and returns plain dicts/lists.
//!
//! ```python
//! from metin_farm_core_rs import calculate_all_bosses
//!
//! result = calculate_all_bosses(
//!     [{"id": "b1", "name": "Razador", "hp": 6000, "fixed_run_time": 1}],
//!     {"damage": 100, "hits_per_second": 1, "find_time": 0},
//!     1.0,
//!     [],
//! )
//! print(result["results"][0]["real_daily_kills"])  # 60
//! ```

pub mod types;

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use types::{
    damage_zone_to_py, metin_profit_to_py, parse_bosses, parse_character_stats, parse_market_items, parse_metins,
    parse_multipliers, rotation_result_to_py, segment_to_py, tier_analysis_to_py,
};

fn parse_enum<T: std::str::FromStr<Err = crate::models::ValidationError>>(value: &str) -> PyResult<T> {
    value
        .parse()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
}

#[pyfunction]
fn resolve_price(item_id: &str, market_items: &Bound<'_, PyList>) -> PyResult<f64> {
    let items = parse_market_items(market_items)?;
    Ok(crate::pricing::resolve_price(item_id, &items))
}

#[pyfunction]
#[pyo3(signature = (metins, stats, market_items, multipliers=None))]
fn calculate_all_metins<'py>(
    py: Python<'py>,
    metins: &Bound<'py, PyList>,
    stats: &Bound<'py, PyDict>,
    market_items: &Bound<'py, PyList>,
    multipliers: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyList>> {
    let ranked = crate::profit::calculate_all_metins(
        &parse_metins(metins)?,
        parse_multipliers(multipliers)?,
        &parse_character_stats(stats)?,
        &parse_market_items(market_items)?,
    );

    let list = PyList::empty_bound(py);
    for profit in &ranked {
        list.append(metin_profit_to_py(py, profit)?)?;
    }
    Ok(list)
}

#[pyfunction]
#[pyo3(signature = (metins, stats, market_items, multipliers=None))]
fn calculate_damage_zones<'py>(
    py: Python<'py>,
    metins: &Bound<'py, PyList>,
    stats: &Bound<'py, PyDict>,
    market_items: &Bound<'py, PyList>,
    multipliers: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyList>> {
    let zones = crate::progression::calculate_damage_zones(
        &parse_metins(metins)?,
        parse_multipliers(multipliers)?,
        &parse_character_stats(stats)?,
        &parse_market_items(market_items)?,
    );

    let list = PyList::empty_bound(py);
    for zone in &zones {
        list.append(damage_zone_to_py(py, zone)?)?;
    }
    Ok(list)
}

#[pyfunction]
#[pyo3(signature = (current_damage, metins, stats, market_items, multipliers=None))]
fn analyze_next_tier<'py>(
    py: Python<'py>,
    current_damage: f64,
    metins: &Bound<'py, PyList>,
    stats: &Bound<'py, PyDict>,
    market_items: &Bound<'py, PyList>,
    multipliers: Option<&Bound<'py, PyDict>>,
) -> PyResult<Option<Bound<'py, PyDict>>> {
    let zones = crate::progression::calculate_damage_zones(
        &parse_metins(metins)?,
        parse_multipliers(multipliers)?,
        &parse_character_stats(stats)?,
        &parse_market_items(market_items)?,
    );

    crate::progression::analyze_next_tier(current_damage, &zones)
        .map(|analysis| tier_analysis_to_py(py, &analysis))
        .transpose()
}

#[pyfunction]
fn calculate_all_bosses<'py>(
    py: Python<'py>,
    bosses: &Bound<'py, PyList>,
    stats: &Bound<'py, PyDict>,
    daily_play_hours: f64,
    market_items: &Bound<'py, PyList>,
) -> PyResult<Bound<'py, PyDict>> {
    let result = crate::scheduler::calculate_all_bosses(
        &parse_bosses(bosses)?,
        &parse_character_stats(stats)?,
        daily_play_hours,
        &parse_market_items(market_items)?,
    );
    rotation_result_to_py(py, &result)
}

#[pyfunction]
#[pyo3(signature = (min_damage, max_damage, player_count, distribution_type, time_strategy, base_hours=4.0))]
fn generate_player_distribution<'py>(
    py: Python<'py>,
    min_damage: f64,
    max_damage: f64,
    player_count: u32,
    distribution_type: &str,
    time_strategy: &str,
    base_hours: f64,
) -> PyResult<Bound<'py, PyList>> {
    let segments = crate::population::generate_player_distribution(
        min_damage,
        max_damage,
        player_count,
        parse_enum(distribution_type)?,
        parse_enum(time_strategy)?,
        base_hours,
    );

    let list = PyList::empty_bound(py);
    for segment in &segments {
        list.append(segment_to_py(py, segment)?)?;
    }
    Ok(list)
}

/// Register every binding on the extension module
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(resolve_price, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_all_metins, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_damage_zones, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_next_tier, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_all_bosses, m)?)?;
    m.add_function(wrap_pyfunction!(generate_player_distribution, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_dict(py: Python<'_>) -> Bound<'_, PyDict> {
        let stats = PyDict::new_bound(py);
        stats.set_item("damage", 100.0).unwrap();
        stats.set_item("hits_per_second", 1.0).unwrap();
        stats.set_item("find_time", 0.0).unwrap();
        stats
    }

    fn boss_dict<'py>(py: Python<'py>, cooldown_type: &str) -> Bound<'py, PyDict> {
        let constraints = PyDict::new_bound(py);
        constraints.set_item("cooldown_type", cooldown_type).unwrap();

        let boss = PyDict::new_bound(py);
        boss.set_item("id", "b1").unwrap();
        boss.set_item("name", "Razador").unwrap();
        boss.set_item("hp", 6000.0).unwrap();
        boss.set_item("fixed_run_time", 1.0).unwrap();
        boss.set_item("constraints", constraints).unwrap();
        boss
    }

    #[test]
    fn test_calculate_all_bosses_from_dicts() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let bosses = PyList::new_bound(py, [boss_dict(py, "entry")]);
            let market = PyList::empty_bound(py);

            let result = calculate_all_bosses(py, &bosses, &stats_dict(py), 1.0, &market).unwrap();

            let total: f64 = result.get_item("total_duration_minutes").unwrap().unwrap().extract().unwrap();
            assert_eq!(total, 60.0);

            let first = result.get_item("results").unwrap().unwrap().get_item(0).unwrap();
            let kills: u32 = first.get_item("real_daily_kills").unwrap().extract().unwrap();
            assert_eq!(kills, 60);
        });
    }

    #[test]
    fn test_resolve_price_from_dicts() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let item = PyDict::new_bound(py);
            item.set_item("id", "item_ruh_tasi").unwrap();
            item.set_item("name", "Soul Stone").unwrap();
            item.set_item("price", 150_000.0).unwrap();
            let market = PyList::new_bound(py, [item]);

            assert_eq!(resolve_price("ITEM_RUH_TASI", &market).unwrap(), 150_000.0);
            assert_eq!(resolve_price("missing", &market).unwrap(), 0.0);
        });
    }

    #[test]
    fn test_unknown_cooldown_type_raises() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let bosses = PyList::new_bound(py, [boss_dict(py, "sometimes")]);
            let market = PyList::empty_bound(py);

            let err = calculate_all_bosses(py, &bosses, &stats_dict(py), 1.0, &market).unwrap_err();
            assert!(err.is_instance_of::<pyo3::exceptions::PyValueError>(py));
        });
    }

    #[test]
    fn test_missing_required_field_raises() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let metin = PyDict::new_bound(py);
            metin.set_item("id", "m1").unwrap();
            let metins = PyList::new_bound(py, [metin]);
            let market = PyList::empty_bound(py);

            let err = calculate_all_metins(py, &metins, &stats_dict(py), &market, None).unwrap_err();
            assert!(err.to_string().contains("hp"));
        });
    }

    #[test]
    fn test_distribution_from_strings() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let segments =
                generate_player_distribution(py, 0.0, 20_000.0, 200, "uniform", "constant", 4.0).unwrap();
            assert_eq!(segments.len(), 20);

            assert!(generate_player_distribution(py, 0.0, 20_000.0, 200, "bimodal", "constant", 4.0).is_err());
        });
    }
}
