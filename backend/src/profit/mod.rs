//! Profit calculators for metins and bosses

pub mod boss;
pub mod metin;

pub use boss::{calculate_boss_metrics, BossMetrics, DEFAULT_FIXED_RUN_TIME_MINUTES};
pub use metin::{
    calculate_all_metins, calculate_item_yields, calculate_metin_profit, damage_profit_curve, get_best_metin,
    is_softcapped, CurveSample, DropMultipliers, ItemYield, ItemYields, MetinProfit, ProfitCurvePoint,
};
