use super::{matches_option, matches_search, sum};
use crate::models::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilter {
    pub search: String,
    pub category: Option<AssetCategory>,
    pub status: Option<AssetStatus>,
}

impl AssetFilter {
    pub fn matches(&self, asset: &Asset) -> bool {
        matches_option(self.category, asset.category)
            && matches_option(self.status, asset.status)
            && matches_search(
                &self.search,
                &[
                    asset.id.as_str(),
                    asset.name.as_str(),
                    asset.serial.as_str(),
                    asset.assigned_to.as_deref().unwrap_or_default(),
                ],
            )
    }
}

pub fn filter_assets<'a>(assets: &'a [Asset], filter: &AssetFilter) -> Vec<&'a Asset> {
    assets.iter().filter(|a| filter.matches(a)).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetStats {
    pub total: usize,
    /// Book value of everything not retired
    pub total_value: f64,
    pub assigned: usize,
    pub available: usize,
    pub damaged: usize,
}

pub fn asset_stats(assets: &[Asset]) -> AssetStats {
    let count = |status| assets.iter().filter(|a| a.status == status).count();

    AssetStats {
        total: assets.len(),
        total_value: sum(assets
            .iter()
            .filter(|a| a.status != AssetStatus::Retired)
            .map(|a| a.value)),
        assigned: count(AssetStatus::Assigned),
        available: count(AssetStatus::Available),
        damaged: count(AssetStatus::Damaged),
    }
}

pub fn filter_damage(reports: &[DamageReport], status: Option<DamageStatus>) -> Vec<&DamageReport> {
    let mut rows: Vec<_> = reports
        .iter()
        .filter(|r| matches_option(status, r.status))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageStats {
    pub reports: usize,
    pub open: usize,
    pub total_repair_cost: f64,
}

pub fn damage_stats(reports: &[DamageReport]) -> DamageStats {
    DamageStats {
        reports: reports.len(),
        open: reports
            .iter()
            .filter(|r| matches!(r.status, DamageStatus::Reported | DamageStatus::Assessed))
            .count(),
        total_repair_cost: sum(reports.iter().map(|r| r.repair_cost)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_asset_stats() {
        let stats = asset_stats(&data::assets());
        assert_eq!(stats.total, 10);
        assert_eq!(stats.total_value, 2282.0);
        assert_eq!(stats.assigned, 5);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.damaged, 1);
    }

    #[test]
    fn test_filter_by_category_and_assignee() {
        let assets = data::assets();
        let phones = AssetFilter {
            category: Some(AssetCategory::Phone),
            ..Default::default()
        };
        assert_eq!(filter_assets(&assets, &phones).len(), 4);

        let assigned_to = AssetFilter {
            search: "drv-005".into(),
            ..Default::default()
        };
        let rows = filter_assets(&assets, &assigned_to);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, AssetCategory::Dolly);
    }

    #[test]
    fn test_damage_stats() {
        let reports = data::damage_reports();
        let stats = damage_stats(&reports);
        assert_eq!(stats.total_repair_cost, 404.0);
        assert_eq!(stats.open, 1);
        assert_eq!(filter_damage(&reports, Some(DamageStatus::Repaired)).len(), 1);
    }
}
