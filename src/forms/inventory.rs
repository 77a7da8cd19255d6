use super::{date, number, required, FormState};
use crate::error::FormError;
use crate::models::NewDamageReport;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageForm {
    pub asset_id: String,
    pub reported_by: String,
    pub date: String,
    pub description: String,
    pub repair_cost: String,
}

impl FormState for DamageForm {
    type Output = NewDamageReport;

    fn validate(&self) -> Result<NewDamageReport, FormError> {
        Ok(NewDamageReport {
            asset_id: required(&self.asset_id, "Asset")?,
            reported_by: required(&self.reported_by, "Reported by")?,
            date: date(&self.date, "Date")?,
            description: required(&self.description, "Description")?,
            repair_cost: number(&self.repair_cost, "Repair cost")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit;
    use crate::models::AssetStatus;
    use crate::state::{Command, DspStore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_damage_report_marks_asset_damaged() {
        let mut store = DspStore::seeded();
        let mut form = DamageForm {
            asset_id: "AST-001".into(),
            reported_by: "DRV-001".into(),
            date: "2024-06-10".into(),
            description: "Cracked screen".into(),
            repair_cost: "149".into(),
        };

        submit(&mut form, |new| {
            store.dispatch(Command::ReportDamage(new)).unwrap();
        })
        .unwrap();

        assert_eq!(store.assets.get("AST-001").map(|a| a.status), Some(AssetStatus::Damaged));
        assert_eq!(form, DamageForm::default());
    }

    #[test]
    fn test_repair_cost_required() {
        let form = DamageForm {
            asset_id: "AST-001".into(),
            reported_by: "DRV-001".into(),
            date: "2024-06-10".into(),
            description: "Cracked screen".into(),
            repair_cost: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Repair cost")));
    }
}
