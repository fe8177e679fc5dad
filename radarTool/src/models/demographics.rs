use serde::{Deserialize, Serialize};
use crate::config::constants::{
    DEFAULT_STUDENTS_SHARE, DEFAULT_ENTREPRENEURS_SHARE, DEFAULT_WORKERS_SHARE,
    DEFAULT_FAMILIES_SHARE, DEFAULT_HIGH_INCOME_SHARE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemographicGroup {
    Students,       // University students (S)
    Entrepreneurs,  // Young entrepreneurs (E)
    Workers,        // Workers (W)
    Families,       // Families (F)
    HighIncome,     // High-income (H)
}

impl DemographicGroup {
    pub const ALL: [DemographicGroup; 5] = [
        DemographicGroup::Students,
        DemographicGroup::Entrepreneurs,
        DemographicGroup::Workers,
        DemographicGroup::Families,
        DemographicGroup::HighIncome,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DemographicGroup::Students => "Students",
            DemographicGroup::Entrepreneurs => "Entrepreneurs",
            DemographicGroup::Workers => "Workers",
            DemographicGroup::Families => "Families",
            DemographicGroup::HighIncome => "High Income",
        }
    }

    pub fn default_share(&self) -> f64 {
        match self {
            DemographicGroup::Students => DEFAULT_STUDENTS_SHARE,
            DemographicGroup::Entrepreneurs => DEFAULT_ENTREPRENEURS_SHARE,
            DemographicGroup::Workers => DEFAULT_WORKERS_SHARE,
            DemographicGroup::Families => DEFAULT_FAMILIES_SHARE,
            DemographicGroup::HighIncome => DEFAULT_HIGH_INCOME_SHARE,
        }
    }
}

/// Population shares of the five demographic groups.
///
/// Shares are proportions of the total population and nominally sum to 1.
/// The metric engine accepts any non-negative values; the `[0, 0.5]` bound
/// only applies to interactive edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemographicProfile {
    pub students: f64,
    pub entrepreneurs: f64,
    pub workers: f64,
    pub families: f64,
    #[serde(rename = "highIncome")]
    pub high_income: f64,
}

impl Default for DemographicProfile {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENTS_SHARE,
            entrepreneurs: DEFAULT_ENTREPRENEURS_SHARE,
            workers: DEFAULT_WORKERS_SHARE,
            families: DEFAULT_FAMILIES_SHARE,
            high_income: DEFAULT_HIGH_INCOME_SHARE,
        }
    }
}

impl DemographicProfile {
    pub fn new(students: f64, entrepreneurs: f64, workers: f64, families: f64, high_income: f64) -> Self {
        Self { students, entrepreneurs, workers, families, high_income }
    }

    pub fn uniform() -> Self {
        let share = 1.0 / DemographicGroup::ALL.len() as f64;
        Self::new(share, share, share, share, share)
    }

    pub fn share(&self, group: DemographicGroup) -> f64 {
        match group {
            DemographicGroup::Students => self.students,
            DemographicGroup::Entrepreneurs => self.entrepreneurs,
            DemographicGroup::Workers => self.workers,
            DemographicGroup::Families => self.families,
            DemographicGroup::HighIncome => self.high_income,
        }
    }

    pub fn with_share(mut self, group: DemographicGroup, value: f64) -> Self {
        match group {
            DemographicGroup::Students => self.students = value,
            DemographicGroup::Entrepreneurs => self.entrepreneurs = value,
            DemographicGroup::Workers => self.workers = value,
            DemographicGroup::Families => self.families = value,
            DemographicGroup::HighIncome => self.high_income = value,
        }
        self
    }

    pub fn shares(&self) -> [f64; 5] {
        [self.students, self.entrepreneurs, self.workers, self.families, self.high_income]
    }

    pub fn sum(&self) -> f64 {
        self.shares().iter().sum()
    }

    /// Divides every share by the profile sum so the shares add up to 1.
    ///
    /// A profile whose sum is already exactly 1 is returned untouched. A
    /// degenerate sum (zero or non-finite) cannot be divided by and is also
    /// returned untouched.
    pub fn rescaled(self) -> Self {
        let sum = self.sum();
        if sum == 1.0 || sum <= 0.0 || !sum.is_finite() {
            return self;
        }
        Self::new(
            self.students / sum,
            self.entrepreneurs / sum,
            self.workers / sum,
            self.families / sum,
            self.high_income / sum,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_is_a_no_op_when_sum_is_exactly_one() {
        let profile = DemographicProfile::new(0.5, 0.25, 0.125, 0.0625, 0.0625);
        assert_eq!(profile.sum(), 1.0);
        assert_eq!(profile.rescaled(), profile);
    }

    #[test]
    fn rescale_normalizes_shares() {
        let profile = DemographicProfile::new(0.4, 0.4, 0.4, 0.4, 0.4).rescaled();
        for share in profile.shares() {
            assert!((share - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn rescale_leaves_all_zero_profile_alone() {
        let profile = DemographicProfile::new(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(profile.rescaled(), profile);
    }

    #[test]
    fn with_share_only_touches_one_group() {
        let profile = DemographicProfile::default().with_share(DemographicGroup::Workers, 0.5);
        assert_eq!(profile.workers, 0.5);
        assert_eq!(profile.students, DEFAULT_STUDENTS_SHARE);
        assert_eq!(profile.high_income, DEFAULT_HIGH_INCOME_SHARE);
    }

    #[test]
    fn deserializes_camel_case_high_income() {
        let json = r#"{"students":0.2,"entrepreneurs":0.2,"workers":0.2,"families":0.2,"highIncome":0.2}"#;
        let profile: DemographicProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.high_income, 0.2);
    }
}
