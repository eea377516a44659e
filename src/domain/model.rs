use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 薪資上下限為 0 時的解讀方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ZeroBoundPolicy {
    /// `0` means the employer left the bound unspecified.
    #[default]
    Absent,
    /// `0` is a real bound and takes part in the estimate.
    Present,
}

/// Already-extracted lower/upper salary bounds of one vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HhSalary {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
}

/// One vacancy from the HeadHunter search API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    pub items: Vec<HhVacancy>,
    pub found: u64,
    pub pages: u32,
}

/// One vacancy from the SuperJob search API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SjVacancy {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SjPage {
    pub objects: Vec<SjVacancy>,
    pub total: u64,
    pub more: bool,
}

/// Every vacancy fetched for one language plus the total the source reported.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedVacancies<V> {
    pub found: u64,
    pub vacancies: Vec<V>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub found: u64,
    pub processed: u64,
    pub average_salary: Option<u64>,
}

/// Language name -> stats, in configured language order.
pub type StatsTable = IndexMap<String, LanguageStats>;
