use serde::Serialize;

use super::Amount;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub id: u64,
    pub image: String,
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    pub price_min: Amount,
    pub price_max: Amount,
    pub image: String,
}

impl ServiceOffering {
    pub fn price_label(&self) -> String {
        if self.price_min == self.price_max {
            self.price_min.to_string()
        } else {
            format!("{} - {}", self.price_min, self.price_max)
        }
    }
}
