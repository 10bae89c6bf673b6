use std::collections::HashSet;

use crate::visits::DailyVisitMap;

pub const DEFAULT_MIN_PAGES: usize = 2;

/// What a customer has to do on each day to count as loyal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoyaltyCriteria {
    pub min_pages_per_day: usize,
}

impl Default for LoyaltyCriteria {
    fn default() -> Self {
        Self {
            min_pages_per_day: DEFAULT_MIN_PAGES,
        }
    }
}

impl LoyaltyCriteria {
    pub fn new(min_pages_per_day: usize) -> Self {
        Self { min_pages_per_day }
    }

    pub fn is_loyal(&self, day1_pages: &HashSet<String>, day2_pages: &HashSet<String>) -> bool {
        day1_pages.len() >= self.min_pages_per_day && day2_pages.len() >= self.min_pages_per_day
    }

    /// Customers present on both days who meet the page threshold each day,
    /// in the order they first appeared on day one.
    pub fn classify(&self, day1: &DailyVisitMap, day2: &DailyVisitMap) -> Vec<String> {
        day1.iter()
            .filter_map(|(customer_id, day1_pages)| {
                let day2_pages = day2.pages(customer_id)?;
                self.is_loyal(day1_pages, day2_pages)
                    .then(|| customer_id.to_string())
            })
            .collect()
    }
}

pub fn find_loyal_customers(day1: &DailyVisitMap, day2: &DailyVisitMap) -> Vec<String> {
    LoyaltyCriteria::default().classify(day1, day2)
}
