use std::collections::{HashMap, HashSet};

/// Distinct pages each customer viewed during one day.
///
/// Customers iterate in the order they first appeared in the log, so anything
/// derived from this map (the loyal customer list in particular) is stable
/// across runs regardless of hashing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DailyVisitMap {
    order: Vec<String>,
    pages: HashMap<String, HashSet<String>>,
}

impl DailyVisitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a page view, returning `true` if the page is new for this customer.
    pub fn record(&mut self, customer_id: &str, page_id: &str) -> bool {
        if let Some(pages) = self.pages.get_mut(customer_id) {
            if pages.contains(page_id) {
                return false;
            }
            return pages.insert(page_id.to_string());
        }

        self.order.push(customer_id.to_string());
        self.pages.insert(
            customer_id.to_string(),
            HashSet::from([page_id.to_string()]),
        );
        true
    }

    pub fn pages(&self, customer_id: &str) -> Option<&HashSet<String>> {
        self.pages.get(customer_id)
    }

    pub fn contains(&self, customer_id: &str) -> bool {
        self.pages.contains_key(customer_id)
    }

    /// Number of distinct pages, zero for an unknown customer.
    pub fn page_count(&self, customer_id: &str) -> usize {
        self.pages.get(customer_id).map_or(0, HashSet::len)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn customers(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Customers with their page sets, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.pages.get(id).map(|pages| (id.as_str(), pages)))
    }
}

impl<C: AsRef<str>, P: AsRef<str>> Extend<(C, P)> for DailyVisitMap {
    fn extend<I: IntoIterator<Item = (C, P)>>(&mut self, iter: I) {
        for (customer_id, page_id) in iter {
            self.record(customer_id.as_ref(), page_id.as_ref());
        }
    }
}

impl<C: AsRef<str>, P: AsRef<str>> FromIterator<(C, P)> for DailyVisitMap {
    fn from_iter<I: IntoIterator<Item = (C, P)>>(iter: I) -> Self {
        let mut map = DailyVisitMap::new();
        map.extend(iter);
        map
    }
}
