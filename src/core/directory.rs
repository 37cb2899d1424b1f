//! Id and name lookups over a business's reference collections.
//!
//! Ids are assumed unique but not checked; when a collection repeats an id the
//! first occurrence wins.

use crate::models::{BusinessAggregate, Client, Package, Service, TeamMember};
use std::collections::HashMap;

/// Maximum number of suggestions Discord accepts for an autocomplete.
pub const MAX_SUGGESTIONS: usize = 25;

/// A borrowed collection with an id index.
#[derive(Debug, Clone)]
pub struct Index<'a, T> {
    items: &'a [T],
    by_id: HashMap<i64, &'a T>,
}

impl<'a, T> Index<'a, T> {
    fn new(items: &'a [T], id_of: impl Fn(&T) -> i64) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        for item in items {
            by_id.entry(id_of(item)).or_insert(item);
        }
        Self { items, by_id }
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&'a T> {
        self.by_id.get(&id).copied()
    }

    /// First item whose label equals `query`, ignoring case and surrounding spaces.
    pub fn find_by_label(&self, query: &str, label_of: impl Fn(&T) -> String) -> Option<&'a T> {
        let wanted = query.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.items
            .iter()
            .find(|item| label_of(item).trim().to_lowercase() == wanted)
    }

    /// Labels containing `partial` (case-insensitive), sorted, at most
    /// [`MAX_SUGGESTIONS`].
    pub fn suggest(&self, partial: &str, label_of: impl Fn(&T) -> String) -> Vec<String> {
        let partial_lower = partial.trim().to_lowercase();
        let mut matching: Vec<String> = self
            .items
            .iter()
            .map(label_of)
            .filter(|label| label.to_lowercase().contains(&partial_lower))
            .collect();
        matching.sort();
        matching.dedup();
        matching.truncate(MAX_SUGGESTIONS);
        matching
    }
}

/// Lookup tables for the four collections appointments reference.
#[derive(Debug, Clone)]
pub struct Directory<'a> {
    /// Clients
    pub clients: Index<'a, Client>,
    /// Staff
    pub staff: Index<'a, TeamMember>,
    /// Services
    pub services: Index<'a, Service>,
    /// Packages
    pub packages: Index<'a, Package>,
}

impl<'a> Directory<'a> {
    /// Indexes the given collections.
    #[must_use]
    pub fn new(
        clients: &'a [Client],
        staff: &'a [TeamMember],
        services: &'a [Service],
        packages: &'a [Package],
    ) -> Self {
        Self {
            clients: Index::new(clients, |c| c.id),
            staff: Index::new(staff, |m| m.id),
            services: Index::new(services, |s| s.id),
            packages: Index::new(packages, |p| p.id),
        }
    }

    /// Indexes the collections of a business aggregate.
    #[must_use]
    pub fn from_aggregate(aggregate: &'a BusinessAggregate) -> Self {
        Self::new(
            &aggregate.clients,
            &aggregate.team_members,
            &aggregate.services,
            &aggregate.packages,
        )
    }

    /// Finds a client by exact name or phone number.
    #[must_use]
    pub fn find_client(&self, query: &str) -> Option<&'a Client> {
        self.clients
            .find_by_label(query, |c| c.client_name.clone())
            .or_else(|| self.clients.find_by_label(query, |c| c.client_phone.clone()))
    }

    /// Finds a team member by full name.
    #[must_use]
    pub fn find_staff(&self, query: &str) -> Option<&'a TeamMember> {
        self.staff.find_by_label(query, TeamMember::full_name)
    }

    /// Finds a service by name.
    #[must_use]
    pub fn find_service(&self, query: &str) -> Option<&'a Service> {
        self.services
            .find_by_label(query, |s| s.service_name.clone())
    }

    /// Finds a package by name.
    #[must_use]
    pub fn find_package(&self, query: &str) -> Option<&'a Package> {
        self.packages
            .find_by_label(query, |p| p.package_name.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_aggregate;

    #[test]
    fn test_lookup_by_id() {
        let aggregate = sample_aggregate();
        let directory = Directory::from_aggregate(&aggregate);
        assert_eq!(directory.clients.get(1).unwrap().client_name, "Asha");
        assert_eq!(directory.staff.get(2).unwrap().full_name(), "Priya Shah");
        assert!(directory.services.get(99).is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut aggregate = sample_aggregate();
        let mut shadow = aggregate.clients[0].clone();
        shadow.client_name = "Shadow".to_string();
        aggregate.clients.push(shadow);

        let directory = Directory::from_aggregate(&aggregate);
        assert_eq!(directory.clients.get(1).unwrap().client_name, "Asha");
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let aggregate = sample_aggregate();
        let directory = Directory::from_aggregate(&aggregate);
        assert_eq!(directory.find_client(" asha ").unwrap().id, 1);
        assert_eq!(directory.find_client("9000000002").unwrap().id, 2);
        assert_eq!(directory.find_staff("RAVI KUMAR").unwrap().id, 1);
        assert_eq!(directory.find_service("hair spa").unwrap().id, 2);
        assert_eq!(directory.find_package("Bridal Glow").unwrap().id, 1);
        assert!(directory.find_client("").is_none());
        assert!(directory.find_service("Manicure").is_none());
    }

    #[test]
    fn test_suggestions_are_sorted_and_filtered() {
        let aggregate = sample_aggregate();
        let directory = Directory::from_aggregate(&aggregate);
        let names = directory.services.suggest("hair", |s| s.service_name.clone());
        assert_eq!(names, vec!["Hair Spa".to_string(), "Haircut".to_string()]);
        assert!(directory.clients.suggest("zzz", |c| c.client_name.clone()).is_empty());
    }
}
