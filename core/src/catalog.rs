//! The fixed topping catalog.
//!
//! Toppings are presentation data, not user data: a read-only ordered list
//! defined at startup. Form values reference toppings by id only.

/// A single multi-select catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub label: &'static str,
}

/// The full catalog, in display order. Ids are stable wire identifiers.
pub const TOPPINGS: &[Topping] = &[
    Topping { id: "1", label: "Pepperoni" },
    Topping { id: "2", label: "Green Peppers" },
    Topping { id: "3", label: "Pineapple" },
    Topping { id: "4", label: "Mushrooms" },
    Topping { id: "5", label: "Ham" },
];

/// Look up a catalog entry by id.
pub fn topping_by_id(id: &str) -> Option<&'static Topping> {
    TOPPINGS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let ids: Vec<&str> = TOPPINGS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn topping_by_id_finds_known_entries() {
        assert_eq!(topping_by_id("3").unwrap().label, "Pineapple");
        assert!(topping_by_id("99").is_none());
    }
}
