//! Albion Online Data item identifiers.
//!
//! Identifiers look like `T5_PLANKS` or, for enchanted goods,
//! `T5_PLANKS_LEVEL2@2`. Tier and enchantment are not range-checked: an
//! out-of-range tier still yields a well-formed identifier the API simply
//! has no prices for.

use super::entities::ItemKind;

pub fn build_identifier(tier: u8, base_name: &str, enchantment: u8) -> String {
    let mut identifier = format!("T{tier}_{base_name}");
    if enchantment > 0 {
        identifier.push_str(&format!("_LEVEL{enchantment}@{enchantment}"));
    }
    identifier
}

/// The three identifiers involved in refining one unit of `product`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefiningRecipe {
    /// Gathered resource of the same tier, e.g. `T5_WOOD`.
    pub raw: String,
    /// Refined good one tier below, e.g. `T4_PLANKS`.
    pub crafted: String,
    pub product: String,
}

impl RefiningRecipe {
    pub fn for_item(item: ItemKind, tier: u8, enchantment: u8) -> Self {
        Self {
            raw: build_identifier(tier, item.raw_resource(), enchantment),
            crafted: build_identifier(tier.saturating_sub(1), item.code(), enchantment),
            product: build_identifier(tier, item.code(), enchantment),
        }
    }

    /// Identifiers in request order: raw, crafted, product.
    pub fn identifiers(&self) -> Vec<String> {
        vec![self.raw.clone(), self.crafted.clone(), self.product.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unenchanted_identifier_has_no_suffix() {
        for tier in 1..=8 {
            for base in ["PLANKS", "WOOD", "CLOTH"] {
                assert_eq!(build_identifier(tier, base, 0), format!("T{tier}_{base}"));
            }
        }
    }

    #[test]
    fn enchanted_identifier_repeats_level() {
        for enchantment in 1..=3 {
            assert_eq!(
                build_identifier(6, "METALBAR", enchantment),
                format!("T6_METALBAR_LEVEL{enchantment}@{enchantment}")
            );
        }
    }

    #[test]
    fn out_of_range_values_still_format() {
        assert_eq!(build_identifier(12, "LEATHER", 7), "T12_LEATHER_LEVEL7@7");
    }

    #[test]
    fn planks_recipe_uses_wood_and_lower_tier_planks() {
        let recipe = RefiningRecipe::for_item(ItemKind::Planks, 5, 0);
        assert_eq!(recipe.raw, "T5_WOOD");
        assert_eq!(recipe.crafted, "T4_PLANKS");
        assert_eq!(recipe.product, "T5_PLANKS");
        assert_eq!(recipe.identifiers(), vec!["T5_WOOD", "T4_PLANKS", "T5_PLANKS"]);
    }

    #[test]
    fn enchanted_recipe_enchants_every_ingredient() {
        let recipe = RefiningRecipe::for_item(ItemKind::Leather, 6, 2);
        assert_eq!(recipe.raw, "T6_HIDE_LEVEL2@2");
        assert_eq!(recipe.crafted, "T5_LEATHER_LEVEL2@2");
        assert_eq!(recipe.product, "T6_LEATHER_LEVEL2@2");
    }
}
