//! Catalog filtering: category selection and price bands.

use crate::catalog::{Category, Product};
use crate::money::Money;

/// Category filter: a single category or no restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    Todos,
    /// Only products in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::Todos => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// The selector value (e.g., "Todos", "Casa").
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::Todos => "Todos",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a selector value.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "Todos" {
            Some(CategoryFilter::Todos)
        } else {
            Category::parse(s).map(CategoryFilter::Only)
        }
    }
}

/// Price band selector.
///
/// Bands carry the labels and boundaries of the original storefront UI.
/// The 0-100 and 101-300 bands do not meet: a price in (100, 101] matches
/// neither, only `Todos`. The same holds for (300, 301] between the next
/// two bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceBand {
    /// No price restriction.
    #[default]
    Todos,
    /// Up to R$ 100 inclusive.
    UpTo100,
    /// Above R$ 101, up to R$ 300 inclusive.
    From101To300,
    /// Above R$ 301, up to R$ 500 inclusive.
    From301To500,
    /// Above R$ 500.
    Above500,
}

impl PriceBand {
    /// All bands, in selector order.
    pub const ALL: [PriceBand; 5] = [
        PriceBand::Todos,
        PriceBand::UpTo100,
        PriceBand::From101To300,
        PriceBand::From301To500,
        PriceBand::Above500,
    ];

    /// The selector value (e.g., "0-100").
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Todos => "Todos",
            PriceBand::UpTo100 => "0-100",
            PriceBand::From101To300 => "101-300",
            PriceBand::From301To500 => "301-500",
            PriceBand::Above500 => "500+",
        }
    }

    /// The label shown in the price selector.
    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Todos => "Todos os preços",
            PriceBand::UpTo100 => "Até R$ 100",
            PriceBand::From101To300 => "R$ 101 - R$ 300",
            PriceBand::From301To500 => "R$ 301 - R$ 500",
            PriceBand::Above500 => "Acima de R$ 500",
        }
    }

    /// Parse a selector value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Todos" => Some(PriceBand::Todos),
            "0-100" => Some(PriceBand::UpTo100),
            "101-300" => Some(PriceBand::From101To300),
            "301-500" => Some(PriceBand::From301To500),
            "500+" => Some(PriceBand::Above500),
            _ => None,
        }
    }

    /// Whether `price` falls inside this band.
    pub fn matches(&self, price: Money) -> bool {
        let cents = price.cents();
        match self {
            PriceBand::Todos => true,
            PriceBand::UpTo100 => cents <= 100_00,
            PriceBand::From101To300 => cents > 101_00 && cents <= 300_00,
            PriceBand::From301To500 => cents > 301_00 && cents <= 500_00,
            PriceBand::Above500 => cents > 500_00,
        }
    }
}

/// Current filter selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Category restriction.
    pub category: CategoryFilter,
    /// Price band restriction.
    pub price_band: PriceBand,
}

impl FilterState {
    /// Check if both selectors are on "Todos".
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::Todos && self.price_band == PriceBand::Todos
    }
}

/// Filter `catalog` by the given selections.
///
/// Pure function: preserves catalog order and copies the matching products.
pub fn filter_products(catalog: &[Product], filter: &FilterState) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| filter.category.matches(p) && filter.price_band.matches(p.price))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str, reais: f64, category: Category) -> Product {
        Product::new(id, name, Money::from_reais(reais), category)
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "A", 50.0, Category::Casa),
            product(2, "B", 400.0, Category::Livros),
            product(3, "C", 150.0, Category::Casa),
            product(4, "D", 800.0, Category::Roupas),
        ]
    }

    #[test]
    fn test_unfiltered_is_identity() {
        let catalog = sample_catalog();
        let result = filter_products(&catalog, &FilterState::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_category_filter() {
        let catalog = sample_catalog();
        let filter = FilterState {
            category: CategoryFilter::Only(Category::Casa),
            price_band: PriceBand::Todos,
        };

        let result = filter_products(&catalog, &filter);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "A");
        assert_eq!(result[1].name, "C");
    }

    #[test]
    fn test_category_scenario() {
        let catalog = vec![
            product(1, "A", 50.0, Category::Casa),
            product(2, "B", 400.0, Category::Livros),
        ];
        let filter = FilterState {
            category: CategoryFilter::Only(Category::Casa),
            price_band: PriceBand::Todos,
        };

        let result = filter_products(&catalog, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn test_band_membership() {
        assert!(PriceBand::UpTo100.matches(Money::from_reais(100.0)));
        assert!(!PriceBand::UpTo100.matches(Money::from_reais(100.01)));

        assert!(!PriceBand::From101To300.matches(Money::from_reais(101.0)));
        assert!(PriceBand::From101To300.matches(Money::from_reais(101.01)));
        assert!(PriceBand::From101To300.matches(Money::from_reais(300.0)));

        assert!(!PriceBand::From301To500.matches(Money::from_reais(301.0)));
        assert!(PriceBand::From301To500.matches(Money::from_reais(500.0)));

        assert!(!PriceBand::Above500.matches(Money::from_reais(500.0)));
        assert!(PriceBand::Above500.matches(Money::from_reais(500.01)));
    }

    #[test]
    fn test_band_gap_matches_only_todos() {
        for reais in [100.5, 300.5] {
            let price = Money::from_reais(reais);
            let matching: Vec<_> = PriceBand::ALL
                .iter()
                .filter(|band| band.matches(price))
                .collect();
            assert_eq!(matching, [&PriceBand::Todos], "price {reais} escaped the gap");
        }
    }

    #[test]
    fn test_combined_filters() {
        let catalog = sample_catalog();
        let filter = FilterState {
            category: CategoryFilter::Only(Category::Casa),
            price_band: PriceBand::From101To300,
        };

        let result = filter_products(&catalog, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "C");
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(CategoryFilter::parse("Todos"), Some(CategoryFilter::Todos));
        assert_eq!(
            CategoryFilter::parse("Beleza"),
            Some(CategoryFilter::Only(Category::Beleza))
        );
        assert_eq!(CategoryFilter::parse("Games"), None);

        for band in PriceBand::ALL {
            assert_eq!(PriceBand::parse(band.as_str()), Some(band));
        }
        assert_eq!(PriceBand::parse("100-200"), None);
    }
}
