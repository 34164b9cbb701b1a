//! UC package catalog
use serde::Serialize;

/// A purchasable UC package.
///
/// `amount` is the total UC credited, bonus included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Package {
    pub id: u32,
    pub amount: u32,
    /// Price in whole rubles
    pub price: u32,
    pub bonus: Option<u32>,
    pub popular: bool,
}

impl Package {
    const fn plain(id: u32, amount: u32, price: u32) -> Self {
        Self {
            id,
            amount,
            price,
            bonus: None,
            popular: false,
        }
    }

    const fn with_bonus(id: u32, amount: u32, price: u32, bonus: u32) -> Self {
        Self {
            id,
            amount,
            price,
            bonus: Some(bonus),
            popular: false,
        }
    }

    const fn popular(mut self) -> Self {
        self.popular = true;
        self
    }

    /// UC credited without the bonus.
    #[must_use]
    pub const fn base_amount(&self) -> u32 {
        match self.bonus {
            Some(bonus) => self.amount.saturating_sub(bonus),
            None => self.amount,
        }
    }
}

const PACKAGES: &[Package] = &[
    Package::plain(1, 60, 60),
    Package::with_bonus(2, 325, 300, 25),
    Package::with_bonus(3, 660, 600, 60).popular(),
    Package::with_bonus(4, 1800, 1500, 300),
    Package::with_bonus(5, 3850, 3000, 850),
    Package::with_bonus(6, 8100, 6000, 2100),
];

/// All packages in display order.
#[must_use]
pub const fn packages() -> &'static [Package] {
    PACKAGES
}

/// Look up a package by its catalog id.
#[must_use]
pub fn find_package(id: u32) -> Option<&'static Package> {
    PACKAGES.iter().find(|pkg| pkg.id == id)
}
