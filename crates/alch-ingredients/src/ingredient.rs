//! Ingredient instances.

use crate::error::IngredientResult;
use crate::ingredient_type::IngredientType;
use crate::name::Name;
use crate::temperature::Temperature;
use alch_measure::{Capacity, Quantity, State};

/// A concrete amount of some ingredient type.
///
/// Type, state and quantity are fixed at construction. The temperature is
/// replaced as a whole by [`heat`](Self::heat) and [`cool`](Self::cool).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlchemicalIngredient {
    ingredient_type: IngredientType,
    state: State,
    quantity: Quantity,
    temperature: Temperature,
}

impl AlchemicalIngredient {
    /// Create an ingredient; the quantity's unit must be representative for `state`.
    pub fn new(
        ingredient_type: IngredientType,
        state: State,
        quantity: Quantity,
        temperature: Temperature,
    ) -> IngredientResult<Self> {
        state.ensure_representative(quantity.unit())?;
        Ok(Self {
            ingredient_type,
            state,
            quantity,
            temperature,
        })
    }

    /// Ingredient in its type's standard state and temperature.
    pub fn of_type(ingredient_type: IngredientType, quantity: Quantity) -> IngredientResult<Self> {
        let state = ingredient_type.state();
        let temperature = ingredient_type.standard_temperature();
        Self::new(ingredient_type, state, quantity, temperature)
    }

    /// Water at its standard conditions.
    pub fn water(quantity: Quantity) -> IngredientResult<Self> {
        Self::of_type(IngredientType::water(), quantity)
    }

    pub fn ingredient_type(&self) -> &IngredientType {
        &self.ingredient_type
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn heat(&mut self, amount: i64) {
        self.temperature = self.temperature.heat(amount);
    }

    pub fn cool(&mut self, amount: i64) {
        self.temperature = self.temperature.cool(amount);
    }

    pub fn simple_name(&self) -> String {
        self.ingredient_type.simple_name()
    }

    pub fn special_name(&self) -> Option<&Name> {
        self.ingredient_type.special_name()
    }

    /// Full name at the current temperature.
    pub fn full_name(&self) -> String {
        self.ingredient_type.full_name(self.temperature)
    }

    /// Whether a container of `capacity` could hold this ingredient.
    pub fn fits_in(&self, capacity: &Capacity) -> bool {
        capacity.can_hold(self.state, &self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngredientError;
    use alch_measure::{MeasureError, Unit};

    fn q(amount: i64, unit: Unit) -> Quantity {
        Quantity::new(amount, unit).unwrap()
    }

    #[test]
    fn unit_must_suit_state() {
        let salt = IngredientType::named("Salt", State::Powder, Temperature::ZERO).unwrap();
        assert!(AlchemicalIngredient::of_type(salt.clone(), q(3, Unit::Pinch)).is_ok());
        assert_eq!(
            AlchemicalIngredient::of_type(salt, q(1, Unit::Vial)),
            Err(IngredientError::Measure(MeasureError::NonRepresentativeUnit {
                state: State::Powder,
                unit: Unit::Vial,
            }))
        );
    }

    #[test]
    fn explicit_state_overrides_standard() {
        let salt = IngredientType::named("Salt", State::Powder, Temperature::ZERO).unwrap();
        let brine =
            AlchemicalIngredient::new(salt, State::Liquid, q(2, Unit::Bottle), Temperature::ZERO)
                .unwrap();
        assert_eq!(brine.state(), State::Liquid);
    }

    #[test]
    fn water_defaults() {
        let water = AlchemicalIngredient::water(q(1, Unit::Vial)).unwrap();
        assert_eq!(water.simple_name(), "Water");
        assert_eq!(water.temperature().as_pair(), (0, 20));
        assert_eq!(water.full_name(), "Water");
        assert!(water.special_name().is_none());
    }

    #[test]
    fn heating_changes_full_name() {
        let mut water = AlchemicalIngredient::water(q(1, Unit::Vial)).unwrap();
        water.heat(10);
        assert_eq!(water.temperature().hotness(), 30);
        assert_eq!(water.full_name(), "Heated Water");

        water.cool(40);
        assert_eq!(water.temperature().as_pair(), (10, 0));
        assert_eq!(water.full_name(), "Cooled Water");

        water.heat(10);
        assert_eq!(water.full_name(), "Cooled Water");
        water.heat(20);
        assert_eq!(water.full_name(), "Water");
    }

    #[test]
    fn fits_in_container() {
        let water = AlchemicalIngredient::water(q(3, Unit::Vial)).unwrap();
        assert!(water.fits_in(&Capacity::of(Unit::Bottle).unwrap()));
        assert!(!water.fits_in(&Capacity::of(Unit::Vial).unwrap()));
        assert!(!water.fits_in(&Capacity::of(Unit::Chest).unwrap()));
    }
}
