//! Ingredient naming integration tests.

use alch_ingredients::{AlchemicalIngredient, IngredientError, IngredientType, Name, Temperature};
use alch_measure::{Quantity, State, Unit};

fn name(raw: &str) -> Name {
    Name::new(raw).unwrap()
}

#[test]
fn name_grammar() {
    assert!(Name::new("Water").is_ok());
    assert!(matches!(
        Name::new("Heated"),
        Err(IngredientError::InvalidNameFormat { .. })
    ));
    assert!(matches!(
        Name::new("ab"),
        Err(IngredientError::InvalidNameFormat { .. })
    ));
}

#[test]
fn mint_water_mixture() {
    let t = Temperature::new(0, 20);
    let ty = IngredientType::new(vec![name("Mint"), name("Water")], State::Liquid, t).unwrap();
    assert_eq!(ty.simple_name(), "Mint mixed with Water");
}

#[test]
fn special_names() {
    let t = Temperature::ZERO;
    let mut mix = IngredientType::new(
        vec![name("Aaa"), name("Bbb"), name("Ccc")],
        State::Powder,
        t,
    )
    .unwrap();
    assert!(mix.is_mixture());
    assert!(mix.set_special_name(name("Dust")).is_ok());
    assert_eq!(mix.full_name(t), "Dust (Aaa mixed with Bbb and Ccc)");

    let mut pure = IngredientType::pure(name("Salt"), State::Powder, t);
    assert!(matches!(
        pure.set_special_name(name("Dust")),
        Err(IngredientError::IllegalSpecialNameAssignment { .. })
    ));
}

#[test]
fn brewing_session() {
    let t = Temperature::new(0, 20);
    let tea = IngredientType::new(vec![name("Water"), name("Green Leaf")], State::Liquid, t)
        .unwrap();
    let mut cup = AlchemicalIngredient::of_type(tea, Quantity::new(2, Unit::Vial).unwrap())
        .unwrap();
    assert_eq!(cup.full_name(), "Green Leaf mixed with Water");

    cup.heat(80);
    assert_eq!(cup.full_name(), "Heated Green Leaf mixed with Water");
    assert_eq!(cup.temperature().as_pair(), (0, 100));

    cup.cool(20_000);
    assert_eq!(cup.temperature().coldness(), Temperature::MAX_VALUE);
    assert_eq!(cup.full_name(), "Cooled Green Leaf mixed with Water");
}

#[test]
fn powder_ingredient_rejects_liquid_units() {
    let salt = IngredientType::pure(name("Salt"), State::Powder, Temperature::ZERO);
    let err = AlchemicalIngredient::of_type(salt, Quantity::new(1, Unit::Drop).unwrap())
        .unwrap_err();
    assert_eq!(err.to_string(), "Drop is not a representative unit for Powder");
}
