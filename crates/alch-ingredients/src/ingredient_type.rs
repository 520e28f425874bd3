//! Ingredient types: pure or mixed.

use crate::error::{IngredientError, IngredientResult};
use crate::name::Name;
use crate::temperature::Temperature;
use alch_measure::State;
use std::cmp::Ordering;

/// Kind of ingredient, defined by its component names.
///
/// One component makes a pure type, more than one a mixture. Only mixtures
/// may carry a special name; it is the one thing that can change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IngredientType {
    components: Vec<Name>,
    state: State,
    standard_temperature: Temperature,
    special_name: Option<Name>,
}

impl IngredientType {
    /// Build a type from its component names; an empty list is `InvalidComponents`.
    pub fn new(
        components: Vec<Name>,
        state: State,
        standard_temperature: Temperature,
    ) -> IngredientResult<Self> {
        if components.is_empty() {
            return Err(IngredientError::InvalidComponents);
        }
        Ok(Self {
            components,
            state,
            standard_temperature,
            special_name: None,
        })
    }

    /// Pure type with a single component.
    pub fn pure(name: Name, state: State, standard_temperature: Temperature) -> Self {
        Self {
            components: vec![name],
            state,
            standard_temperature,
            special_name: None,
        }
    }

    /// Pure type from an unvalidated name.
    pub fn named(
        name: &str,
        state: State,
        standard_temperature: Temperature,
    ) -> IngredientResult<Self> {
        Ok(Self::pure(Name::new(name)?, state, standard_temperature))
    }

    /// Liquid water at `[0, 20]`, the default ingredient type.
    pub fn water() -> Self {
        Self::pure(Name::water(), State::Liquid, Temperature::new(0, 20))
    }

    pub fn components(&self) -> &[Name] {
        &self.components
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn standard_temperature(&self) -> Temperature {
        self.standard_temperature
    }

    pub fn special_name(&self) -> Option<&Name> {
        self.special_name.as_ref()
    }

    pub fn has_special_name(&self) -> bool {
        self.special_name.is_some()
    }

    pub fn is_mixture(&self) -> bool {
        self.components.len() > 1
    }

    /// Set or replace the special name of a mixture.
    ///
    /// Pure types are rejected with `IllegalSpecialNameAssignment`.
    pub fn set_special_name(&mut self, name: Name) -> IngredientResult<()> {
        if !self.is_mixture() {
            let type_name = self.simple_name();
            tracing::debug!(%type_name, special = %name, "special name refused on pure type");
            return Err(IngredientError::IllegalSpecialNameAssignment { type_name });
        }
        self.special_name = Some(name);
        Ok(())
    }

    /// `"Water"` for a pure type; `"Mint mixed with Sugar and Water"` for a
    /// mixture, components in lexicographic order.
    pub fn simple_name(&self) -> String {
        let mut sorted: Vec<&Name> = self.components.iter().collect();
        sorted.sort();

        let (first, rest) = match sorted.split_first() {
            Some(split) => split,
            None => return String::new(),
        };
        let mut name = first.to_string();
        if let Some((last, middle)) = rest.split_last() {
            name.push_str(" mixed with ");
            if !middle.is_empty() {
                let middle: Vec<&str> = middle.iter().map(|n| n.as_str()).collect();
                name.push_str(&middle.join(", "));
                name.push_str(" and ");
            }
            name.push_str(last.as_str());
        }
        name
    }

    /// Display name for an instance at `live` temperature.
    ///
    /// A special name wins as `"<special> (<simple>)"`. Otherwise the simple
    /// name is prefixed with `"Cooled "` or `"Heated "` when `live` differs
    /// from the standard temperature.
    pub fn full_name(&self, live: Temperature) -> String {
        if let Some(special) = &self.special_name {
            return format!("{special} ({})", self.simple_name());
        }
        let prefix = match live.cmp(&self.standard_temperature) {
            Ordering::Less => "Cooled ",
            Ordering::Greater => "Heated ",
            Ordering::Equal => "",
        };
        format!("{prefix}{}", self.simple_name())
    }
}
