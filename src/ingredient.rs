//! Ingredientes que acepta la licuadora
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

use crate::{errors::SmoothieMakerError, ingredient_factory::create_ingredient};

/// Frutas conocidas. Cada una tiene un nombre fijo y una forma de prepararse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ingredient {
    Strawberry,
    Cherry,
    Mango,
    Raspberry,
}

impl Ingredient {
    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Strawberry => "Strawberry",
            Ingredient::Cherry => "Cherry",
            Ingredient::Mango => "Mango",
            Ingredient::Raspberry => "Raspberry",
        }
    }

    /// Descripcion de como se prepara la fruta antes de ir a la licuadora.
    pub fn prepare(&self) -> String {
        let name = self.name();
        match self {
            Ingredient::Strawberry => format!("Washing and hulling the {}", name),
            Ingredient::Cherry => format!("Pitting the {}", name),
            Ingredient::Mango => format!("Peeling and dicing the {}", name),
            Ingredient::Raspberry => format!("Rinsing the {}", name),
        }
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ingredient {
    type Err = SmoothieMakerError;

    fn from_str(raw_name: &str) -> Result<Self, Self::Err> {
        create_ingredient(raw_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ingredient; 4] = [
        Ingredient::Strawberry,
        Ingredient::Cherry,
        Ingredient::Mango,
        Ingredient::Raspberry,
    ];

    #[test]
    fn should_have_a_capitalized_name() {
        assert_eq!("Strawberry", Ingredient::Strawberry.name());
        assert_eq!("Cherry", Ingredient::Cherry.name());
        assert_eq!("Mango", Ingredient::Mango.name());
        assert_eq!("Raspberry", Ingredient::Raspberry.name());
    }

    #[test]
    fn should_prepare_every_ingredient_the_same_way_each_time() {
        for ingredient in ALL {
            let preparation = ingredient.prepare();
            assert_eq!(false, preparation.is_empty());
            assert_eq!(preparation, ingredient.prepare());
            assert!(preparation.contains(ingredient.name()));
        }
    }

    #[test]
    fn should_have_a_different_preparation_for_each_ingredient() {
        assert_eq!("Pitting the Cherry", Ingredient::Cherry.prepare());
        assert_eq!("Peeling and dicing the Mango", Ingredient::Mango.prepare());
        assert_ne!(Ingredient::Strawberry.prepare(), Ingredient::Raspberry.prepare());
    }

    #[test]
    fn should_display_the_name() {
        assert_eq!("Mango", format!("{}", Ingredient::Mango));
    }

    #[test]
    fn should_parse_an_ingredient_from_a_string() {
        let ingredient: Result<Ingredient, _> = "RaspBerry".parse();
        assert_eq!(Ok(Ingredient::Raspberry), ingredient);
    }

    #[test]
    fn should_serialize_as_the_name() {
        let json = serde_json::to_string(&Ingredient::Strawberry).unwrap();
        assert_eq!("\"Strawberry\"", json);
    }
}
