//! Creacion de ingredientes a partir de su nombre
use crate::{errors::SmoothieMakerError, ingredient::Ingredient};

/// Nombres que reconoce la fabrica, en minuscula
const KNOWN_INGREDIENTS: [(&str, Ingredient); 4] = [
    ("strawberry", Ingredient::Strawberry),
    ("cherry", Ingredient::Cherry),
    ("mango", Ingredient::Mango),
    ("raspberry", Ingredient::Raspberry),
];

/// Devuelve el ingrediente que corresponde al nombre, sin importar mayusculas y minusculas.
/// Si el nombre no es conocido se devuelve `UnknownIngredient` con el nombre tal cual llego.
pub fn create_ingredient(raw_name: &str) -> Result<Ingredient, SmoothieMakerError> {
    let name = raw_name.to_lowercase();
    KNOWN_INGREDIENTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, ingredient)| *ingredient)
        .ok_or_else(|| SmoothieMakerError::UnknownIngredient(raw_name.to_string()))
}
