//! Representacion de la licuadora, el contenedor donde se juntan los ingredientes
use std::{thread, time::Duration};

use log::{debug, info, warn};
use serde::Serialize;

use crate::{constants::BLEND_WAIT_IN_SECS, ingredient::Ingredient};

/// Resultado de un licuado. Tiene los nombres de los ingredientes en el orden en que se agregaron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlendReport {
    pub ingredients: Vec<&'static str>,
}

/// Licuadora. Acumula los ingredientes hasta que se la pone a funcionar con `start`,
/// y ahi se vacia por completo.
/// Los ingredientes solo se pueden ver a traves de una copia (`contents`).
pub struct Blender {
    ingredients: Vec<Ingredient>,
    blend_wait: Duration,
}

impl Blender {
    pub fn new(blend_wait: Duration) -> Blender {
        Blender {
            ingredients: Vec::new(),
            blend_wait,
        }
    }

    pub fn add(&mut self, ingredient: Ingredient) {
        info!(
            "[BLENDER] Added {} to the blender. {}",
            ingredient,
            ingredient.prepare()
        );
        self.ingredients.push(ingredient);
    }

    pub fn contents(&self) -> Vec<Ingredient> {
        self.ingredients.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Licua lo que haya en la licuadora y la deja vacia.
    /// Bloquea el hilo actual durante todo el tiempo de espera configurado, no se puede cancelar.
    /// Si esta vacia no hace nada y devuelve `None`.
    pub fn start(&mut self) -> Option<BlendReport> {
        if self.is_empty() {
            warn!("[BLENDER] Cannot blend an empty blender, add some ingredients first");
            return None;
        }

        info!(
            "[BLENDER] Started blending {} ingredients",
            self.len()
        );
        thread::sleep(self.blend_wait);

        let report = BlendReport {
            ingredients: self.ingredients.iter().map(Ingredient::name).collect(),
        };
        info!(
            "[BLENDER] Smoothie ready with: {}",
            report.ingredients.join(", ")
        );
        if let Ok(json) = serde_json::to_string(&report) {
            debug!("[BLENDER] Report {}", json);
        }

        self.ingredients.clear();
        Some(report)
    }
}

impl Default for Blender {
    fn default() -> Self {
        Blender::new(Duration::from_secs(BLEND_WAIT_IN_SECS))
    }
}
