//! Arma un licuado a partir de una lista de nombres de ingredientes.
use log::{info, warn};

use crate::{
    blender::{BlendReport, Blender},
    ingredient::Ingredient,
    ingredient_factory::create_ingredient,
};

/// Resumen de un pedido: cuantos ingredientes entraron a la licuadora,
/// que nombres no se reconocieron, y el resultado del licuado.
#[derive(Debug, PartialEq, Eq)]
pub struct BatchSummary {
    pub added: usize,
    pub rejected: Vec<String>,
    pub report: Option<BlendReport>,
}

/// Coordina la fabrica de ingredientes con la licuadora que recibe.
pub struct SmoothieMaker<'a> {
    blender: &'a mut Blender,
}

impl<'a> SmoothieMaker<'a> {
    pub fn new(blender: &'a mut Blender) -> SmoothieMaker<'a> {
        SmoothieMaker { blender }
    }

    /// Agrega cada ingrediente pedido a la licuadora y la pone a funcionar.
    /// Un nombre desconocido se reporta y no corta el resto del pedido.
    pub fn prepare_smoothie(&mut self, names: &[&str]) -> BatchSummary {
        let (added, rejected) = self.add_ingredients(names);
        println!(
            "[SMOOTHIE MAKER] Blender contents: {}",
            format_contents(&self.blender.contents())
        );

        let report = self.blender.start();

        if self.blender.is_empty() {
            println!("[SMOOTHIE MAKER] Blender is empty and ready for the next batch");
        }

        BatchSummary {
            added,
            rejected,
            report,
        }
    }

    fn add_ingredients(&mut self, names: &[&str]) -> (usize, Vec<String>) {
        let mut added = 0;
        let mut rejected = Vec::new();
        for name in names {
            match create_ingredient(name) {
                Ok(ingredient) => {
                    self.blender.add(ingredient);
                    added += 1;
                }
                Err(error) => {
                    warn!("[SMOOTHIE MAKER] Skipped {:?}: {}", name, error);
                    println!("[SMOOTHIE MAKER] Error: {}", error);
                    rejected.push(name.to_string());
                }
            }
        }
        info!(
            "[SMOOTHIE MAKER] Added {} ingredients, rejected {}",
            added,
            rejected.len()
        );
        (added, rejected)
    }
}

fn format_contents(contents: &[Ingredient]) -> String {
    if contents.is_empty() {
        return String::from("(empty)");
    }
    contents
        .iter()
        .map(Ingredient::name)
        .collect::<Vec<&str>>()
        .join(", ")
}
