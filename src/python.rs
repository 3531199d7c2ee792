use crate::burger::AssembledBurger;
use crate::config::GameConfig;
use crate::evaluator::{CustomerMood, EvaluationResult, SoundCue};
use crate::ingredient::IngredientId;
use crate::recipe::RecipeBook;
use crate::shift::Shift;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for EvaluationResult {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);

        dict.set_item("is_perfect", self.is_perfect)?;
        dict.set_item("accuracy", self.accuracy)?;
        dict.set_item("score", self.score)?;
        dict.set_item("health_change", self.health_change)?;
        dict.set_item("feedback", self.feedback.as_str())?;

        let mood = match self.mood {
            CustomerMood::Happy => "happy",
            CustomerMood::Normal => "normal",
            CustomerMood::Sad => "sad",
        };
        dict.set_item("mood", mood)?;

        let sound = match self.sound_cue {
            SoundCue::Score => "score",
            SoundCue::LostHealth => "lost_health",
        };
        dict.set_item("sound_cue", sound)?;
        dict.set_item("reason", self.reason)?;

        Ok(dict)
    }
}

/// The burger kitchen of one play session.
///
/// Holds the recipe book, the drop area stock and the running score and health.
/// A game engine forwards drops and submissions to it and reads back plain results.
#[pyclass(name = "Kitchen")]
struct KitchenPy {
    shift: Shift,
}

#[pymethods]
impl KitchenPy {
    /// Creates a kitchen from a JSON recipe list and an optional JSON config.
    ///
    /// Raises:
    ///     ValueError: If either document is malformed or a recipe names an
    ///         unknown ingredient.
    #[new]
    #[pyo3(signature = (recipes_json, config_json=None))]
    fn new(recipes_json: &str, config_json: Option<&str>) -> PyResult<Self> {
        let book =
            RecipeBook::from_json(recipes_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let config = match config_json {
            Some(json) => {
                GameConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?
            }
            None => GameConfig::default(),
        };
        Ok(KitchenPy {
            shift: Shift::new(book, config),
        })
    }

    /// Drops an ingredient by sprite name. Returns False if it was refused.
    fn drop_ingredient(&mut self, name: &str) -> bool {
        self.shift.drop_ingredient(name)
    }

    /// The stacked ingredient names, bottom layer first.
    fn sequence(&self) -> Vec<String> {
        self.shift
            .stack()
            .sequence()
            .into_iter()
            .map(|id| id.name().to_string())
            .collect()
    }

    fn is_complete(&self) -> bool {
        self.shift.stack().is_complete()
    }

    /// Serves the current stack for the given order and returns the result dict.
    ///
    /// Raises:
    ///     IndexError: If the order number is not in the recipe book.
    fn submit(&mut self, order: usize, elapsed_secs: f32) -> PyResult<EvaluationResult> {
        self.shift
            .submit(order, elapsed_secs)
            .map_err(|e| PyIndexError::new_err(e.to_string()))
    }

    /// Scores an arbitrary ingredient list without touching the session.
    fn evaluate(
        &self,
        ingredients: Vec<String>,
        order: usize,
        elapsed_secs: f32,
    ) -> PyResult<EvaluationResult> {
        let recipe = self
            .shift
            .book()
            .get(order)
            .ok_or_else(|| PyIndexError::new_err(format!("Order {} does not exist", order)))?;
        let burger = ingredients
            .iter()
            .map(|name| {
                IngredientId::lookup(name)
                    .ok_or_else(|| PyValueError::new_err(format!("'{}' is not an ingredient", name)))
            })
            .collect::<PyResult<AssembledBurger>>()?;
        Ok(self.shift.evaluator().evaluate(&burger, recipe, elapsed_secs))
    }

    fn reset(&mut self) {
        self.shift.stack_mut().reset();
    }

    fn replenish_all(&mut self) {
        self.shift.stack_mut().replenish_all();
    }

    #[getter]
    fn score(&self) -> i64 {
        self.shift.score()
    }

    #[getter]
    fn health(&self) -> f32 {
        self.shift.health()
    }

    #[getter]
    fn dialog(&self) -> String {
        self.shift.dialog().to_string()
    }
}

/// Burger assembly rules for Python game hosts.
#[pymodule]
fn burger_stack(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<KitchenPy>()?;
    Ok(())
}
