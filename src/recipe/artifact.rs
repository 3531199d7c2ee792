use super::conversion::{IntoRecipe, RawRecipe};
use super::definition::RecipeDefinition;
use crate::error::{ArtifactError, RecipeError};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// The menu for a level. Orders refer to recipes by their index in the book.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    recipes: Vec<RecipeDefinition>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<RecipeDefinition>) -> Self {
        Self { recipes }
    }

    /// Converts any authored recipes into a book, failing on the first invalid one.
    pub fn from_recipes<R, I>(recipes: I) -> Result<Self, RecipeError>
    where
        R: IntoRecipe,
        I: IntoIterator<Item = R>,
    {
        let recipes = recipes
            .into_iter()
            .map(IntoRecipe::into_recipe)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { recipes })
    }

    /// Parses a JSON array of [`RawRecipe`] entries.
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        let raw: Vec<RawRecipe> =
            serde_json::from_str(json).map_err(|e| RecipeError::Json(e.to_string()))?;
        Self::from_recipes(raw)
    }

    pub fn get(&self, order: usize) -> Option<&RecipeDefinition> {
        self.recipes.get(order)
    }

    pub fn find_by_name(&self, name: &str) -> Option<(usize, &RecipeDefinition)> {
        self.recipes
            .iter()
            .enumerate()
            .find(|(_, recipe)| recipe.name() == name)
    }

    pub fn recipes(&self) -> &[RecipeDefinition] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Saves the recipe book to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Loads a recipe book previously written by [`RecipeBook::save`].
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| ArtifactError::Io {
                path: path.to_string(),
                source,
            })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))
    }

    /// Deserializes a recipe book from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(book, _)| book) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
