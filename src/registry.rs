//! Form registry for named, pre-built form schemas.
//!
//! This module provides the [`FormRegistry`] type that builds each form
//! schema once and hands out shared references to it, so live validation
//! on every keystroke never rebuilds constraint objects.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use stillwater::Validation;

use crate::error::FieldErrors;
use crate::forms;
use crate::schema::FormSchema;
use crate::values::FormValues;

/// Type alias for the schema storage map.
type FormMap = Arc<RwLock<HashMap<String, Arc<FormSchema>>>>;

/// A thread-safe registry of named form schemas.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>`:
/// - Many screens can look up and validate concurrently (read access)
/// - Registration operations are serialized (write access)
///
/// Cloning a registry yields a handle to the same storage.
///
/// # Example
///
/// ```rust
/// use gobarber_forms::{forms, FormRegistry, FormValues};
///
/// let registry = FormRegistry::with_defaults();
///
/// let result = registry
///     .validate(forms::SIGN_IN, &FormValues::new())
///     .unwrap();
/// assert!(result.is_failure());
/// ```
pub struct FormRegistry {
    forms: FormMap,
}

impl FormRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            forms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a registry holding the sign-in and sign-up schemas under
    /// [`forms::SIGN_IN`] and [`forms::SIGN_UP`].
    pub fn with_defaults() -> Self {
        let mut map = HashMap::new();
        map.insert(forms::SIGN_IN.to_string(), Arc::new(forms::sign_in()));
        map.insert(forms::SIGN_UP.to_string(), Arc::new(forms::sign_up()));
        Self {
            forms: Arc::new(RwLock::new(map)),
        }
    }

    /// Registers a form schema with the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gobarber_forms::{FormRegistry, Schema};
    ///
    /// let registry = FormRegistry::new();
    /// registry.register("forgot", Schema::form()
    ///     .field("email", Schema::string().required().email())
    /// ).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("forgot", Schema::form()).is_err());
    /// ```
    pub fn register(
        &self,
        name: impl Into<String>,
        schema: FormSchema,
    ) -> Result<Arc<FormSchema>, RegistryError> {
        let name = name.into();
        let mut forms = self.forms.write();

        if forms.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        let schema = Arc::new(schema);
        forms.insert(name, Arc::clone(&schema));
        Ok(schema)
    }

    /// Retrieves a form schema by name.
    ///
    /// Returns `None` if no schema with the given name is registered.
    pub fn get(&self, name: &str) -> Option<Arc<FormSchema>> {
        self.forms.read().get(name).cloned()
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.forms.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a snapshot against a named form schema.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::FormNotFound` if the name isn't registered.
    pub fn validate(
        &self,
        name: &str,
        values: &FormValues,
    ) -> Result<Validation<FormValues, FieldErrors>, RegistryError> {
        let schema = self
            .get(name)
            .ok_or_else(|| RegistryError::FormNotFound(name.to_string()))?;

        Ok(schema.validate(values))
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FormRegistry {
    fn clone(&self) -> Self {
        Self {
            forms: Arc::clone(&self.forms),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a form with a name that already exists.
    #[error("form '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to use a form name that doesn't exist.
    #[error("form '{0}' not found")]
    FormNotFound(String),
}
