//! Persistent store of named dock layouts.
//!
//! Every mutation is applied to a copy of the model, written through to the
//! store file, and only then committed. A failed operation leaves both the
//! in-memory model and the file as they were.

pub mod file;
pub mod name;
pub mod profile;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::host::LayoutHost;

pub use profile::{LayoutEntry, Profile};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreModel {
    pub(crate) layouts: BTreeMap<String, Profile>,
    pub(crate) default_name: Option<String>,
}

#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    model: StoreModel,
}

impl ProfileStore {
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let model = file::load(&path)?;
        info!(
            path = %path.display(),
            layouts = model.layouts.len(),
            "layout store opened"
        );
        Ok(Self { path, model })
    }

    /// Discards the in-memory model and reads the store file again.
    pub fn reload(&mut self) -> AppResult<()> {
        self.model = file::load(&self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.model.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.layouts.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.model.layouts.contains_key(name::lookup_key(name))
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.model.layouts.get(name::lookup_key(name))
    }

    /// Layouts sorted by name.
    pub fn list(&self) -> Vec<LayoutEntry> {
        self.model
            .layouts
            .values()
            .map(|profile| LayoutEntry {
                name: profile.name().to_string(),
                is_default: self.model.default_name.as_deref() == Some(profile.name()),
                saved: profile.is_saved(),
            })
            .collect()
    }

    pub fn get_default(&self) -> Option<&str> {
        self.model.default_name.as_deref()
    }

    pub fn create(&mut self, name: &str) -> AppResult<String> {
        let name = self.available_name(name)?;

        let mut next = self.model.clone();
        next.layouts.insert(name.clone(), Profile::new(name.clone()));
        self.commit(next)?;

        info!(layout = %name, "layout created");
        Ok(name)
    }

    pub fn create_with_state(&mut self, name: &str, state: Vec<u8>) -> AppResult<String> {
        let name = self.available_name(name)?;
        if state.is_empty() {
            return Err(AppError::EmptyState(name));
        }

        let mut next = self.model.clone();
        next.layouts
            .insert(name.clone(), Profile::with_state(name.clone(), state));
        self.commit(next)?;

        info!(layout = %name, "layout created with captured state");
        Ok(name)
    }

    /// Replaces the state of an existing layout. An empty `state` means the
    /// capture failed and is rejected.
    pub fn save(&mut self, name: &str, state: Vec<u8>) -> AppResult<()> {
        let key = self.existing_key(name)?;
        if state.is_empty() {
            return Err(AppError::EmptyState(key));
        }

        let mut next = self.model.clone();
        if let Some(profile) = next.layouts.get_mut(&key) {
            profile.replace_state(state);
        }
        self.commit(next)?;

        info!(layout = %key, "layout saved");
        Ok(())
    }

    pub fn restore(&self, name: &str) -> AppResult<&[u8]> {
        let key = name::lookup_key(name);
        let profile = self
            .model
            .layouts
            .get(key)
            .ok_or_else(|| AppError::NotFound(key.to_string()))?;

        if !profile.is_saved() {
            return Err(AppError::EmptyState(key.to_string()));
        }

        Ok(profile.state())
    }

    /// Moves a saved layout to a new name, carrying the default pointer with
    /// it. Unsaved layouts cannot be renamed.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> AppResult<String> {
        let old_key = name::lookup_key(old_name);
        let new_name = name::normalize(new_name)?;

        if new_name != old_key
            && (name::is_reserved(&new_name) || self.model.layouts.contains_key(&new_name))
        {
            return Err(AppError::DuplicateName(new_name));
        }

        let profile = self
            .model
            .layouts
            .get(old_key)
            .ok_or_else(|| AppError::NotFound(old_key.to_string()))?;

        if !profile.is_saved() {
            return Err(AppError::EmptyState(old_key.to_string()));
        }

        if new_name == old_key {
            return Ok(new_name);
        }

        let mut next = self.model.clone();
        next.layouts.remove(old_key);
        next.layouts
            .insert(new_name.clone(), profile.renamed(new_name.clone()));
        if next.default_name.as_deref() == Some(old_key) {
            next.default_name = Some(new_name.clone());
        }

        let old_key = old_key.to_string();
        self.commit(next)?;

        info!(from = %old_key, to = %new_name, "layout renamed");
        Ok(new_name)
    }

    pub fn delete(&mut self, name: &str) -> AppResult<()> {
        let key = self.existing_key(name)?;

        let mut next = self.model.clone();
        next.layouts.remove(&key);
        if next.default_name.as_deref() == Some(key.as_str()) {
            next.default_name = None;
        }
        self.commit(next)?;

        info!(layout = %key, "layout deleted");
        Ok(())
    }

    pub fn set_default(&mut self, name: &str) -> AppResult<()> {
        let key = self.existing_key(name)?;

        let mut next = self.model.clone();
        next.default_name = Some(key.clone());
        self.commit(next)?;

        info!(layout = %key, "default layout set");
        Ok(())
    }

    /// Captures the host's current state into `name` and marks it as the
    /// default in a single write. Nothing changes if the capture is empty.
    pub fn set_default_with_capture<H>(&mut self, name: &str, host: &mut H) -> AppResult<()>
    where
        H: LayoutHost + ?Sized,
    {
        let key = self.existing_key(name)?;
        let state = host.capture_state();
        if state.is_empty() {
            return Err(AppError::EmptyState(key));
        }

        let mut next = self.model.clone();
        if let Some(profile) = next.layouts.get_mut(&key) {
            profile.replace_state(state);
        }
        next.default_name = Some(key.clone());
        self.commit(next)?;

        info!(layout = %key, "layout saved and set as default");
        Ok(())
    }

    /// Returns whether a default was set before the call.
    pub fn clear_default(&mut self) -> AppResult<bool> {
        if self.model.default_name.is_none() {
            return Ok(false);
        }

        let mut next = self.model.clone();
        next.default_name = None;
        self.commit(next)?;

        info!("default layout cleared");
        Ok(true)
    }

    pub fn capture_into<H>(&mut self, name: &str, host: &mut H) -> AppResult<()>
    where
        H: LayoutHost + ?Sized,
    {
        let key = self.existing_key(name)?;
        let state = host.capture_state();
        self.save(&key, state)
    }

    pub fn apply<H>(&self, name: &str, host: &mut H) -> AppResult<()>
    where
        H: LayoutHost + ?Sized,
    {
        let state = self.restore(name)?;
        let key = name::lookup_key(name);
        if !host.apply_state(state) {
            return Err(AppError::Apply(key.to_string()));
        }

        info!(layout = %key, "layout applied");
        Ok(())
    }

    fn available_name(&self, requested: &str) -> AppResult<String> {
        let name = name::normalize(requested)?;
        if name::is_reserved(&name) || self.model.layouts.contains_key(&name) {
            return Err(AppError::DuplicateName(name));
        }

        Ok(name)
    }

    fn existing_key(&self, requested: &str) -> AppResult<String> {
        let key = name::lookup_key(requested);
        if !self.model.layouts.contains_key(key) {
            return Err(AppError::NotFound(key.to_string()));
        }

        Ok(key.to_string())
    }

    fn commit(&mut self, next: StoreModel) -> AppResult<()> {
        file::save(&self.path, &next)?;
        self.model = next;
        Ok(())
    }
}
