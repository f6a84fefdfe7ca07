//! Builds the active layout and field policies from configuration.
//!
//! This runs once, before the first field is attached: the layout is
//! finished here and never modified afterwards.

use std::collections::HashSet;

use keylimit_core::{ClassError, Layout, LayoutBuilder, LayoutError, NamedClass, NamedClasses, Policy};
use thiserror::Error;
use tracing::{debug, warn};

use crate::infrastructure::storage::config::{GuardConfig, LayoutConfig, LayoutPreset};

/// Errors raised while turning a config into a ready [`GuardSetup`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// An override record in `[layout]` is malformed.
    #[error("invalid layout override: {0}")]
    Layout(#[from] LayoutError),

    /// A field names a class that does not exist.
    #[error("field {field:?}: {source}")]
    Class {
        field: String,
        #[source]
        source: ClassError,
    },

    /// Two fields share one name.
    #[error("field {0:?} is defined more than once")]
    DuplicateField(String),
}

/// A field name and its policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolicy {
    pub name: String,
    pub policy: Policy,
}

/// Everything needed to attach guards: the finished layout, the classes
/// built from it, and one policy per configured field.
#[derive(Debug, Clone)]
pub struct GuardSetup {
    pub layout: Layout,
    pub classes: NamedClasses,
    pub fields: Vec<FieldPolicy>,
}

impl GuardSetup {
    /// Returns the policy for the field called `name`.
    pub fn policy_for(&self, name: &str) -> Option<&Policy> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.policy)
    }
}

/// Builds the layout selected by `config`: the preset, then its overrides.
///
/// # Errors
///
/// Returns [`BuildError::Layout`] if the override batch is malformed.
pub fn build_layout(config: &LayoutConfig) -> Result<Layout, BuildError> {
    let mut builder = match config.preset {
        LayoutPreset::Us101 => LayoutBuilder::us101(),
        LayoutPreset::Jis109 => LayoutBuilder::jis109(),
    };
    if !config.overrides.is_empty() {
        builder.apply_overrides(&config.overrides)?;
    }
    debug!(preset = ?config.preset, overrides = config.overrides.len(), "layout built");
    Ok(builder.finish())
}

/// Builds one policy per field rule, in config order.
///
/// Each policy lists the named classes first, then the rule's extra
/// characters.
///
/// # Errors
///
/// Returns [`BuildError::Class`] for an unknown class name and
/// [`BuildError::DuplicateField`] when two rules share a name.
pub fn build_field_policies(
    config: &GuardConfig,
    classes: &NamedClasses,
) -> Result<Vec<FieldPolicy>, BuildError> {
    let mut names = HashSet::with_capacity(config.fields.len());
    let mut fields = Vec::with_capacity(config.fields.len());

    for rule in &config.fields {
        if !names.insert(rule.name.as_str()) {
            return Err(BuildError::DuplicateField(rule.name.clone()));
        }

        let mut policy = Policy::new();
        for name in &rule.classes {
            let class: NamedClass = name.parse().map_err(|source| BuildError::Class {
                field: rule.name.clone(),
                source,
            })?;
            for element in classes.policy(class).elements() {
                policy.push(element.clone());
            }
        }
        if !rule.extra.is_empty() {
            policy.push(rule.extra.as_str());
        }

        if policy.is_empty() {
            warn!(field = %rule.name, "field accepts only navigation and editing keys");
        }
        fields.push(FieldPolicy {
            name: rule.name.clone(),
            policy,
        });
    }

    Ok(fields)
}

/// Builds the layout, classes, and field policies for `config`.
///
/// # Errors
///
/// Propagates any [`BuildError`] from [`build_layout`] or
/// [`build_field_policies`].
pub fn build_setup(config: &GuardConfig) -> Result<GuardSetup, BuildError> {
    let layout = build_layout(&config.layout)?;
    let classes = NamedClasses::build(&layout);
    let fields = build_field_policies(config, &classes)?;
    Ok(GuardSetup {
        layout,
        classes,
        fields,
    })
}
