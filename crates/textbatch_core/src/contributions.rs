//! Per-editor contributions and their isolated instantiation.

use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;

/// Add-on instantiated once per editor.
pub trait EditorContribution {
    fn id(&self) -> &str;
}

/// Contribution that persists part of the editor view state.
pub trait ViewStateContribution: EditorContribution {
    fn save_view_state(&self) -> Value;

    /// Restore from a previous snapshot; `None` when nothing was saved.
    fn restore_view_state(&mut self, state: Option<&Value>);
}

/// A contribution together with the capabilities it opted into.
pub enum Contribution {
    Plain(Box<dyn EditorContribution>),
    Stateful(Box<dyn ViewStateContribution>),
}

impl Contribution {
    pub fn id(&self) -> &str {
        match self {
            Self::Plain(contribution) => contribution.id(),
            Self::Stateful(contribution) => contribution.id(),
        }
    }
}

/// Error a contribution factory may fail with.
pub type FactoryError = Box<dyn Error + Send + Sync>;

type ContributionFactory = Box<dyn FnOnce() -> Result<Contribution, FactoryError>>;

/// Named factory for one contribution.
pub struct ContributionDescriptor {
    id: String,
    factory: ContributionFactory,
}

impl ContributionDescriptor {
    pub fn new(
        id: impl Into<String>,
        factory: impl FnOnce() -> Result<Contribution, FactoryError> + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            factory: Box::new(factory),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// A contribution that could not be registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContributionFailure {
    pub id: String,
    pub message: String,
}

/// Outcome of [`ContributionRegistry::instantiate_all`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContributionReport {
    pub registered: Vec<String>,
    pub failures: Vec<ContributionFailure>,
}

impl ContributionReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Contributions owned by one editor, in registration order.
#[derive(Default)]
pub struct ContributionRegistry {
    contributions: Vec<Contribution>,
}

impl ContributionRegistry {
    /// Run every factory, isolating failures.
    ///
    /// A failing factory, or one whose instance reports an id other than the
    /// descriptor's, or a duplicate id, is recorded and skipped; the rest
    /// are still instantiated.
    pub fn instantiate_all(
        &mut self,
        descriptors: impl IntoIterator<Item = ContributionDescriptor>,
    ) -> ContributionReport {
        let mut report = ContributionReport::default();
        for descriptor in descriptors {
            let id = descriptor.id;
            if self.contains(id.as_str()) {
                report.failures.push(ContributionFailure {
                    message: format!("contribution {} is already registered", id),
                    id,
                });
                continue;
            }
            match (descriptor.factory)() {
                Ok(contribution) if contribution.id() == id => {
                    self.contributions.push(contribution);
                    report.registered.push(id);
                }
                Ok(contribution) => report.failures.push(ContributionFailure {
                    message: format!("factory produced contribution {}", contribution.id()),
                    id,
                }),
                Err(err) => report.failures.push(ContributionFailure {
                    message: err.to_string(),
                    id,
                }),
            }
        }
        for failure in &report.failures {
            tracing::warn!(
                "Could not instantiate contribution {}: {}",
                failure.id,
                failure.message
            );
        }
        report
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contributions.iter().any(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.contributions.iter().map(Contribution::id)
    }

    /// Collect state from stateful contributions only.
    pub fn save_view_state(&self) -> BTreeMap<String, Value> {
        self.contributions
            .iter()
            .filter_map(|contribution| match contribution {
                Contribution::Stateful(stateful) => {
                    Some((stateful.id().to_string(), stateful.save_view_state()))
                }
                Contribution::Plain(_) => None,
            })
            .collect()
    }

    /// Hand each stateful contribution its saved entry, if any.
    pub fn restore_view_state(&mut self, states: &BTreeMap<String, Value>) {
        for contribution in &mut self.contributions {
            if let Contribution::Stateful(stateful) = contribution {
                let saved = states.get(stateful.id());
                stateful.restore_view_state(saved);
            }
        }
    }

    pub fn clear(&mut self) {
        self.contributions.clear();
    }
}
