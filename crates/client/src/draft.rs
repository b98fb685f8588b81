//! Data collected so far by a wizard.

use std::collections::BTreeMap;

use domain::{
    AccountDetails, CompanyDetails, PersonalInfo, ProfessionalInfo, ProfileDetails, Requirements,
};

use crate::steps::{StepData, StepKind};

/// Step data keyed by step. Each step owns exactly one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    steps: BTreeMap<StepKind, StepData>,
}

macro_rules! step_accessor {
    ($(#[$meta:meta])* $name:ident => $variant:ident($ty:ty)) => {
        $(#[$meta])*
        pub fn $name(&self) -> Option<&$ty> {
            match self.steps.get(&StepKind::$variant) {
                Some(StepData::$variant(data)) => Some(data),
                _ => None,
            }
        }
    };
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a step's data, replacing only that step's previous entry.
    pub fn insert(&mut self, data: StepData) -> Option<StepData> {
        self.steps.insert(data.kind(), data)
    }

    pub fn get(&self, kind: StepKind) -> Option<&StepData> {
        self.steps.get(&kind)
    }

    pub fn contains(&self, kind: StepKind) -> bool {
        self.steps.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    step_accessor!(account => Account(AccountDetails));
    step_accessor!(company => Company(CompanyDetails));
    step_accessor!(requirements => Requirements(Requirements));
    step_accessor!(personal => Personal(PersonalInfo));
    step_accessor!(professional => Professional(ProfessionalInfo));
    step_accessor!(profile => Profile(ProfileDetails));
}
