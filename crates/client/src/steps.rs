//! Wizard steps and the data each one collects.

use domain::{
    AccountDetails, CompanyDetails, FieldErrors, PersonalInfo, ProfessionalInfo, ProfileDetails,
    Requirements, Schema,
};

/// Identifies a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepKind {
    Account,
    Company,
    Requirements,
    Personal,
    Professional,
    Profile,
}

impl StepKind {
    /// Short title for the progress bar
    pub fn title(&self) -> &'static str {
        match self {
            StepKind::Account => "Account",
            StepKind::Company => "Company",
            StepKind::Requirements => "Requirements",
            StepKind::Personal => "Personal",
            StepKind::Professional => "Professional",
            StepKind::Profile => "Profile",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepKind::Account => "Create your account",
            StepKind::Company => "Your company details",
            StepKind::Requirements => "Your needs and budget",
            StepKind::Personal => "Your personal information",
            StepKind::Professional => "Your expertise and rates",
            StepKind::Profile => "Tell us about yourself",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Data entered on one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepData {
    Account(AccountDetails),
    Company(CompanyDetails),
    Requirements(Requirements),
    Personal(PersonalInfo),
    Professional(ProfessionalInfo),
    Profile(ProfileDetails),
}

impl StepData {
    /// The step this data belongs to.
    pub fn kind(&self) -> StepKind {
        match self {
            StepData::Account(_) => StepKind::Account,
            StepData::Company(_) => StepKind::Company,
            StepData::Requirements(_) => StepKind::Requirements,
            StepData::Personal(_) => StepKind::Personal,
            StepData::Professional(_) => StepKind::Professional,
            StepData::Profile(_) => StepKind::Profile,
        }
    }
}

impl Schema for StepData {
    fn check(&self) -> Result<(), FieldErrors> {
        match self {
            StepData::Account(d) => d.check_confirmed(),
            StepData::Company(d) => d.check(),
            StepData::Requirements(d) => d.check(),
            StepData::Personal(d) => d.check(),
            StepData::Professional(d) => d.check(),
            StepData::Profile(d) => d.check(),
        }
    }
}

macro_rules! impl_from_step {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for StepData {
                fn from(data: $ty) -> Self {
                    StepData::$variant(data)
                }
            }
        )+
    };
}

impl_from_step! {
    Account(AccountDetails),
    Company(CompanyDetails),
    Requirements(Requirements),
    Personal(PersonalInfo),
    Professional(ProfessionalInfo),
    Profile(ProfileDetails),
}
