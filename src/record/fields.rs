//! Field catalog for the input record
//!
//! Every field the form collects, with its bounds or closed value set.
//! The catalog order is the column order of the assembled record.

use std::fmt;

/// Employee gender as recorded in the source dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const VALUES: &'static [&'static str] = &["Male", "Female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Educational background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationBackground {
    Science,
    Commerce,
    Arts,
    Others,
}

impl EducationBackground {
    pub const VALUES: &'static [&'static str] = &["Science", "Commerce", "Arts", "Others"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationBackground::Science => "Science",
            EducationBackground::Commerce => "Commerce",
            EducationBackground::Arts => "Arts",
            EducationBackground::Others => "Others",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "science" => Some(EducationBackground::Science),
            "commerce" => Some(EducationBackground::Commerce),
            "arts" => Some(EducationBackground::Arts),
            "others" => Some(EducationBackground::Others),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EducationBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub const VALUES: &'static [&'static str] = &["Single", "Married", "Divorced", "Widowed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(MaritalStatus::Single),
            "married" => Some(MaritalStatus::Married),
            "divorced" => Some(MaritalStatus::Divorced),
            "widowed" => Some(MaritalStatus::Widowed),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employing department
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Hr,
    Finance,
    ResearchDev,
    Sales,
    It,
}

impl Department {
    pub const VALUES: &'static [&'static str] = &["HR", "Finance", "R&D", "Sales", "IT"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::ResearchDev => "R&D",
            Department::Sales => "Sales",
            Department::It => "IT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hr" => Some(Department::Hr),
            "finance" => Some(Department::Finance),
            "r&d" => Some(Department::ResearchDev),
            "sales" => Some(Department::Sales),
            "it" => Some(Department::It),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Job role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRole {
    Manager,
    Executive,
    Analyst,
    Technician,
    Clerk,
}

impl JobRole {
    pub const VALUES: &'static [&'static str] =
        &["Manager", "Executive", "Analyst", "Technician", "Clerk"];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::Manager => "Manager",
            JobRole::Executive => "Executive",
            JobRole::Analyst => "Analyst",
            JobRole::Technician => "Technician",
            JobRole::Clerk => "Clerk",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manager" => Some(JobRole::Manager),
            "executive" => Some(JobRole::Executive),
            "analyst" => Some(JobRole::Analyst),
            "technician" => Some(JobRole::Technician),
            "clerk" => Some(JobRole::Clerk),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often the employee travels for business
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessTravel {
    Rarely,
    Frequently,
    Never,
}

impl BusinessTravel {
    pub const VALUES: &'static [&'static str] = &["Rarely", "Frequently", "Never"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessTravel::Rarely => "Rarely",
            BusinessTravel::Frequently => "Frequently",
            BusinessTravel::Never => "Never",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rarely" => Some(BusinessTravel::Rarely),
            "frequently" => Some(BusinessTravel::Frequently),
            "never" => Some(BusinessTravel::Never),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BusinessTravel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Yes/No flag used by the OverTime and Attrition fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const VALUES: &'static [&'static str] = &["Yes", "No"];

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of input control a field presents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Bounded integer spinner
    Number { min: u32, max: u32 },
    /// 1-5 ordinal slider
    Scale,
    /// Dropdown over a closed value set
    Choice(&'static [&'static str]),
}

impl FieldKind {
    /// Numeric bounds, if this is a numeric control
    pub fn bounds(&self) -> Option<(u32, u32)> {
        match self {
            FieldKind::Number { min, max } => Some((*min, *max)),
            FieldKind::Scale => Some((1, 5)),
            FieldKind::Choice(_) => None,
        }
    }

    /// Short human description of the accepted values
    pub fn describe(&self) -> String {
        match self {
            FieldKind::Number { min, max } => format!("{}-{}", min, max),
            FieldKind::Scale => "1-5".to_string(),
            FieldKind::Choice(values) => values.join(", "),
        }
    }
}

/// One entry in the field catalog
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name, matching the training data
    pub name: &'static str,
    pub kind: FieldKind,
}

/// All form fields in record column order
pub const FIELDS: [FieldSpec; 26] = [
    FieldSpec { name: "Age", kind: FieldKind::Number { min: 18, max: 65 } },
    FieldSpec { name: "Gender", kind: FieldKind::Choice(Gender::VALUES) },
    FieldSpec { name: "EducationBackground", kind: FieldKind::Choice(EducationBackground::VALUES) },
    FieldSpec { name: "MaritalStatus", kind: FieldKind::Choice(MaritalStatus::VALUES) },
    FieldSpec { name: "EmpDepartment", kind: FieldKind::Choice(Department::VALUES) },
    FieldSpec { name: "EmpJobRole", kind: FieldKind::Choice(JobRole::VALUES) },
    FieldSpec { name: "BusinessTravelFrequency", kind: FieldKind::Choice(BusinessTravel::VALUES) },
    FieldSpec { name: "DistanceFromHome", kind: FieldKind::Number { min: 0, max: 100 } },
    FieldSpec { name: "EmpEducationLevel", kind: FieldKind::Scale },
    FieldSpec { name: "EmpEnvironmentSatisfaction", kind: FieldKind::Scale },
    FieldSpec { name: "EmpHourlyRate", kind: FieldKind::Number { min: 10, max: 100 } },
    FieldSpec { name: "EmpJobInvolvement", kind: FieldKind::Scale },
    FieldSpec { name: "EmpJobLevel", kind: FieldKind::Scale },
    FieldSpec { name: "EmpJobSatisfaction", kind: FieldKind::Scale },
    FieldSpec { name: "NumCompaniesWorked", kind: FieldKind::Number { min: 0, max: 10 } },
    FieldSpec { name: "OverTime", kind: FieldKind::Choice(YesNo::VALUES) },
    FieldSpec { name: "EmpLastSalaryHikePercent", kind: FieldKind::Number { min: 0, max: 100 } },
    FieldSpec { name: "EmpRelationshipSatisfaction", kind: FieldKind::Scale },
    FieldSpec { name: "TotalWorkExperienceInYears", kind: FieldKind::Number { min: 0, max: 50 } },
    FieldSpec { name: "TrainingTimesLastYear", kind: FieldKind::Number { min: 0, max: 10 } },
    FieldSpec { name: "EmpWorkLifeBalance", kind: FieldKind::Scale },
    FieldSpec { name: "ExperienceYearsAtThisCompany", kind: FieldKind::Number { min: 0, max: 50 } },
    FieldSpec { name: "ExperienceYearsInCurrentRole", kind: FieldKind::Number { min: 0, max: 50 } },
    FieldSpec { name: "YearsSinceLastPromotion", kind: FieldKind::Number { min: 0, max: 50 } },
    FieldSpec { name: "YearsWithCurrManager", kind: FieldKind::Number { min: 0, max: 50 } },
    FieldSpec { name: "Attrition", kind: FieldKind::Choice(YesNo::VALUES) },
];

/// Look up a field by name, case-insensitively
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_all_form_fields() {
        assert_eq!(FIELDS.len(), 26);
        assert_eq!(FIELDS[0].name, "Age");
        assert_eq!(FIELDS[25].name, "Attrition");
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        assert!(field_spec("age").is_some());
        assert!(field_spec("EMPDEPARTMENT").is_some());
        assert!(field_spec("NoSuchField").is_none());
    }

    #[test]
    fn scale_fields_are_one_to_five() {
        assert_eq!(FieldKind::Scale.bounds(), Some((1, 5)));
    }

    #[test]
    fn department_parses_ampersand_value() {
        assert_eq!(Department::parse("r&d"), Some(Department::ResearchDev));
        assert_eq!(Department::ResearchDev.to_string(), "R&D");
    }

    #[test]
    fn choice_parse_rejects_values_outside_the_set() {
        assert_eq!(Gender::parse("Other"), None);
        assert_eq!(YesNo::parse("maybe"), None);
        assert_eq!(BusinessTravel::parse(""), None);
    }
}
