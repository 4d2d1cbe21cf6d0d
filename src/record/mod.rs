//! The single-row input record assembled from form controls
//!
//! One `EmployeeRecord` holds the current value of every form field. It is
//! rebuilt from control state on each interaction, displayed verbatim, and
//! handed to the model as one row.

pub mod fields;

use crate::{PerfError, Result};
pub use fields::{
    BusinessTravel, Department, EducationBackground, FieldKind, FieldSpec, Gender, JobRole,
    MaritalStatus, YesNo, FIELDS,
};

/// One employee's attributes: the single row submitted to the model
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub age: u32,
    pub gender: Gender,
    pub education_background: EducationBackground,
    pub marital_status: MaritalStatus,
    pub department: Department,
    pub job_role: JobRole,
    pub business_travel: BusinessTravel,
    pub distance_from_home: u32,
    pub education_level: u32,
    pub environment_satisfaction: u32,
    pub hourly_rate: u32,
    pub job_involvement: u32,
    pub job_level: u32,
    pub job_satisfaction: u32,
    pub companies_worked: u32,
    pub overtime: YesNo,
    pub salary_hike_percent: u32,
    pub relationship_satisfaction: u32,
    pub total_experience_years: u32,
    pub training_times_last_year: u32,
    pub work_life_balance: u32,
    pub years_at_company: u32,
    pub years_in_current_role: u32,
    pub years_since_promotion: u32,
    pub years_with_manager: u32,
    pub attrition: YesNo,
}

impl Default for EmployeeRecord {
    /// Every control starts at its minimum / first option
    fn default() -> Self {
        EmployeeRecord {
            age: 18,
            gender: Gender::Male,
            education_background: EducationBackground::Science,
            marital_status: MaritalStatus::Single,
            department: Department::Hr,
            job_role: JobRole::Manager,
            business_travel: BusinessTravel::Rarely,
            distance_from_home: 0,
            education_level: 1,
            environment_satisfaction: 1,
            hourly_rate: 10,
            job_involvement: 1,
            job_level: 1,
            job_satisfaction: 1,
            companies_worked: 0,
            overtime: YesNo::Yes,
            salary_hike_percent: 0,
            relationship_satisfaction: 1,
            total_experience_years: 0,
            training_times_last_year: 0,
            work_life_balance: 1,
            years_at_company: 0,
            years_in_current_role: 0,
            years_since_promotion: 0,
            years_with_manager: 0,
            attrition: YesNo::Yes,
        }
    }
}

impl EmployeeRecord {
    /// Number of columns in the assembled row
    pub const FEATURE_DIM: usize = 26;

    /// The record as ordered (column, display value) pairs.
    /// Order matches [`fields::FIELDS`].
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Age", self.age.to_string()),
            ("Gender", self.gender.to_string()),
            ("EducationBackground", self.education_background.to_string()),
            ("MaritalStatus", self.marital_status.to_string()),
            ("EmpDepartment", self.department.to_string()),
            ("EmpJobRole", self.job_role.to_string()),
            ("BusinessTravelFrequency", self.business_travel.to_string()),
            ("DistanceFromHome", self.distance_from_home.to_string()),
            ("EmpEducationLevel", self.education_level.to_string()),
            ("EmpEnvironmentSatisfaction", self.environment_satisfaction.to_string()),
            ("EmpHourlyRate", self.hourly_rate.to_string()),
            ("EmpJobInvolvement", self.job_involvement.to_string()),
            ("EmpJobLevel", self.job_level.to_string()),
            ("EmpJobSatisfaction", self.job_satisfaction.to_string()),
            ("NumCompaniesWorked", self.companies_worked.to_string()),
            ("OverTime", self.overtime.to_string()),
            ("EmpLastSalaryHikePercent", self.salary_hike_percent.to_string()),
            ("EmpRelationshipSatisfaction", self.relationship_satisfaction.to_string()),
            ("TotalWorkExperienceInYears", self.total_experience_years.to_string()),
            ("TrainingTimesLastYear", self.training_times_last_year.to_string()),
            ("EmpWorkLifeBalance", self.work_life_balance.to_string()),
            ("ExperienceYearsAtThisCompany", self.years_at_company.to_string()),
            ("ExperienceYearsInCurrentRole", self.years_in_current_role.to_string()),
            ("YearsSinceLastPromotion", self.years_since_promotion.to_string()),
            ("YearsWithCurrManager", self.years_with_manager.to_string()),
            ("Attrition", self.attrition.to_string()),
        ]
    }

    /// Display value of a single field, case-insensitive lookup
    pub fn get(&self, field: &str) -> Option<String> {
        self.rows()
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .map(|(_, value)| value)
    }

    /// The row as a flat numeric vector in column order. Choice fields are
    /// encoded as their ordinal position in the declared value set, as in
    /// the training data.
    pub fn to_features(&self) -> Vec<f32> {
        vec![
            self.age as f32,
            self.gender.index() as f32,
            self.education_background.index() as f32,
            self.marital_status.index() as f32,
            self.department.index() as f32,
            self.job_role.index() as f32,
            self.business_travel.index() as f32,
            self.distance_from_home as f32,
            self.education_level as f32,
            self.environment_satisfaction as f32,
            self.hourly_rate as f32,
            self.job_involvement as f32,
            self.job_level as f32,
            self.job_satisfaction as f32,
            self.companies_worked as f32,
            self.overtime.index() as f32,
            self.salary_hike_percent as f32,
            self.relationship_satisfaction as f32,
            self.total_experience_years as f32,
            self.training_times_last_year as f32,
            self.work_life_balance as f32,
            self.years_at_company as f32,
            self.years_in_current_role as f32,
            self.years_since_promotion as f32,
            self.years_with_manager as f32,
            self.attrition.index() as f32,
        ]
    }

    /// Set one field from user input. Numeric values are clamped to the
    /// control's declared bounds; choice values must be in the declared set.
    pub fn set(&mut self, field: &str, value: &str) -> Result<()> {
        let spec = fields::field_spec(field)
            .ok_or_else(|| PerfError::UnknownField(field.to_string()))?;

        match spec.name {
            "Age" => self.age = parse_bounded(spec, value)?,
            "Gender" => self.gender = parse_choice(spec, value, Gender::parse)?,
            "EducationBackground" => {
                self.education_background = parse_choice(spec, value, EducationBackground::parse)?
            }
            "MaritalStatus" => {
                self.marital_status = parse_choice(spec, value, MaritalStatus::parse)?
            }
            "EmpDepartment" => self.department = parse_choice(spec, value, Department::parse)?,
            "EmpJobRole" => self.job_role = parse_choice(spec, value, JobRole::parse)?,
            "BusinessTravelFrequency" => {
                self.business_travel = parse_choice(spec, value, BusinessTravel::parse)?
            }
            "DistanceFromHome" => self.distance_from_home = parse_bounded(spec, value)?,
            "EmpEducationLevel" => self.education_level = parse_bounded(spec, value)?,
            "EmpEnvironmentSatisfaction" => {
                self.environment_satisfaction = parse_bounded(spec, value)?
            }
            "EmpHourlyRate" => self.hourly_rate = parse_bounded(spec, value)?,
            "EmpJobInvolvement" => self.job_involvement = parse_bounded(spec, value)?,
            "EmpJobLevel" => self.job_level = parse_bounded(spec, value)?,
            "EmpJobSatisfaction" => self.job_satisfaction = parse_bounded(spec, value)?,
            "NumCompaniesWorked" => self.companies_worked = parse_bounded(spec, value)?,
            "OverTime" => self.overtime = parse_choice(spec, value, YesNo::parse)?,
            "EmpLastSalaryHikePercent" => self.salary_hike_percent = parse_bounded(spec, value)?,
            "EmpRelationshipSatisfaction" => {
                self.relationship_satisfaction = parse_bounded(spec, value)?
            }
            "TotalWorkExperienceInYears" => {
                self.total_experience_years = parse_bounded(spec, value)?
            }
            "TrainingTimesLastYear" => self.training_times_last_year = parse_bounded(spec, value)?,
            "EmpWorkLifeBalance" => self.work_life_balance = parse_bounded(spec, value)?,
            "ExperienceYearsAtThisCompany" => self.years_at_company = parse_bounded(spec, value)?,
            "ExperienceYearsInCurrentRole" => {
                self.years_in_current_role = parse_bounded(spec, value)?
            }
            "YearsSinceLastPromotion" => self.years_since_promotion = parse_bounded(spec, value)?,
            "YearsWithCurrManager" => self.years_with_manager = parse_bounded(spec, value)?,
            "Attrition" => self.attrition = parse_choice(spec, value, YesNo::parse)?,
            _ => unreachable!("field catalog entry without a setter: {}", spec.name),
        }

        Ok(())
    }
}

/// Parse a numeric control value and clamp it into the control's bounds
fn parse_bounded(spec: &FieldSpec, value: &str) -> Result<u32> {
    let (min, max) = spec
        .kind
        .bounds()
        .unwrap_or_else(|| unreachable!("numeric setter on choice field {}", spec.name));

    let parsed: i64 = value.trim().parse().map_err(|_| PerfError::InvalidValue {
        field: spec.name.to_string(),
        message: format!("expected an integer in {}-{}, got '{}'", min, max, value),
    })?;

    Ok(parsed.clamp(min as i64, max as i64) as u32)
}

/// Parse a choice control value against its closed set
fn parse_choice<T>(spec: &FieldSpec, value: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    parse(value.trim()).ok_or_else(|| PerfError::InvalidValue {
        field: spec.name.to_string(),
        message: format!("expected one of: {}", spec.kind.describe()),
    })
}
