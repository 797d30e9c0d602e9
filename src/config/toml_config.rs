use crate::core::demo::{FacultySeed, Graduation, Scenario};
use crate::domain::{FieldOfStudy, Student};
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{
    validate_known_name, validate_non_empty_string, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML 種子檔：大學、學院與學生名冊，以及要執行的情境
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub university: UniversitySection,
    #[serde(default)]
    pub faculties: Vec<FacultyEntry>,
    pub scenario: Option<ScenarioSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversitySection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyEntry {
    pub name: String,
    pub field: FieldOfStudy,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEntry {
    pub name: String,
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraduationEntry {
    pub faculty: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioSection {
    #[serde(default)]
    pub graduate: Vec<GraduationEntry>,
    pub show_enrolled: Option<Vec<String>>,
    pub show_graduated: Option<Vec<String>>,
    pub lookup: Option<String>,
    pub faculties_in: Option<FieldOfStudy>,
}

impl SeedConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEED_DOMAIN})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    fn faculty_names(&self) -> Vec<&str> {
        self.faculties.iter().map(|f| f.name.as_str()).collect()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("university.name", &self.university.name)?;

        if self.faculties.is_empty() {
            return Err(RegistryError::ConfigValidationError {
                field: "faculties".to_string(),
                message: "At least one faculty is required".to_string(),
            });
        }

        for faculty in &self.faculties {
            validate_non_empty_string("faculties.name", &faculty.name)?;
            for student in &faculty.students {
                validate_non_empty_string("faculties.students.id", &student.id)?;
            }
        }

        validate_unique(
            "faculties.students.id",
            self.faculties
                .iter()
                .flat_map(|f| f.students.iter().map(|s| s.id.as_str())),
        )?;

        let known = self.faculty_names();
        if let Some(scenario) = &self.scenario {
            for graduation in &scenario.graduate {
                validate_known_name("scenario.graduate.faculty", &graduation.faculty, &known)?;
            }
            for name in scenario.show_enrolled.iter().flatten() {
                validate_known_name("scenario.show_enrolled", name, &known)?;
            }
            for name in scenario.show_graduated.iter().flatten() {
                validate_known_name("scenario.show_graduated", name, &known)?;
            }
        }

        Ok(())
    }

    /// 轉換為可執行的情境；未指定的顯示清單預設為全部學院
    pub fn into_scenario(self) -> Scenario {
        let all_names: Vec<String> = self.faculties.iter().map(|f| f.name.clone()).collect();
        let scenario = self.scenario.unwrap_or_default();

        Scenario {
            university: self.university.name,
            faculties: self
                .faculties
                .into_iter()
                .map(|f| FacultySeed {
                    name: f.name,
                    field: f.field,
                    students: f
                        .students
                        .into_iter()
                        .map(|s| Student::new(s.name, s.id, s.email))
                        .collect(),
                })
                .collect(),
            graduations: scenario
                .graduate
                .into_iter()
                .map(|g| Graduation {
                    faculty: g.faculty,
                    id: g.id,
                })
                .collect(),
            show_enrolled: scenario.show_enrolled.unwrap_or_else(|| all_names.clone()),
            show_graduated: scenario.show_graduated.unwrap_or(all_names),
            lookup: scenario.lookup,
            field_filter: scenario.faculties_in,
        }
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
