use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static PROFILE: LazyLock<Result<Profile, ContentError>> = LazyLock::new(|| load(PROFILE_FILE));
pub static PROJECTS: LazyLock<Result<Vec<ProjectEntry>, ContentError>> =
    LazyLock::new(|| load(PROJECTS_FILE));

const PROFILE_FILE: &str = "profile.json";
const PROJECTS_FILE: &str = "projects.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub role: String,
    pub tech: Vec<String>,
    /// Tailwind gradient stops, e.g. `from-blue-400 to-cyan-400`
    pub gradient: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub years: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub path: String,
    pub download_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub initials: String,
    pub name: String,
    pub greeting: String,
    pub tagline: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub activities: Vec<String>,
    pub about: Vec<String>,
    pub education: Education,
    pub resume: Resume,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: &'static str, reason: String },
}

fn load<T>(file: &'static str) -> Result<T, ContentError>
where
    T: for<'de> Deserialize<'de>,
{
    let content = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::ParseError {
        file,
        reason: e.to_string(),
    })
}

pub fn load_profile() -> Result<&'static Profile, ContentError> {
    PROFILE.as_ref().map_err(Clone::clone)
}

pub fn load_projects() -> Result<&'static [ProjectEntry], ContentError> {
    PROJECTS
        .as_ref()
        .map(|v| v.as_slice())
        .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_are_embedded() {
        let projects = load_projects().expect("projects should parse");
        assert_eq!(projects.len(), 6);
        assert_eq!(projects[0].title, "Agent Sentinel");
        assert_eq!(
            projects[0].tech,
            vec!["Python", "FastAPI", "RoBERTa", "GDELT API"]
        );
        for p in projects {
            assert!(p.link.starts_with("https://github.com/"), "{}", p.link);
            assert!(p.gradient.starts_with("from-"), "{}", p.gradient);
            assert!(!p.tech.is_empty());
        }
    }

    #[test]
    fn test_profile_is_embedded() {
        let profile = load_profile().expect("profile should parse");
        assert_eq!(profile.initials, "AP");
        assert_eq!(profile.activities.len(), 5);
        assert_eq!(profile.resume.download_name, "Anuj_Patil_Resume.pdf");
        assert_eq!(profile.mailto(), "mailto:anuj05patil@gmail.com");
    }

    #[test]
    fn test_resume_is_served_from_assets() {
        let profile = load_profile().expect("profile should parse");
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(profile.resume.path.trim_start_matches('/'));
        let bytes = std::fs::read(&path).expect("resume asset should exist");
        assert!(bytes.starts_with(b"%PDF"), "{}", path.display());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let res = load::<Profile>("nope.json");
        assert_eq!(res, Err(ContentError::NotFound("nope.json")));
    }
}
