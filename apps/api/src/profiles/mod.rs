//! Profile Store — reads the voice profile texts from a fixed directory.
//!
//! Profiles are read fresh on every call; nothing is cached between requests.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::Style;

pub const PRIMARY_FILE: &str = "primary.txt";
pub const ALLISON_FILE: &str = "allison.txt";
pub const INES_FILE: &str = "ines.txt";
pub const RITA_FILE: &str = "rita.txt";
pub const IDEA_INSTRUCTIONS_FILE: &str = "idea_instructions.txt";

const REQUIRED_FILES: [&str; 4] = [PRIMARY_FILE, ALLISON_FILE, INES_FILE, RITA_FILE];

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile file(s) not found in {}: {}", dir.display(), files.join(", "))]
    Missing { dir: PathBuf, files: Vec<String> },

    #[error("Failed to read profile {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The four voice texts plus the optional idea-instructions override.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSet {
    pub primary: String,
    pub allison: String,
    pub ines: String,
    pub rita: String,
    pub idea_instructions: Option<String>,
}

impl ProfileSet {
    /// Inspiration text for a single named voice. `Blend` has no single text.
    pub fn inspiration(&self, style: Style) -> Option<&str> {
        match style {
            Style::Allison => Some(&self.allison),
            Style::Ines => Some(&self.ines),
            Style::Rita => Some(&self.rita),
            Style::Blend => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileFileStatus {
    pub file: &'static str,
    pub required: bool,
    pub present: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileStatus {
    pub profile_dir: String,
    pub files: Vec<ProfileFileStatus>,
}

impl ProfileStatus {
    pub fn is_complete(&self) -> bool {
        self.files.iter().all(|f| f.present || !f.required)
    }
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads every profile file. All missing required files are reported at once.
    pub async fn load(&self) -> Result<ProfileSet, ProfileError> {
        let primary = self.read(PRIMARY_FILE).await?;
        let allison = self.read(ALLISON_FILE).await?;
        let ines = self.read(INES_FILE).await?;
        let rita = self.read(RITA_FILE).await?;

        let (primary, allison, ines, rita) = match (primary, allison, ines, rita) {
            (Some(p), Some(a), Some(i), Some(r)) => (p, a, i, r),
            (p, a, i, r) => {
                let files = [p.is_none(), a.is_none(), i.is_none(), r.is_none()]
                    .into_iter()
                    .zip(REQUIRED_FILES)
                    .filter(|(absent, _)| *absent)
                    .map(|(_, file)| file.to_string())
                    .collect();
                return Err(ProfileError::Missing {
                    dir: self.dir.clone(),
                    files,
                });
            }
        };

        let idea_instructions = self
            .read(IDEA_INSTRUCTIONS_FILE)
            .await?
            .filter(|text| !text.trim().is_empty());

        let profiles = ProfileSet {
            primary,
            allison,
            ines,
            rita,
            idea_instructions,
        };

        debug!(
            dir = %self.dir.display(),
            has_override = profiles.idea_instructions.is_some(),
            "Profiles loaded"
        );

        Ok(profiles)
    }

    /// Reports which profile files exist without reading them.
    pub async fn status(&self) -> ProfileStatus {
        let mut files = Vec::with_capacity(REQUIRED_FILES.len() + 1);
        for file in REQUIRED_FILES {
            files.push(ProfileFileStatus {
                file,
                required: true,
                present: self.exists(file).await,
            });
        }
        files.push(ProfileFileStatus {
            file: IDEA_INSTRUCTIONS_FILE,
            required: false,
            present: self.exists(IDEA_INSTRUCTIONS_FILE).await,
        });

        ProfileStatus {
            profile_dir: self.dir.display().to_string(),
            files,
        }
    }

    async fn read(&self, file: &str) -> Result<Option<String>, ProfileError> {
        let path = self.dir.join(file);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ProfileError::Io { path, source }),
        }
    }

    async fn exists(&self, file: &str) -> bool {
        tokio::fs::try_exists(self.dir.join(file))
            .await
            .unwrap_or(false)
    }
}
