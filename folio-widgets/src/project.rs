use serde::Deserialize;

/// A portfolio project, as listed in the gallery and shown on cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Preview image URL.
    pub image: Option<String>,
    /// Repository stars; missing counts as zero.
    pub stars: u32,
    /// Repository forks.
    pub forks: u32,
    /// Main programming language, used for filtering.
    pub language: Option<String>,
    /// Deployed site.
    pub live_url: Option<String>,
    /// Source repository.
    pub github_url: Option<String>,
    /// Technologies shown as badges when the card is expanded.
    pub technologies: Vec<String>,
    /// Bullet points shown when the card is expanded.
    pub achievements: Vec<String>,
    /// Business impact summary.
    pub impact: Option<String>,
    /// Key metrics line.
    pub metrics: Option<String>,
    /// Time span, e.g. `2023 - Present`.
    pub period: Option<String>,
    /// Role held on the project.
    pub role: Option<String>,
}

impl Project {
    /// Create a project with the required fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Set the star count and return itself.
    pub fn with_stars(mut self, stars: u32) -> Self {
        self.stars = stars;
        self
    }

    /// Set the language and return itself.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the technologies and return itself.
    pub fn with_technologies<I, S>(mut self, technologies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies = technologies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the achievements and return itself.
    pub fn with_achievements<I, S>(mut self, achievements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.achievements = achievements.into_iter().map(Into::into).collect();
        self
    }

    /// Set role and period and return itself.
    pub fn with_role(mut self, role: impl Into<String>, period: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self.period = Some(period.into());
        self
    }

    /// Set the metrics line and return itself.
    pub fn with_metrics(mut self, metrics: impl Into<String>) -> Self {
        self.metrics = Some(metrics.into());
        self
    }

    /// Set the impact summary and return itself.
    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    /// Whether the project's language matches `language`, ignoring case.
    pub fn has_language(&self, language: &str) -> bool {
        self.language
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(language))
    }
}
