//! Commit Message Generation
//!
//! Produces randomized conventional-commit style messages of the form
//! `<type>: <summary>`, optionally followed by a blank line and one detail line.
//!
//! The random source is always supplied by the caller, so a seeded generator
//! reproduces the exact same sequence of messages.

use std::fmt;

use rand::Rng;

/// Default chance that a generated message carries a detail paragraph.
pub const DEFAULT_DETAIL_PROBABILITY: f64 = 0.3;

/// Summaries used for `feat` commits.
pub const FEATURE_SUMMARIES: [&str; 20] = [
    "Add user authentication system",
    "Implement responsive design for mobile",
    "Add dark mode toggle",
    "Create reusable button component",
    "Add form validation",
    "Implement search functionality",
    "Add loading states",
    "Create navigation menu",
    "Add error handling",
    "Implement data caching",
    "Add unit tests",
    "Create API integration",
    "Add accessibility features",
    "Implement lazy loading",
    "Add internationalization support",
    "Create dashboard widgets",
    "Add real-time updates",
    "Implement file upload",
    "Add data visualization",
    "Create user profile page",
];

/// Summaries used for `fix` commits.
pub const FIX_SUMMARIES: [&str; 15] = [
    "Fix memory leak in component",
    "Resolve navigation bug",
    "Fix responsive layout issues",
    "Correct API endpoint URL",
    "Fix form submission error",
    "Resolve state management issue",
    "Fix authentication token expiry",
    "Correct data validation logic",
    "Fix performance bottleneck",
    "Resolve CSS conflicts",
    "Fix mobile viewport issues",
    "Correct error message display",
    "Fix data synchronization",
    "Resolve build configuration",
    "Fix accessibility compliance",
];

/// Summaries used for every other commit type.
pub const IMPROVEMENT_SUMMARIES: [&str; 15] = [
    "Improve code readability",
    "Optimize bundle size",
    "Enhance user experience",
    "Refactor component structure",
    "Update dependencies",
    "Improve error messages",
    "Optimize database queries",
    "Enhance security measures",
    "Improve loading performance",
    "Refactor API calls",
    "Update documentation",
    "Improve test coverage",
    "Enhance mobile responsiveness",
    "Optimize image loading",
    "Improve code organization",
];

/// Optional second paragraphs.
pub const DETAILS: [&str; 8] = [
    "Update component props and styling",
    "Add proper error boundaries",
    "Implement proper TypeScript types",
    "Add comprehensive test cases",
    "Update README with new features",
    "Improve code documentation",
    "Add proper loading indicators",
    "Implement proper state management",
];

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Build,
    Ci,
}

impl CommitType {
    pub const ALL: [Self; 10] = [
        Self::Feat,
        Self::Fix,
        Self::Docs,
        Self::Style,
        Self::Refactor,
        Self::Perf,
        Self::Test,
        Self::Chore,
        Self::Build,
        Self::Ci,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Build => "build",
            Self::Ci => "ci",
        }
    }

    /// Pool of summaries this type draws from.
    #[must_use]
    pub const fn summaries(self) -> &'static [&'static str] {
        match self {
            Self::Feat => &FEATURE_SUMMARIES,
            Self::Fix => &FIX_SUMMARIES,
            _ => &IMPROVEMENT_SUMMARIES,
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub kind: CommitType,
    pub summary: &'static str,
    pub detail: Option<&'static str>,
}

impl CommitMessage {
    /// The `<type>: <summary>` header, without any detail paragraph.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{}: {}", self.kind, self.summary)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.summary)?;

        if let Some(detail) = self.detail {
            write!(f, "\n\n{detail}")?;
        }

        Ok(())
    }
}

/// Stateless message generator; every call is independent of the previous ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageGenerator {
    detail_probability: f64,
}

impl Default for MessageGenerator {
    fn default() -> Self {
        Self {
            detail_probability: DEFAULT_DETAIL_PROBABILITY,
        }
    }
}

impl MessageGenerator {
    /// Creates a generator with a custom detail probability.
    ///
    /// The probability is clamped into `[0, 1]`; `NaN` falls back to the default.
    #[must_use]
    pub fn with_detail_probability(detail_probability: f64) -> Self {
        if detail_probability.is_nan() {
            return Self::default();
        }

        Self {
            detail_probability: detail_probability.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub const fn detail_probability(&self) -> f64 {
        self.detail_probability
    }

    /// Generates one message using the given random source.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> CommitMessage {
        let kind = CommitType::ALL[rng.random_range(0..CommitType::ALL.len())];
        let summary = pick(rng, kind.summaries());

        let detail = rng
            .random_bool(self.detail_probability)
            .then(|| pick(rng, &DETAILS));

        CommitMessage {
            kind,
            summary,
            detail,
        }
    }
}

/// Generates one message with the default detail probability.
pub fn generate_message<R: Rng>(rng: &mut R) -> CommitMessage {
    MessageGenerator::default().generate(rng)
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}
