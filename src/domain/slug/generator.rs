// src/domain/slug/generator.rs
use super::{ExistenceChecker, SlugError};
use chrono::{DateTime, Utc};
use deunicode::deunicode;
use std::borrow::Cow;

pub const DEFAULT_MAX_LENGTH: usize = 100;
pub const DEFAULT_BOUNDARY_WINDOW: usize = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    pub max_length: usize,
    /// A truncated slug is cut back to its last hyphen only when that hyphen
    /// sits within this many characters of the length limit.
    pub boundary_window: usize,
    /// Upper bound on suffixed candidates tried after the base slug.
    /// `None` keeps searching until a free candidate turns up.
    pub max_attempts: Option<u32>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            boundary_window: DEFAULT_BOUNDARY_WINDOW,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

impl SlugOptions {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_boundary_window(mut self, boundary_window: usize) -> Self {
        self.boundary_window = boundary_window;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Turns free-form names into slugs and resolves collisions against a
/// caller-supplied namespace.
#[derive(Debug, Clone, Default)]
pub struct SlugGenerator {
    options: SlugOptions,
}

impl SlugGenerator {
    pub fn new(options: SlugOptions) -> Self {
        Self { options }
    }

    pub fn generate(&self, text: &str) -> String {
        self.generate_bounded(text, self.options.max_length)
    }

    pub fn generate_bounded(&self, text: &str, max_length: usize) -> String {
        if text.is_empty() {
            return String::new();
        }

        let transliterated = deunicode(text);
        let mut slug = String::with_capacity(transliterated.len());
        let mut pending_hyphen = false;

        for ch in transliterated.trim().chars() {
            if ch.is_whitespace() {
                pending_hyphen = !slug.is_empty();
            } else if ch.is_ascii_alphanumeric() {
                if pending_hyphen {
                    slug.push('-');
                    pending_hyphen = false;
                }
                slug.push(ch.to_ascii_lowercase());
            }
        }

        self.truncate_at_boundary(slug, max_length)
    }

    fn truncate_at_boundary(&self, mut slug: String, max_length: usize) -> String {
        if slug.len() <= max_length {
            return slug;
        }

        slug.truncate(max_length);
        let window = self.options.boundary_window;
        if let Some(index) = slug.rfind('-').filter(|&i| i > 0 && i + window > max_length) {
            slug.truncate(index);
        }

        let kept = slug.trim_end_matches('-').len();
        slug.truncate(kept);
        slug
    }

    pub async fn generate_unique<C>(
        &self,
        text: &str,
        checker: &C,
    ) -> Result<String, SlugError<C::Error>>
    where
        C: ExistenceChecker + ?Sized,
    {
        self.generate_unique_bounded(text, checker, self.options.max_length)
            .await
    }

    /// Candidates are checked strictly in order (`base`, `base-1`, `base-2`,
    /// ...), each check awaited before the next candidate is built.
    pub async fn generate_unique_bounded<C>(
        &self,
        text: &str,
        checker: &C,
        max_length: usize,
    ) -> Result<String, SlugError<C::Error>>
    where
        C: ExistenceChecker + ?Sized,
    {
        let base = self.generate_bounded(text, max_length);
        let mut candidate = base.clone();
        let mut counter: u32 = 1;

        while checker.exists(&candidate).await.map_err(SlugError::Check)? {
            let within_bound = self.options.max_attempts.is_none_or(|limit| counter <= limit);
            let next = within_bound
                .then(|| suffixed(&base, counter, max_length))
                .flatten();

            let Some(next) = next else {
                let attempts = counter - 1;
                tracing::warn!(base = %base, attempts, "slug candidates exhausted");
                return Err(SlugError::Exhausted { base, attempts });
            };

            tracing::debug!(candidate = %candidate, "slug already taken");
            candidate = next;
            counter += 1;
        }

        Ok(candidate)
    }

    /// Names that reduce to nothing (only punctuation, unmapped symbols)
    /// fall back to `"<entity> <timestamp>"` so the entity still gets a slug.
    pub fn source_or_fallback<'a>(
        &self,
        name: &'a str,
        entity: &str,
        now: DateTime<Utc>,
    ) -> Cow<'a, str> {
        if self.generate(name).is_empty() {
            Cow::Owned(format!("{entity} {}", now.timestamp()))
        } else {
            Cow::Borrowed(name)
        }
    }
}

/// `None` once even the bare counter no longer fits in `max_length`.
fn suffixed(base: &str, counter: u32, max_length: usize) -> Option<String> {
    let suffix = format!("-{counter}");
    let available = max_length.saturating_sub(suffix.len()).min(base.len());
    let head = base[..available].trim_end_matches('-');

    if !head.is_empty() {
        return Some(format!("{head}{suffix}"));
    }
    let digits = counter.to_string();
    (digits.len() <= max_length).then_some(digits)
}
