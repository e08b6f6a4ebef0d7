//! Locale-dependent first day of the week.
//!
//! The host installs a [`WeekStartProvider`] when it has locale data. Running
//! without one is a valid configuration and yields Monday.

use crate::types::WeekStart;

/// Looks up the first day of the week for a locale.
pub trait WeekStartProvider {
    /// Weekday number for `locale`: 1 = Monday .. 7 = Sunday, with 0 also
    /// accepted for Sunday. `None` when the locale is unknown.
    fn week_start_by_locale(&self, locale: &str) -> Option<u8>;
}

impl<F> WeekStartProvider for F
where
    F: Fn(&str) -> Option<u8>,
{
    fn week_start_by_locale(&self, locale: &str) -> Option<u8> {
        self(locale)
    }
}

/// Provider answering the same week start for every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWeekStart(pub WeekStart);

impl WeekStartProvider for FixedWeekStart {
    fn week_start_by_locale(&self, _locale: &str) -> Option<u8> {
        Some(self.0.get())
    }
}

/// Resolves the week start for `locale`, falling back to Monday when no
/// provider is installed or it has no usable answer.
pub fn resolve_week_start(provider: Option<&dyn WeekStartProvider>, locale: &str) -> WeekStart {
    let Some(provider) = provider else {
        tracing::debug!(locale, "no week start provider installed, using default");
        return WeekStart::default();
    };

    match provider.week_start_by_locale(locale).map(WeekStart::new) {
        Some(Ok(week_start)) => week_start,
        Some(Err(err)) => {
            tracing::debug!(locale, %err, "week start provider returned an unusable value, using default");
            WeekStart::default()
        }
        None => {
            tracing::debug!(locale, "locale unknown to week start provider, using default");
            WeekStart::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::week_start;

    fn by_region(locale: &str) -> Option<u8> {
        match locale {
            "en-US" => Some(0),
            "ar-EG" => Some(6),
            "de-DE" => Some(1),
            "broken" => Some(9),
            _ => None,
        }
    }

    #[test]
    fn test_missing_provider_defaults_to_monday() {
        assert_eq!(resolve_week_start(None, "en-US"), WeekStart::MONDAY);
    }

    #[test]
    fn test_provider_answers() {
        let provider: &dyn WeekStartProvider = &by_region;
        assert_eq!(resolve_week_start(Some(provider), "en-US"), week_start(7));
        assert_eq!(resolve_week_start(Some(provider), "ar-EG"), week_start(6));
        assert_eq!(resolve_week_start(Some(provider), "de-DE"), week_start(1));
    }

    #[test]
    fn test_provider_failures_degrade_to_monday() {
        let provider: &dyn WeekStartProvider = &by_region;
        assert_eq!(resolve_week_start(Some(provider), "xx-XX"), WeekStart::MONDAY);
        assert_eq!(resolve_week_start(Some(provider), "broken"), WeekStart::MONDAY);
    }

    #[test]
    fn test_fixed_provider() {
        let provider = FixedWeekStart(week_start(7));
        assert_eq!(resolve_week_start(Some(&provider), "any"), week_start(7));
    }
}
