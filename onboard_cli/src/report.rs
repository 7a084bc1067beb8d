use std::{fmt::Display, time::Duration};

use serde::Serialize;

use onboard_core::{
    credentials::CredentialDraft,
    landing::{LandingSchedule, TimerGroup},
    selector::Matches,
};

#[derive(Serialize, Debug, PartialEq)]
pub struct LanguageRow {
    pub code: &'static str,
    pub label: &'static str,
    pub flag: &'static str,
    pub exact: bool,
}

impl Display for LanguageRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.exact { "*" } else { " " };
        write!(f, "{marker} {} {:<3}{}", self.flag, self.code, self.label)
    }
}

pub fn language_rows(matches: &Matches<'static>) -> Vec<LanguageRow> {
    matches
        .iter()
        .enumerate()
        .map(|(i, entry)| LanguageRow {
            code: entry.code,
            label: entry.label,
            flag: entry.flag,
            exact: i < matches.exact.len(),
        })
        .collect()
}

#[derive(Serialize, Debug)]
pub struct PreviewReport {
    pub draft: CredentialDraft,
    pub preview: String,
    pub missing: Vec<&'static str>,
}

impl PreviewReport {
    pub fn new(draft: &CredentialDraft) -> Self {
        let draft = draft.redacted();
        Self {
            preview: draft.preview(),
            missing: draft.missing_fields().iter().map(|f| f.name()).collect(),
            draft,
        }
    }
}

/// Steps the landing timers would take, stopping where the page is torn down.
pub fn timeline_lines(schedule: &LandingSchedule, unmount_at: Option<Duration>) -> Vec<String> {
    let mut timers = TimerGroup::new(schedule);
    let mut lines = Vec::new();

    while let Some(deadline) = timers.next_deadline() {
        if let Some(unmount_at) = unmount_at.filter(|at| *at < deadline) {
            timers.cancel();
            lines.push(format!(
                "{:>6} ms  unmounted, pending steps released",
                unmount_at.as_millis()
            ));
            break;
        }
        if let Some(stage) = timers.fire_due(deadline) {
            lines.push(format!("{:>6} ms  {stage:?}", deadline.as_millis()));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::credentials::CredentialField;
    use onboard_core::selector::SelectorState;

    #[test]
    fn exact_rows_are_marked() {
        let mut selector = SelectorState::new();
        selector.set_query("english");
        let rows = language_rows(&selector.ordered());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].exact);
        assert!(rows[0].to_string().starts_with('*'));
    }

    #[test]
    fn preview_report_redacts() {
        let mut draft = CredentialDraft::default();
        draft.set(CredentialField::Password, "hunter2");
        let report = PreviewReport::new(&draft);
        assert!(!report.preview.contains("hunter2"));
        assert_eq!(report.missing, vec!["username", "clusterName", "hostname"]);
    }

    #[test]
    fn full_timeline() {
        let lines = timeline_lines(&LandingSchedule::default(), None);
        assert_eq!(
            lines,
            vec![
                "  2000 ms  Loading",
                "  8000 ms  Idle",
                "  8500 ms  Redirecting",
            ]
        );
    }

    #[test]
    fn early_unmount_fires_nothing() {
        let lines = timeline_lines(&LandingSchedule::default(), Some(Duration::from_secs(1)));
        assert_eq!(lines, vec!["  1000 ms  unmounted, pending steps released"]);
    }
}
