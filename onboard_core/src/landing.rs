use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// What the landing screen shows below the headline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LandingStage {
    #[default]
    Idle,
    Loading,
    Redirecting,
}

impl LandingStage {
    pub fn shows_loading(&self) -> bool {
        matches!(self, LandingStage::Loading)
    }

    pub fn shows_redirect_note(&self) -> bool {
        matches!(self, LandingStage::Redirecting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("landing steps must be strictly increasing, got {0:?}")]
    OutOfOrder([Duration; 3]),
}

/// Offsets from mount at which the landing stages change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LandingSchedule {
    show_loading: Duration,
    hide_loading: Duration,
    show_redirect: Duration,
}

impl Default for LandingSchedule {
    fn default() -> Self {
        Self {
            show_loading: Duration::from_millis(2000),
            hide_loading: Duration::from_millis(8000),
            show_redirect: Duration::from_millis(8500),
        }
    }
}

impl LandingSchedule {
    pub fn new(
        show_loading: Duration,
        hide_loading: Duration,
        show_redirect: Duration,
    ) -> Result<Self, ScheduleError> {
        if show_loading < hide_loading && hide_loading < show_redirect {
            Ok(Self {
                show_loading,
                hide_loading,
                show_redirect,
            })
        } else {
            Err(ScheduleError::OutOfOrder([
                show_loading,
                hide_loading,
                show_redirect,
            ]))
        }
    }

    pub fn steps(&self) -> [TimerStep; 3] {
        [
            TimerStep {
                at: self.show_loading,
                stage: LandingStage::Loading,
            },
            TimerStep {
                at: self.hide_loading,
                stage: LandingStage::Idle,
            },
            TimerStep {
                at: self.show_redirect,
                stage: LandingStage::Redirecting,
            },
        ]
    }

    pub fn stage_at(&self, elapsed: Duration) -> LandingStage {
        self.steps()
            .iter()
            .take_while(|step| step.at <= elapsed)
            .last()
            .map_or(LandingStage::Idle, |step| step.stage)
    }
}

/// Schedule as read from a JSON config file; omitted keys keep their default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub show_loading_ms: u64,
    pub hide_loading_ms: u64,
    pub show_redirect_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let schedule = LandingSchedule::default();
        Self {
            show_loading_ms: schedule.show_loading.as_millis() as u64,
            hide_loading_ms: schedule.hide_loading.as_millis() as u64,
            show_redirect_ms: schedule.show_redirect.as_millis() as u64,
        }
    }
}

impl TryFrom<ScheduleConfig> for LandingSchedule {
    type Error = ScheduleError;

    fn try_from(config: ScheduleConfig) -> Result<Self, Self::Error> {
        LandingSchedule::new(
            Duration::from_millis(config.show_loading_ms),
            Duration::from_millis(config.hide_loading_ms),
            Duration::from_millis(config.show_redirect_ms),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerStep {
    pub at: Duration,
    pub stage: LandingStage,
}

/// The landing timers as one unit: they fire in order and are released together.
#[derive(Clone, Debug)]
pub struct TimerGroup {
    steps: [TimerStep; 3],
    next: usize,
    cancelled: bool,
}

impl TimerGroup {
    pub fn new(schedule: &LandingSchedule) -> Self {
        Self {
            steps: schedule.steps(),
            next: 0,
            cancelled: false,
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        self.steps.get(self.next).map(|step| step.at)
    }

    /// Fires every step due by `elapsed` and returns the stage of the last one.
    pub fn fire_due(&mut self, elapsed: Duration) -> Option<LandingStage> {
        if self.cancelled {
            return None;
        }
        let mut fired = None;
        while let Some(step) = self.steps.get(self.next) {
            if step.at > elapsed {
                break;
            }
            fired = Some(step.stage);
            self.next += 1;
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.next >= self.steps.len()
    }
}

/// One row of scrolling tags under the landing headline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeRow {
    pub tags: &'static [&'static str],
    pub duration_secs: f32,
    pub reverse: bool,
    pub enter_delay_secs: f32,
}

static TAG_GROUPS: [[&str; 5]; 5] = [
    ["# JavaScript", "# webdev", "# Typescript", "# Next.js", "# UI/UX"],
    ["# webdev", "# Gatsby", "# JavaScript", "# Tailwind", "# Typescript"],
    ["# animation", "# Tailwind", "# React", "# SVG", "# HTML"],
    ["# Gatsby", "# HTML", "# CSS", "# React", "# Next.js"],
    ["# Next.js", "# React", "# webdev", "# Typescript", "# Gatsby"],
];

static ROW_DURATIONS: [f32; 5] = [15.951, 19.26, 10.449, 16.638, 15.936];

pub fn marquee_rows() -> Vec<MarqueeRow> {
    TAG_GROUPS
        .iter()
        .zip(ROW_DURATIONS)
        .enumerate()
        .map(|(i, (tags, duration_secs))| MarqueeRow {
            tags,
            duration_secs,
            reverse: i % 2 == 1,
            enter_delay_secs: i as f32 * 0.2,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn default_stages_over_time() {
        let schedule = LandingSchedule::default();
        assert_eq!(schedule.stage_at(ms(0)), LandingStage::Idle);
        assert_eq!(schedule.stage_at(ms(1999)), LandingStage::Idle);
        assert_eq!(schedule.stage_at(ms(2000)), LandingStage::Loading);
        assert_eq!(schedule.stage_at(ms(7999)), LandingStage::Loading);
        assert_eq!(schedule.stage_at(ms(8000)), LandingStage::Idle);
        assert_eq!(schedule.stage_at(ms(8499)), LandingStage::Idle);
        assert_eq!(schedule.stage_at(ms(8500)), LandingStage::Redirecting);
        assert_eq!(schedule.stage_at(ms(60_000)), LandingStage::Redirecting);
    }

    #[test]
    fn loading_and_redirect_never_overlap() {
        let schedule = LandingSchedule::default();
        for t in (0..12_000).step_by(50) {
            let stage = schedule.stage_at(ms(t));
            assert!(!(stage.shows_loading() && stage.shows_redirect_note()));
            assert_eq!(stage.shows_loading(), (2000..8000).contains(&t));
            assert_eq!(stage.shows_redirect_note(), t >= 8500);
        }
    }

    #[test]
    fn group_fires_in_order() {
        let mut timers = TimerGroup::new(&LandingSchedule::default());
        let mut seen = Vec::new();
        let mut elapsed = Duration::ZERO;
        while let Some(deadline) = timers.next_deadline() {
            assert!(deadline > elapsed);
            elapsed = deadline;
            seen.extend(timers.fire_due(elapsed));
        }
        assert_eq!(
            seen,
            vec![
                LandingStage::Loading,
                LandingStage::Idle,
                LandingStage::Redirecting
            ]
        );
        assert!(timers.is_finished());
        assert!(!timers.is_cancelled());
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut timers = TimerGroup::new(&LandingSchedule::default());
        assert_eq!(timers.fire_due(ms(1000)), None);
        assert_eq!(timers.next_deadline(), Some(ms(2000)));
    }

    #[test]
    fn late_poll_fires_everything_due() {
        let mut timers = TimerGroup::new(&LandingSchedule::default());
        assert_eq!(timers.fire_due(ms(8200)), Some(LandingStage::Idle));
        assert_eq!(timers.next_deadline(), Some(ms(8500)));
    }

    #[test]
    fn cancel_before_first_step() {
        let mut timers = TimerGroup::new(&LandingSchedule::default());
        assert_eq!(timers.fire_due(ms(1000)), None);
        timers.cancel();

        assert_eq!(timers.next_deadline(), None);
        assert_eq!(timers.fire_due(ms(10_000)), None);
        assert!(timers.is_finished());
    }

    #[test]
    fn cancel_midway_releases_remaining_steps() {
        let mut timers = TimerGroup::new(&LandingSchedule::default());
        assert_eq!(timers.fire_due(ms(3000)), Some(LandingStage::Loading));
        timers.cancel();
        assert_eq!(timers.fire_due(ms(9000)), None);
    }

    #[test]
    fn rejects_unordered_schedule() {
        assert!(LandingSchedule::new(ms(2000), ms(8000), ms(8500)).is_ok());
        assert_eq!(
            LandingSchedule::new(ms(5000), ms(4000), ms(8500)),
            Err(ScheduleError::OutOfOrder([ms(5000), ms(4000), ms(8500)]))
        );
        assert!(LandingSchedule::new(ms(1000), ms(1000), ms(2000)).is_err());
    }

    #[test]
    fn config_fills_defaults() {
        let config: ScheduleConfig = serde_json::from_str(r#"{ "show_loading_ms": 500 }"#).unwrap();
        let schedule = LandingSchedule::try_from(config).unwrap();
        assert_eq!(schedule.stage_at(ms(600)), LandingStage::Loading);
        assert_eq!(schedule.stage_at(ms(8000)), LandingStage::Idle);

        let config: ScheduleConfig =
            serde_json::from_str(r#"{ "hide_loading_ms": 100 }"#).unwrap();
        assert!(LandingSchedule::try_from(config).is_err());
    }

    #[test]
    fn marquee_rows_alternate() {
        let rows = marquee_rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(
            rows.iter().map(|r| r.reverse).collect::<Vec<_>>(),
            vec![false, true, false, true, false]
        );
        assert_eq!(rows[2].duration_secs, 10.449);
        assert!((rows[4].enter_delay_secs - 0.8).abs() < 1e-6);
        assert!(rows.iter().all(|r| r.tags.len() == 5));
    }
}
